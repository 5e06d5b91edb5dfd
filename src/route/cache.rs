//! Cache-control synthesis for route responses.

/// A cache-control directive token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDirective {
    MustRevalidate,
    NoCache,
    NoStore,
    NoTransform,
    Public,
    Private,
    ProxyRevalidate,
    MaxAge,
    SMaxage,
}

impl CacheDirective {
    /// The literal token as it appears in the header.
    pub fn token(&self) -> &'static str {
        match self {
            CacheDirective::MustRevalidate => "must-revalidate",
            CacheDirective::NoCache => "no-cache",
            CacheDirective::NoStore => "no-store",
            CacheDirective::NoTransform => "no-transform",
            CacheDirective::Public => "public",
            CacheDirective::Private => "private",
            CacheDirective::ProxyRevalidate => "proxy-revalidate",
            CacheDirective::MaxAge => "max-age",
            CacheDirective::SMaxage => "s-maxage",
        }
    }

    /// Whether the token carries the policy's age, serialized `token=age`.
    pub fn requires_age(&self) -> bool {
        matches!(self, CacheDirective::MaxAge | CacheDirective::SMaxage)
    }
}

/// Cache policy declared on a route.
///
/// Directives render in the order supplied and duplicates are kept; the
/// policy does not second-guess what the route declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    /// Ordered directive tokens.
    pub directives: Vec<CacheDirective>,
    /// Age in seconds for the valued tokens.
    pub age: u64,
}

impl CachePolicy {
    /// Create a policy with no directives and the given age.
    pub fn new(age: u64) -> Self {
        Self {
            directives: Vec::new(),
            age,
        }
    }

    /// Append a directive.
    pub fn directive(mut self, directive: CacheDirective) -> Self {
        self.directives.push(directive);
        self
    }

    /// Render the `cache-control` header value.
    pub fn header_value(&self) -> String {
        self.directives
            .iter()
            .map(|directive| {
                if directive.requires_age() {
                    format!("{}={}", directive.token(), self.age)
                } else {
                    directive.token().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_valued_tokens() {
        let policy = CachePolicy::new(60)
            .directive(CacheDirective::Public)
            .directive(CacheDirective::MaxAge);
        assert_eq!(policy.header_value(), "public, max-age=60");

        let shared = CachePolicy::new(86400)
            .directive(CacheDirective::Private)
            .directive(CacheDirective::SMaxage)
            .directive(CacheDirective::MustRevalidate);
        assert_eq!(
            shared.header_value(),
            "private, s-maxage=86400, must-revalidate"
        );
    }

    #[test]
    fn test_order_and_duplicates_are_preserved() {
        let policy = CachePolicy::new(10)
            .directive(CacheDirective::NoCache)
            .directive(CacheDirective::NoCache)
            .directive(CacheDirective::NoStore);
        assert_eq!(policy.header_value(), "no-cache, no-cache, no-store");
    }

    #[test]
    fn test_empty_policy_renders_empty_value() {
        assert_eq!(CachePolicy::new(60).header_value(), "");
    }

    #[test]
    fn test_default_age() {
        assert_eq!(CachePolicy::default().age, 3600);
    }
}
