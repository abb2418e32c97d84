/// Names of the eight URL components a [`crate::UrlComponents`] can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Scheme,
    Host,
    Port,
    User,
    Pass,
    Path,
    Query,
    Fragment,
}

impl Component {
    /// Every component, in serialization order
    pub const ALL: [Self; 8] = [
        Self::Scheme,
        Self::User,
        Self::Pass,
        Self::Host,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];

    /// Lowercase key used for this component
    pub fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Host => "host",
            Self::Port => "port",
            Self::User => "user",
            Self::Pass => "pass",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl core::fmt::Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
