use crate::compat::String;

/// Policy knobs shared by a [`crate::Url`] and every value derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlConfig {
    /// Scheme reported by [`crate::Url::scheme`] when none is stored.
    ///
    /// `None` (the default) means an absent scheme reads as absent.
    pub default_scheme: Option<String>,
}

impl UrlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `scheme` whenever a URL carries none of its own
    pub fn with_default_scheme(scheme: impl Into<String>) -> Self {
        Self {
            default_scheme: Some(scheme.into()),
        }
    }
}
