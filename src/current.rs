use crate::compat::{String, ToString, format};

/// Supplies the scheme of the request being served, e.g. `"https"`.
///
/// Implemented for any `Fn() -> String`, so a closure over the caller's
/// request context is enough.
pub trait SchemeDetector {
    fn detect_scheme(&self) -> String;
}

impl<F> SchemeDetector for F
where
    F: Fn() -> String,
{
    fn detect_scheme(&self) -> String {
        self()
    }
}

/// Server-side request flags, as found in CGI-style environments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerVars {
    /// Value of the `HTTPS` variable
    pub https: Option<String>,
    /// Port the request arrived on
    pub server_port: Option<u16>,
}

impl SchemeDetector for ServerVars {
    /// `https` when the HTTPS flag is set to anything but `off`, or the
    /// port is 443; `http` otherwise.
    fn detect_scheme(&self) -> String {
        let https_flag = self
            .https
            .as_deref()
            .is_some_and(|flag| !flag.is_empty() && flag != "off");

        if https_flag || self.server_port == Some(443) {
            "https".to_string()
        } else {
            "http".to_string()
        }
    }
}

/// Build `"{scheme}://{host}{request_target}"` from an injected detector.
///
/// A detector that already appends `://` or `:` is accepted as well.
pub fn current_url<D>(detector: &D, host: &str, request_target: &str) -> String
where
    D: SchemeDetector + ?Sized,
{
    let detected = detector.detect_scheme();
    let scheme = detected
        .strip_suffix("://")
        .or_else(|| detected.strip_suffix(':'))
        .unwrap_or(detected.as_str());

    format!("{scheme}://{host}{request_target}")
}
