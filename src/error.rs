/// Errors reported by the strict parsing entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty
    EmptyInput,
    /// Scheme contains characters outside `[A-Za-z0-9+.-]` or is empty
    InvalidScheme,
    /// Authority marker `//` present but no host follows it
    InvalidHost,
    /// Port is not a decimal number in `0..=65535`
    InvalidPort,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
