/// Check if a string is a syntactically valid scheme.
/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn is_scheme(input: &str) -> bool {
    let mut bytes = input.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Check if every byte is an ASCII digit (empty strings are not).
pub fn is_all_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if !is_all_digits(port) {
        return None;
    }
    port.parse::<u16>().ok()
}
