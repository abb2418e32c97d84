use crate::compat::{String, ToString, Vec, format};

/// Strip every leading and trailing '/'
pub fn trim_slashes(path: &str) -> &str {
    path.trim_matches('/')
}

/// Strip every trailing '/'
pub fn trim_trailing_slashes(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Clamp a 1-based segment index to at least 1 and convert it to 0-based.
fn zero_based(n: isize) -> usize {
    n.max(1).unsigned_abs() - 1
}

/// Split a stored path into its segments (empty path yields no segments).
pub fn segments(path: &str) -> Vec<&str> {
    let trimmed = trim_slashes(path);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

/// Look up the 1-based segment `n`.
/// `n <= 0` reads segment 1; an index past the end or an empty segment is `None`.
pub fn segment(path: &str, n: isize) -> Option<&str> {
    trim_slashes(path)
        .split('/')
        .nth(zero_based(n))
        .filter(|s| !s.is_empty())
}

/// Replace the 1-based segment `n` with `value`, clamping `n` into range.
/// An empty path becomes the single segment `value`.
pub fn replace_segment(path: &str, n: isize, value: &str) -> String {
    let trimmed = trim_slashes(path);
    if trimmed.is_empty() {
        return value.to_string();
    }

    let mut parts: Vec<&str> = trimmed.split('/').collect();
    let index = zero_based(n).min(parts.len() - 1);
    parts[index] = value;
    parts.join("/")
}

/// Replace each `{key}` token in `template` with its value, in the order given.
pub fn substitute_placeholders<I, K, V>(template: &str, vars: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = template.to_string();
    for (key, value) in vars {
        let token = format!("{{{}}}", key.as_ref());
        if out.contains(&token) {
            out = out.replace(&token, value.as_ref());
        }
    }
    out
}
