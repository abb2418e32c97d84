use crate::compat::{String, Vec};

/// Split a host into its '.'-separated labels.
pub fn labels(host: &str) -> Vec<&str> {
    host.split('.').collect()
}

/// Everything left of the last two labels, or `None` if that is empty.
pub fn sub_domain(host: &str) -> Option<&str> {
    let end = nth_dot_from_end(host, 2)?;
    Some(&host[..end]).filter(|s| !s.is_empty())
}

/// Second-to-last label.
pub fn domain(host: &str) -> Option<&str> {
    host.rsplit('.').nth(1)
}

/// Last label.
pub fn top_level_domain(host: &str) -> Option<&str> {
    host.rsplit('.').next().filter(|s| !s.is_empty())
}

/// Byte offset of the `n`-th '.' counted from the end (1-based).
fn nth_dot_from_end(host: &str, n: usize) -> Option<usize> {
    host.rmatch_indices('.').nth(n - 1).map(|(pos, _)| pos)
}

/// Replace the label at `index_from_end` (0 = last) with `value`.
/// Returns `None` if the host has no such label.
pub fn replace_label_from_end(host: &str, index_from_end: usize, value: &str) -> Option<String> {
    let mut parts = labels(host);
    let index = parts.len().checked_sub(index_from_end + 1)?;
    parts[index] = value;
    Some(parts.join("."))
}

/// Replace the sub-domain with `value`, or prepend it when there is none.
pub fn replace_sub_domain(host: &str, value: &str) -> String {
    let registrable = strip_sub_domain(host);
    let mut out = String::with_capacity(value.len() + 1 + registrable.len());
    out.push_str(value);
    out.push('.');
    out.push_str(registrable);
    out
}

/// Drop the `"<sub-domain>."` prefix, leaving the last two labels.
pub fn strip_sub_domain(host: &str) -> &str {
    match sub_domain(host) {
        Some(sub) => &host[sub.len() + 1..],
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_three_labels() {
        let host = "lalala.foobar.com";
        assert_eq!(sub_domain(host), Some("lalala"));
        assert_eq!(domain(host), Some("foobar"));
        assert_eq!(top_level_domain(host), Some("com"));
    }

    #[test]
    fn test_split_deep_sub_domain() {
        let host = "a.b.foobar.com";
        assert_eq!(sub_domain(host), Some("a.b"));
        assert_eq!(strip_sub_domain(host), "foobar.com");
    }

    #[test]
    fn test_split_two_and_one_labels() {
        assert_eq!(sub_domain("foobar.com"), None);
        assert_eq!(domain("foobar.com"), Some("foobar"));
        assert_eq!(sub_domain("localhost"), None);
        assert_eq!(domain("localhost"), None);
        assert_eq!(top_level_domain("localhost"), Some("localhost"));
    }

    #[test]
    fn test_replace_label_from_end() {
        assert_eq!(
            replace_label_from_end("foobar.foobar.com", 1, "acme").as_deref(),
            Some("foobar.acme.com")
        );
        assert_eq!(
            replace_label_from_end("foobar.com", 0, "io").as_deref(),
            Some("foobar.io")
        );
        assert_eq!(replace_label_from_end("localhost", 1, "x"), None);
    }

    #[test]
    fn test_replace_sub_domain() {
        assert_eq!(replace_sub_domain("foobar.com", "www"), "www.foobar.com");
        assert_eq!(replace_sub_domain("a.b.foobar.com", "www"), "www.foobar.com");
    }
}
