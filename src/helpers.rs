/// Split the fragment (#hash) off a URL string.
/// Returns (`url_without_fragment`, `fragment_without_hash`).
/// Uses memchr for the '#' search.
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split the query (?search) off a fragment-free URL string.
/// Returns (`url_without_query`, `query_without_question_mark`).
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split an authority-first string at the first '/'.
/// Returns (`authority`, `path_with_leading_slash`).
pub fn split_authority(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'/', input.as_bytes())
        .map_or((input, None), |pos| (&input[..pos], Some(&input[pos..])))
}
