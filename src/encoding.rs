use crate::compat::{Cow, String};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};

/// Form-urlencoded set: everything except ASCII alphanumerics and `-`, `_`, `.`
/// Space is in the set and rewritten to `+` by [`form_encode_into`].
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Write the form-encoded form of `input` into `buffer`.
pub fn form_encode_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, FORM_SET) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a form-encoded component: `+` is a space, `%XX` escapes are
/// decoded, invalid UTF-8 is replaced lossily.
pub fn form_decode(input: &str) -> Cow<'_, str> {
    if !input.bytes().any(|b| b == b'+' || b == b'%') {
        return Cow::Borrowed(input);
    }

    let spaced = input.replace('+', " ");
    let decoded = percent_decode(spaced.as_bytes()).decode_utf8_lossy();
    Cow::Owned(decoded.into_owned())
}
