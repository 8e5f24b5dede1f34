use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left untouched in an encoded fragment: letters, digits, and
/// the plain path characters `.` `/` `-` `_`. Everything else (including
/// `#`, `<`, `>`, and all non-ASCII bytes) becomes an uppercase `%XX`
/// escape.
const FRAGMENT_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'/')
    .remove(b'-')
    .remove(b'_');

/// Percent-encode a sub-path for use as a purl fragment.
///
/// An empty input stays empty; the caller then omits the `#` entirely.
pub fn encode(sub_path: &str) -> String {
    utf8_percent_encode(sub_path, FRAGMENT_ESCAPE).to_string()
}
