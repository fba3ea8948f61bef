//! Request-target extraction from access log lines.
//!
//! Only the combined-log request line is understood: the target is the text
//! between `"GET ` and the first ` HTTP/` that follows it. Matching is exact
//! and case-sensitive; the target is not decoded or normalized.

/// Opens the request target: the quoted method followed by one space.
pub const REQUEST_START: &[u8] = b"\"GET ";

/// Closes the request target: the space before the protocol version.
pub const REQUEST_END: &[u8] = b" HTTP/";

/// Extracts the GET request target (path and query) from a raw log line.
///
/// The line must already have its line terminator removed. Both markers are
/// located with a leftmost search, and the end marker is only searched for
/// after the start marker, so a protocol token that precedes the method never
/// closes the span.
///
/// Returns `None` when either marker is missing or the span between them is
/// empty. The returned slice borrows from `line`.
///
/// # Examples
///
/// ```
/// use url_hit_counter::extract::extract_url;
///
/// let line = br#"10.0.0.1 - - [10/Oct/2024:13:55:36 +0000] "GET /index.html?a=1 HTTP/1.1" 200 512"#;
/// assert_eq!(extract_url(line), Some(&b"/index.html?a=1"[..]));
/// assert_eq!(extract_url(br#""POST /form HTTP/1.1" 201"#), None);
/// ```
pub fn extract_url(line: &[u8]) -> Option<&[u8]> {
    let start = find(line, REQUEST_START)? + REQUEST_START.len();
    let rest = &line[start..];
    let len = find(rest, REQUEST_END)?;
    if len == 0 {
        return None;
    }
    Some(&rest[..len])
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
