//! Canonical forms for extracted URLs and titles.
//!
//! Both transforms are total: every input, the empty string included, maps to
//! a canonical output.

/// Redirect wrapper the results page puts in front of outbound links.
pub const REDIRECT_PREFIX: &str = "/url?q=";

/// Characters replaced by a space before whitespace is collapsed.
///
/// U+0080 and U+FFFD both stand for the stray `0x80` byte found in result
/// markup: the former when decoded as Latin-1, the latter once decoded as UTF-8.
const TITLE_CONTROL_CHARS: [char; 5] = ['\n', '\r', '\t', '\u{80}', '\u{FFFD}'];

/// Sanitize a raw `href` using the default [`REDIRECT_PREFIX`].
///
/// ```
/// use serplinks::sanitize::sanitize_url;
///
/// assert_eq!(
///     sanitize_url("/url?q=https://example.com/page&sa=U&ved=abc"),
///     "https://example.com/page"
/// );
/// assert_eq!(sanitize_url("https://example.com/"), "https://example.com/");
/// ```
pub fn sanitize_url(raw: &str) -> String {
    sanitize_url_with(raw, REDIRECT_PREFIX)
}

/// Sanitize a raw `href`: strip the redirect `prefix`, then truncate at the first `&`.
///
/// The prefix is stripped as many times as it repeats, so the result never
/// starts with it and sanitizing twice is the same as sanitizing once.
///
/// The `&` truncation applies to every href, wrapped or not. A target URL that
/// carries its own unencoded `&` loses everything from there on; wrapped
/// targets are expected to have their own query separators percent-encoded.
pub fn sanitize_url_with(raw: &str, prefix: &str) -> String {
    let mut url = raw;
    if !prefix.is_empty() {
        while let Some(rest) = url.strip_prefix(prefix) {
            url = rest;
        }
    }
    match url.find('&') {
        Some(end) => url[..end].to_string(),
        None => url.to_string(),
    }
}

/// Sanitize raw title text.
///
/// Control characters become spaces, every run of whitespace collapses to a
/// single space, and the result is trimmed.
///
/// ```
/// use serplinks::sanitize::sanitize_title;
///
/// assert_eq!(sanitize_title("a\n\tb   c\r"), "a b c");
/// ```
pub fn sanitize_title(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars() {
        let c = if TITLE_CONTROL_CHARS.contains(&c) { ' ' } else { c };
        if c.is_ascii_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out.trim().to_string()
}
