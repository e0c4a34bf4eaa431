// src/core/analyzer/normalizer.rs

/// Normalizes raw text for word extraction.
///
/// The text is lowercased, every character that is not an ASCII letter becomes a
/// separator, separator runs collapse to a single space and the ends are trimmed.
/// Only ASCII letters survive, so accented and non-Latin letters split words.
///
/// # Examples
///
/// ```
/// use wordstat::normalize;
///
/// assert_eq!(normalize("  Hello,   World!! 42 "), "hello world");
/// assert_eq!(normalize(""), "");
/// ```
#[inline]
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.chars() {
        if c.is_ascii_alphabetic() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}
