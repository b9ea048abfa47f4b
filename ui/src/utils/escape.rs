/// Escape a string for interpolation into markup.
///
/// Covers ampersand, angle brackets, and both quote styles; everything
/// interpolated into raw HTML (the unenhanced submission form) must pass
/// through here first.
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
