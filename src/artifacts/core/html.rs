//! Markup escaping
//!
//! Repository metadata (paths, authors, commit messages) is untrusted and is
//! written into attribute values quoted with either `'` or `"`, so all five
//! markup-significant characters are replaced.

/// Escape `&`, `<`, `>`, `"` and `'` with their entity references
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    push_escaped(&mut escaped, value);
    escaped
}

/// Append the escaped form of `value` to `out` without an intermediate allocation
pub fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
