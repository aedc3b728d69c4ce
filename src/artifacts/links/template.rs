//! Placeholder substitution in URL templates
//!
//! Templates are scanned once from left to right. Every recognised token that
//! has a value is replaced by the HTML-escaped value; the substituted text is
//! never scanned again, so a file literally named `[revision].c` stays as it
//! is. Unknown bracketed text and placeholders without a value (for example
//! `[old_revision]` on a Git row) are copied unchanged.

use crate::artifacts::core::html::push_escaped;
use crate::artifacts::links::placeholder::{MAX_TOKEN_LENGTH, Placeholder};
use crate::artifacts::links::properties::LinkProperties;

pub fn render_link(template: &str, properties: &LinkProperties) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('[') {
        rendered.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match substitution(candidate, properties) {
            Some((token_length, value)) => {
                push_escaped(&mut rendered, value);
                rest = &candidate[token_length..];
            }
            None => {
                rendered.push('[');
                rest = &candidate[1..];
            }
        }
    }
    rendered.push_str(rest);

    rendered
}

/// Value for the token at the start of `candidate`, with the token's length
fn substitution<'p>(candidate: &str, properties: &'p LinkProperties) -> Option<(usize, &'p str)> {
    let close = candidate
        .bytes()
        .take(MAX_TOKEN_LENGTH)
        .position(|b| b == b']')?;
    let token = &candidate[..=close];
    let placeholder = Placeholder::from_token(token)?;
    let value = properties.get(placeholder)?;

    Some((token.len(), value))
}
