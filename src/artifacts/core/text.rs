/// Rendered in place of an absent or empty field
pub const EMPTY_FIELD: &str = "-";

/// Return the prefix of `value` holding at most `max_chars` characters
///
/// Counts characters rather than bytes so that a multi-byte character is
/// never split.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}
