use pkg_constants::naming::{LABEL_LENGTH_SEPARATOR, LABEL_VALUE_MAX_LENGTH};
use tracing::debug;

/// Shorten a label value to at most 63 characters.
///
/// Values that already fit are returned unchanged. Longer values keep as much
/// of their prefix as fits and end with `-<original length>`, so two long
/// values that share a prefix but differ in length stay distinguishable.
pub fn ensure_label_length(value: &str) -> String {
    if value.len() <= LABEL_VALUE_MAX_LENGTH {
        return value.to_string();
    }

    let original_len = value.len().to_string();
    let mut keep = LABEL_VALUE_MAX_LENGTH - 1 - original_len.len();
    while !value.is_char_boundary(keep) {
        keep -= 1;
    }

    debug!(
        "Truncating label value of {} characters to {}",
        value.len(),
        LABEL_VALUE_MAX_LENGTH
    );

    let mut truncated = String::with_capacity(LABEL_VALUE_MAX_LENGTH);
    truncated.push_str(&value[..keep]);
    truncated.push(LABEL_LENGTH_SEPARATOR);
    truncated.push_str(&original_len);
    truncated
}
