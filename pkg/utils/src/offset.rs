use crate::error::{Result, UtilError};

/// Parse a `±HH:MM` UTC offset into signed seconds.
///
/// Only the shape is validated: a sign, two digits, a colon and two digits.
/// Values such as `+24:00` or `+05:75` are accepted as written.
pub fn parse_offset_seconds(offset: &str) -> Result<i32> {
    let malformed = || {
        UtilError::Format(format!(
            "offset '{}' must have the form [+-]HH:MM",
            offset
        ))
    };

    let &[sign, h1, h2, colon, m1, m2] = offset.as_bytes() else {
        return Err(malformed());
    };

    let sign = match sign {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(malformed()),
    };
    if colon != b':' {
        return Err(malformed());
    }
    if ![h1, h2, m1, m2].iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }

    let hours = i32::from(h1 - b'0') * 10 + i32::from(h2 - b'0');
    let minutes = i32::from(m1 - b'0') * 10 + i32::from(m2 - b'0');
    Ok(sign * (hours * 3600 + minutes * 60))
}
