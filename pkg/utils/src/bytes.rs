use crate::error::{Result, UtilError};

const KI: i64 = 1 << 10;
const MI: i64 = 1 << 20;
const GI: i64 = 1 << 30;
const TI: i64 = 1 << 40;
const PI: i64 = 1 << 50;
const EI: i64 = 1 << 60;

/// Binary units, largest first. Selection is greedy in this order.
const UNITS: [(i64, &str); 6] = [
    (EI, "Ei"),
    (PI, "Pi"),
    (TI, "Ti"),
    (GI, "Gi"),
    (MI, "Mi"),
    (KI, "Ki"),
];

/// Render a byte count in the largest binary unit that divides it exactly.
///
/// `1024` becomes `"1Ki"`, `4 GiB` becomes `"4Gi"`. Counts that no unit
/// divides (including anything below 1 KiB) are rendered as plain decimals.
pub fn format_bytes(bytes: i64) -> Result<String> {
    if bytes < 0 {
        return Err(UtilError::NegativeBytes(bytes));
    }
    if bytes != 0 {
        for (unit, suffix) in UNITS {
            if bytes % unit == 0 {
                return Ok(format!("{}{}", bytes / unit, suffix));
            }
        }
    }
    Ok(bytes.to_string())
}

/// Parse a quantity in the form produced by [`format_bytes`] back into bytes.
pub fn parse_bytes(quantity: &str) -> Result<i64> {
    let digits_end = quantity
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(quantity.len());
    let (digits, suffix) = quantity.split_at(digits_end);

    if digits.is_empty() {
        return Err(UtilError::Format(format!(
            "quantity '{}' must start with a decimal number",
            quantity
        )));
    }

    let unit = if suffix.is_empty() {
        1
    } else {
        UNITS
            .iter()
            .find(|(_, s)| *s == suffix)
            .map(|(u, _)| *u)
            .ok_or_else(|| {
                UtilError::Format(format!(
                    "quantity '{}' has unknown unit '{}' (expected Ki, Mi, Gi, Ti, Pi or Ei)",
                    quantity, suffix
                ))
            })?
    };

    digits
        .parse::<i64>()
        .ok()
        .and_then(|n| n.checked_mul(unit))
        .ok_or_else(|| UtilError::Format(format!("quantity '{}' overflows i64", quantity)))
}
