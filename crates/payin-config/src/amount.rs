use num_bigint::BigUint;

use crate::error::AmountError;

/// Render a smallest-unit amount with `decimals` fractional digits.
///
/// Trailing fractional zeros are trimmed; a zero fraction below one unit
/// renders as `"0.0"`.
pub fn format_units(amount: &BigUint, decimals: u8) -> String {
    let s = amount.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return s;
    }

    if s.len() <= decimals {
        let mut result = String::from("0.");
        result.extend(std::iter::repeat_n('0', decimals - s.len()));
        result.push_str(&s);
        let trimmed = result.trim_end_matches('0');
        if trimmed.ends_with('.') {
            return format!("{trimmed}0");
        }
        return trimmed.to_string();
    }

    let (integer_part, fraction) = s.split_at(s.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer_part.to_string()
    } else {
        format!("{integer_part}.{fraction}")
    }
}

/// Convert a user-entered amount such as `"12.5"` into smallest units.
pub fn parse_units(value: &str, decimals: u8) -> Result<BigUint, AmountError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    let (integer_part, fraction) = value.split_once('.').unwrap_or((value, ""));
    if integer_part.is_empty() && fraction.is_empty() {
        return Err(AmountError::Empty);
    }
    if let Some(found) = integer_part
        .chars()
        .chain(fraction.chars())
        .find(|c| !c.is_ascii_digit())
    {
        return Err(AmountError::InvalidCharacter { found });
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(AmountError::TooPrecise {
            allowed: decimals,
            actual: fraction.len(),
        });
    }

    let mut digits = String::with_capacity(integer_part.len() + decimals as usize);
    digits.push_str(integer_part);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat_n('0', decimals as usize - fraction.len()));
    if digits.is_empty() {
        digits.push('0');
    }

    // Only ASCII digits remain, so parsing cannot fail on content.
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(AmountError::Empty)
}
