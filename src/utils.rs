use crate::errors::TagTreeError;
use std::cmp::Ordering;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

// Validation
pub fn validate_positive_float_parameter(value: f64, parameter: &str) -> Result<(), TagTreeError> {
    validate_float_parameter(value, 0.0, f64::INFINITY, parameter)
}

pub fn validate_float_parameter(value: f64, min: f64, max: f64, parameter: &str) -> Result<(), TagTreeError> {
    if value.is_nan() || value < min || max < value {
        let ex_msg = format!("real value within rang {} and {}", min, max);
        Err(TagTreeError::InvalidParameter(
            parameter.to_string(),
            ex_msg,
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

#[inline]
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

/// Format a gain with a fixed number of decimals, rounding halves up.
///
/// Rounding works on the shortest decimal representation of `gain`, so
/// `0.285` is formatted as `0.29` even though the nearest double is below it.
pub fn fmt_gain(gain: f64, precision: usize) -> String {
    if !gain.is_finite() {
        return format!("{:.*}", precision, gain);
    }
    let sign = if gain.is_sign_negative() { "-" } else { "" };
    let shortest = gain.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .map(|b| b - b'0')
        .collect();
    if frac_part.as_bytes().get(precision).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let rendered: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (whole, decimals) = rendered.split_at(rendered.len() - precision);
    if precision == 0 {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, decimals)
    }
}

/// Order two weighted entries by descending weight,
/// falling back to the ascending key when the weights are equal.
#[inline]
pub fn descending_then_key(weight_a: f64, key_a: &str, weight_b: f64, key_b: &str) -> Ordering {
    if weight_a == weight_b {
        key_a.cmp(key_b)
    } else {
        weight_b.total_cmp(&weight_a)
    }
}

/// Strip a single trailing newline, if there is one.
pub fn strip_trailing_newline(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}
