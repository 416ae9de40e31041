//! Lenient decoders for provider figures.
//!
//! Figures arrive either as JSON numbers or as strings. A figure that does not
//! parse, or that `Decimal` cannot hold exactly (more than 28 fractional
//! digits, or a magnitude past its 96-bit range), decodes as `None` with a
//! warning. The field is dropped; the rest of the payload still decodes.
//! Values are never rounded.

use std::collections::HashMap;

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Exponents past this cannot be exact in a `Decimal` anyway.
const MAX_EXPONENT: i64 = 64;

/// Source text of a scalar. Numbers keep their exact wire digits.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.trim().to_string()),
        _ => None,
    }
}

/// Rewrites `1.5e3` style text into plain positional notation.
fn expand_exponent(text: &str) -> Option<String> {
    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&text[..pos], text[pos + 1..].parse::<i64>().ok()?),
        None => return Some(text.to_string()),
    };
    if exponent.abs() > MAX_EXPONENT {
        return None;
    }

    let (sign, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    let all = format!("{}{}", int_part, frac_part);
    if all.is_empty() || !all.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let point = int_part.len() as i64 + exponent;
    let plain = if point <= 0 {
        format!("{}0.{}{}", sign, "0".repeat(point.unsigned_abs() as usize), all)
    } else if point as usize >= all.len() {
        format!("{}{}{}", sign, all, "0".repeat(point as usize - all.len()))
    } else {
        let (whole, fraction) = all.split_at(point as usize);
        format!("{}{}.{}", sign, whole, fraction)
    };
    Some(plain)
}

fn trim_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Exact parse of decimal text, `None` when it cannot be represented without rounding.
pub fn parse_exact_decimal(text: &str) -> Option<Decimal> {
    let plain = expand_exponent(text.trim())?;
    Decimal::from_str_exact(trim_fraction_zeros(&plain)).ok()
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    if value.is_null() {
        return None;
    }
    let text = match scalar_text(value) {
        Some(text) if !text.is_empty() => text,
        Some(_) => return None,
        None => {
            warn!("Dropping non-scalar figure: {}", value);
            return None;
        }
    };
    let parsed = parse_exact_decimal(&text);
    if parsed.is_none() {
        warn!("Dropping figure '{}': not representable as an exact decimal", text);
    }
    parsed
}

fn count_from_value(value: &Value) -> Option<i64> {
    if let Some(count) = value.as_i64() {
        return Some(count);
    }
    let decimal = decimal_from_value(value)?;
    if !decimal.fract().is_zero() {
        warn!("Dropping fractional count '{}'", decimal);
        return None;
    }
    match i64::try_from(decimal) {
        Ok(count) => Some(count),
        Err(_) => {
            warn!("Dropping count '{}': out of range", decimal);
            None
        }
    }
}

/// `Option<Decimal>` from a number, a string or null.
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

/// Integer count from a number or a numeric string.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

/// Map of figures. Keys are kept; unusable values become `None`.
pub(crate) fn decimal_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Value>> = Deserialize::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let figure = decimal_from_value(&value);
            (key, figure)
        })
        .collect())
}

/// Two-level map of figures, such as currency -> period -> value.
pub(crate) fn decimal_table<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, HashMap<String, Option<Decimal>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Option<HashMap<String, Value>>>> =
        Deserialize::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(outer, inner)| {
            let inner = inner
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| {
                    let figure = decimal_from_value(&value);
                    (key, figure)
                })
                .collect();
            (outer, inner)
        })
        .collect())
}
