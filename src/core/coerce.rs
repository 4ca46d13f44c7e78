//! Integer coercion for pixel geometry.
//!
//! Every size, anchor and origin value ends up as an `i32`, whatever numeric
//! type the caller hands in. Coercion never fails: floats truncate toward
//! zero, out-of-range values saturate and NaN becomes 0.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Anything that can be coerced into a pixel coordinate.
pub trait PixelValue: Copy {
    fn to_px(self) -> i32;
}

macro_rules! impl_pixel_value_int {
    ($($t:ty),*) => {
        $(
            impl PixelValue for $t {
                fn to_px(self) -> i32 {
                    (self as i128).clamp(i32::MIN as i128, i32::MAX as i128) as i32
                }
            }
        )*
    };
}

impl_pixel_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl PixelValue for f32 {
    fn to_px(self) -> i32 {
        self as i32
    }
}

impl PixelValue for f64 {
    fn to_px(self) -> i32 {
        self as i32
    }
}

impl PixelValue for bool {
    fn to_px(self) -> i32 {
        i32::from(self)
    }
}

/// Coerces a loosely typed JSON value. `null` means "unset".
pub fn px_from_json(value: &Value) -> Option<i32> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_px()),
        Value::Number(n) => Some(
            n.as_i64()
                .map(PixelValue::to_px)
                .or_else(|| n.as_u64().map(PixelValue::to_px))
                .or_else(|| n.as_f64().map(PixelValue::to_px))
                .unwrap_or(0),
        ),
        Value::String(s) => Some(px_from_str(s)),
        Value::Array(items) => Some(i32::from(!items.is_empty())),
        Value::Object(map) => Some(i32::from(!map.is_empty())),
    }
}

/// Numeric strings parse fully; otherwise the leading integer prefix is
/// used, and a string without one is 0. `inf` and `nan` have no prefix.
pub fn px_from_str(s: &str) -> i32 {
    let trimmed = s.trim();
    if let Ok(v) = trimmed.parse::<f64>() {
        if v.is_finite() {
            return v.to_px();
        }
    }

    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }

    trimmed[..end]
        .parse::<i128>()
        .map(PixelValue::to_px)
        .unwrap_or(0)
}

/// `deserialize_with` helper for optional pixel fields.
pub fn deserialize_opt_px<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(px_from_json(&value))
}
