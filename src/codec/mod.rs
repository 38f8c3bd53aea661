//! Numeric text conversion for editable UI fields
//!
//! Fields such as a rating or an ABV value are displayed as text and parsed
//! back after editing. Conversion never fails:
//!
//! - **`encode`**: always produces text, using `f64`'s `Display` form
//!   (shortest text that parses back to the same value, `.` as decimal separator)
//! - **`decode`**: unparseable text becomes `0.0`
//! - **`encode_any`**: a value that is not a float becomes the empty string
//!
//! Non-finite values are only decoded from the exact spellings `encode`
//! produces (`NaN`, `inf`, `-inf`). Other words such as `nan` or `Infinity`
//! decode to `0.0` like any other non-numeric text.
//!
//! The two fallbacks differ on purpose: an empty string means "nothing to show",
//! `0.0` means "a literal zero". Callers may rely on telling them apart.
//!
//! # Examples
//!
//! ```
//! use catalog_search::codec::{decode, encode, encode_any};
//!
//! assert_eq!(encode(4.5), "4.5");
//! assert_eq!(decode("4.5"), 4.5);
//! assert_eq!(decode("strong"), 0.0);
//! assert_eq!(encode_any(&"strong"), "");
//! ```

use std::any::Any;

/// Value returned by [`decode`] when the text is not a number
pub const DECODE_FALLBACK: f64 = 0.0;

/// Text forms `encode` gives non-finite values
pub const NON_FINITE_SPELLINGS: [&str; 3] = ["NaN", "inf", "-inf"];

/// Render a float as text
#[must_use]
pub fn encode(value: f64) -> String {
    value.to_string()
}

/// Parse text as a float, falling back to [`DECODE_FALLBACK`]
///
/// Surrounding whitespace is ignored. Thousands separators and locale decimal
/// commas are not accepted, and a non-finite result is only kept when the text
/// is one of [`NON_FINITE_SPELLINGS`].
#[must_use]
pub fn decode(text: &str) -> f64 {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() || NON_FINITE_SPELLINGS.contains(&text) => value,
        _ => DECODE_FALLBACK,
    }
}

/// Render an untyped binding value as text
///
/// Only `f64` and `f32` are rendered; every other type yields an empty string.
#[must_use]
pub fn encode_any(value: &dyn Any) -> String {
    if let Some(v) = value.downcast_ref::<f64>() {
        encode(*v)
    } else if let Some(v) = value.downcast_ref::<f32>() {
        encode(f64::from(*v))
    } else {
        String::new()
    }
}

/// Two-way conversion between a value and its text form
///
/// Implemented by codecs that a data-binding layer holds for a field.
pub trait TextCodec {
    /// The value type shown in the field
    type Value;

    /// Convert a value to display text
    fn to_text(&self, value: &Self::Value) -> String;

    /// Convert edited text back to a value
    fn from_text(&self, text: &str) -> Self::Value;
}

/// Codec for floating-point fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatTextCodec;

impl TextCodec for FloatTextCodec {
    type Value = f64;

    fn to_text(&self, value: &f64) -> String {
        encode(*value)
    }

    fn from_text(&self, text: &str) -> f64 {
        decode(text)
    }
}
