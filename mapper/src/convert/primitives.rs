use serde_json::{Map, Number, Value};

use super::{Convertible, mismatch_at};
use crate::{MapperError, Result};

impl Convertible for String {
    fn from_untyped(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| MapperError::conversion_failed(value, Self::type_name()))
    }

    fn type_name() -> &'static str {
        "String"
    }

    fn from_field(field: &str, value: &Value) -> Result<Self> {
        mismatch_at(field, value, Self::from_untyped(value))
    }
}

impl Convertible for bool {
    fn from_untyped(value: &Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| MapperError::conversion_failed(value, Self::type_name()))
    }

    fn type_name() -> &'static str {
        "bool"
    }

    fn from_field(field: &str, value: &Value) -> Result<Self> {
        mismatch_at(field, value, Self::from_untyped(value))
    }
}

/// The integral value of `number`, if it has one.
///
/// JSON does not tell integers and floats apart, so `1.0` counts as `1`.
fn integral(number: &Number) -> Option<i128> {
    if let Some(n) = number.as_i64() {
        return Some(n.into());
    }
    if let Some(n) = number.as_u64() {
        return Some(n.into());
    }
    let f = number.as_f64()?;
    let fits = f.is_finite() && f.fract() == 0.0 && f >= i128::MIN as f64 && f < i128::MAX as f64;
    fits.then_some(f as i128)
}

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Convertible for $ty {
                fn from_untyped(value: &Value) -> Result<Self> {
                    value
                        .as_number()
                        .and_then(integral)
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| MapperError::conversion_failed(value, Self::type_name()))
                }

                fn type_name() -> &'static str {
                    stringify!($ty)
                }

                fn from_field(field: &str, value: &Value) -> Result<Self> {
                    mismatch_at(field, value, Self::from_untyped(value))
                }

                fn from_key(key: &str) -> Result<Self> {
                    key.parse().map_err(|_| {
                        MapperError::conversion_failed(&Value::String(key.to_owned()), Self::type_name())
                    })
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Floats also take integers and numeric text.
fn lenient_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl Convertible for f64 {
    fn from_untyped(value: &Value) -> Result<Self> {
        lenient_float(value).ok_or_else(|| MapperError::conversion_failed(value, Self::type_name()))
    }

    fn type_name() -> &'static str {
        "f64"
    }

    fn from_field(field: &str, value: &Value) -> Result<Self> {
        mismatch_at(field, value, Self::from_untyped(value))
    }
}

impl Convertible for f32 {
    fn from_untyped(value: &Value) -> Result<Self> {
        lenient_float(value)
            .and_then(|f| {
                let narrowed = f as f32;
                // finite input must stay finite
                (narrowed.is_finite() || !f.is_finite()).then_some(narrowed)
            })
            .ok_or_else(|| MapperError::conversion_failed(value, Self::type_name()))
    }

    fn type_name() -> &'static str {
        "f32"
    }

    fn from_field(field: &str, value: &Value) -> Result<Self> {
        mismatch_at(field, value, Self::from_untyped(value))
    }
}

/// Any value at all, cloned as-is.
impl Convertible for Value {
    fn from_untyped(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }

    fn type_name() -> &'static str {
        "Value"
    }
}

impl Convertible for Map<String, Value> {
    fn from_untyped(value: &Value) -> Result<Self> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| MapperError::conversion_failed(value, Self::type_name()))
    }

    fn type_name() -> &'static str {
        "object"
    }

    fn from_field(field: &str, value: &Value) -> Result<Self> {
        mismatch_at(field, value, Self::from_untyped(value))
    }
}
