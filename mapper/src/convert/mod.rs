//! Conversions from a single untyped value to a typed one.
//!
//! A target type takes part by implementing [`Convertible`]. The crate ships
//! implementations for the JSON scalars ([`String`], [`bool`], every integer
//! width, [`f32`]/[`f64`]), for [`Value`] and [`Map`](serde_json::Map)
//! themselves, for [`Option<T>`], and for a handful of std types that parse
//! from text (see [`StringConvertible`]).
//!
//! Resolution for a target type happens in a fixed order:
//!
//! 1. a direct cast, when the value already has the right JSON shape;
//! 2. for floats, a lenient cast from integers and numeric text;
//! 3. for [`StringConvertible`] types, parsing the text of a JSON string;
//! 4. otherwise the type's own [`Convertible`] implementation.
//!
//! A type has exactly one implementation, so a hand-written one always wins.

use core::any;

use serde_json::Value;

use crate::{MapperError, Result};

mod primitives;
mod text;
pub use text::{StringConvertible, parse_string};

#[cfg(any(feature = "url", feature = "uuid"))]
mod external;

/// A type that can be built from one untyped value.
///
/// ```
/// use mapper::{Convertible, MapperError, Mapper, Value};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// struct Percent(u8);
///
/// impl Convertible for Percent {
///     fn from_untyped(value: &Value) -> mapper::Result<Self> {
///         match value.as_u64() {
///             Some(n) if n <= 100 => Ok(Percent(n as u8)),
///             _ => Err(MapperError::conversion_failed(value, Self::type_name())),
///         }
///     }
/// }
///
/// let json = json!({"progress": 42, "overflow": 120});
/// let map = Mapper::new(&json);
/// assert_eq!(map.from::<Percent>("progress"), Ok(Percent(42)));
/// assert!(map.from::<Percent>("overflow").is_err());
/// ```
pub trait Convertible: Sized {
    /// Build a value of this type, or describe why that is impossible.
    ///
    /// Implementations should fail with [`MapperError::ConversionFailed`]
    /// unless a more specific kind applies.
    fn from_untyped(value: &Value) -> Result<Self>;

    /// Name of this type in diagnostics.
    ///
    /// Defaults to the last path segment of [`core::any::type_name`], or the
    /// full name for generic types.
    fn type_name() -> &'static str {
        short_type_name::<Self>()
    }

    /// Build a value of this type from the value found at `field`.
    ///
    /// The built-in scalar types report a failure here as
    /// [`MapperError::TypeMismatch`]; everything else defaults to
    /// [`from_untyped`](Convertible::from_untyped) and reports its own error.
    fn from_field(field: &str, value: &Value) -> Result<Self> {
        let _ = field;
        Self::from_untyped(value)
    }

    /// Build a value of this type from an object key.
    ///
    /// Object keys are always text. The default hands the key over as a JSON
    /// string; numeric types override this to parse the text.
    fn from_key(key: &str) -> Result<Self> {
        Self::from_untyped(&Value::String(key.to_owned()))
    }
}

/// A type that decides for itself what an absent field means.
///
/// Only [`Mapper::from_or_absent`](crate::Mapper::from_or_absent) consults
/// this trait; every other extraction method reports a missing field as
/// [`MapperError::MissingField`] without involving the target type.
pub trait AbsentConvertible: Sized {
    /// Build a value from what was found, `None` meaning nothing was found.
    fn from_untyped_or_absent(value: Option<&Value>) -> Result<Self>;
}

/// `null` converts to `None`; everything else goes through `T`.
///
/// The field itself must still exist.
impl<T: Convertible> Convertible for Option<T> {
    fn from_untyped(value: &Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_untyped(value).map(Some)
        }
    }

    fn type_name() -> &'static str {
        T::type_name()
    }

    fn from_field(field: &str, value: &Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_field(field, value).map(Some)
        }
    }
}

/// Absent and `null` both convert to `None`.
impl<T: Convertible> AbsentConvertible for Option<T> {
    fn from_untyped_or_absent(value: Option<&Value>) -> Result<Self> {
        match value {
            None => Ok(None),
            Some(value) => <Self as Convertible>::from_untyped(value),
        }
    }
}

pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = any::type_name::<T>();
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}

/// Report a failed built-in cast at `field` as a type mismatch.
pub(crate) fn mismatch_at<T: Convertible>(field: &str, value: &Value, result: Result<T>) -> Result<T> {
    result.map_err(|_| MapperError::type_mismatch(field, value, T::type_name()))
}
