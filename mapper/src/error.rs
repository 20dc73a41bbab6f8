//! The errors produced while extracting typed values.
//!
//! Every fallible operation in this crate fails with exactly one
//! [`MapperError`]. The set of kinds is closed: each one carries enough
//! context (field path, offending value, expected type) to produce a
//! diagnostic without walking the input again.
//!
//! # Example
//!
//! ```
//! use mapper::{Mapper, MapperError};
//! use serde_json::json;
//!
//! let json = json!({"field": 1});
//! let map = Mapper::new(&json);
//!
//! match map.from::<String>("field") {
//!     Err(MapperError::TypeMismatch { field, value, expected }) => {
//!         assert_eq!(field, "field");
//!         assert_eq!(value, json!(1));
//!         assert_eq!(expected, "String");
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use core::fmt;

use serde_json::Value;

/// Alias for a `Result` with the error type [`MapperError`].
pub type Result<T> = core::result::Result<T, MapperError>;

/// Everything that can go wrong when turning untyped JSON into typed values.
///
/// Whether a given error is fatal is up to the caller; optional extraction
/// methods on [`Mapper`](crate::Mapper) discard them all alike.
#[derive(Debug, Clone, PartialEq)]
pub enum MapperError {
    /// Nothing was found at the requested key path.
    MissingField {
        /// The key path that did not resolve.
        field: String,
    },

    /// A value was found but its JSON shape does not fit the requested type.
    TypeMismatch {
        /// The key path the value was found at.
        field: String,
        /// The value that was found.
        value: Value,
        /// The type (or JSON shape, such as `object`) that was expected.
        expected: &'static str,
    },

    /// The value has the right raw type, but no variant of the restricted
    /// value type corresponds to it.
    InvalidRawValue {
        /// The key path the value was found at.
        field: String,
        /// The raw value that matched no variant.
        value: Value,
        /// The restricted value type.
        target: &'static str,
    },

    /// A [`Convertible`](crate::Convertible) implementation rejected the value.
    ConversionFailed {
        /// The value handed to the conversion.
        value: Value,
        /// The type that was being produced.
        target: &'static str,
    },

    /// A domain-level failure raised by user code: a transform function, a
    /// custom conversion or a [`Mappable`](crate::Mappable) implementation.
    Custom {
        /// The key path involved, when known.
        field: Option<String>,
        /// Human-readable description.
        message: String,
    },
}

impl MapperError {
    /// Nothing was found at `field`.
    pub fn missing_field(field: impl Into<String>) -> Self {
        MapperError::MissingField {
            field: field.into(),
        }
    }

    /// `value`, found at `field`, is not shaped like `expected`.
    pub fn type_mismatch(field: impl Into<String>, value: &Value, expected: &'static str) -> Self {
        MapperError::TypeMismatch {
            field: field.into(),
            value: value.clone(),
            expected,
        }
    }

    /// `value`, found at `field`, matches none of `target`'s variants.
    pub fn invalid_raw_value(field: impl Into<String>, value: &Value, target: &'static str) -> Self {
        MapperError::InvalidRawValue {
            field: field.into(),
            value: value.clone(),
            target,
        }
    }

    /// `value` cannot be converted into `target`.
    pub fn conversion_failed(value: &Value, target: &'static str) -> Self {
        MapperError::ConversionFailed {
            value: value.clone(),
            target,
        }
    }

    /// A domain-level failure not tied to a particular field.
    pub fn custom(message: impl Into<String>) -> Self {
        MapperError::Custom {
            field: None,
            message: message.into(),
        }
    }

    /// A domain-level failure at `field`.
    pub fn custom_at(field: impl Into<String>, message: impl Into<String>) -> Self {
        MapperError::Custom {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// The key path this error refers to, if it has one.
    pub fn field(&self) -> Option<&str> {
        match self {
            MapperError::MissingField { field }
            | MapperError::TypeMismatch { field, .. }
            | MapperError::InvalidRawValue { field, .. } => Some(field),
            MapperError::Custom { field, .. } => field.as_deref(),
            MapperError::ConversionFailed { .. } => None,
        }
    }

    /// The offending value, if this error carries one.
    pub fn value(&self) -> Option<&Value> {
        match self {
            MapperError::TypeMismatch { value, .. }
            | MapperError::InvalidRawValue { value, .. }
            | MapperError::ConversionFailed { value, .. } => Some(value),
            MapperError::MissingField { .. } | MapperError::Custom { .. } => None,
        }
    }
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::MissingField { field } => write!(f, "missing field `{field}`"),
            MapperError::TypeMismatch {
                field,
                value,
                expected,
            } => write!(
                f,
                "type mismatch at `{field}`: expected {expected}, got {} {value}",
                ValueType::of(value)
            ),
            MapperError::InvalidRawValue {
                field,
                value,
                target,
            } => write!(f, "invalid raw value {value} at `{field}` for {target}"),
            MapperError::ConversionFailed { value, target } => write!(
                f,
                "cannot convert {} {value} to {target}",
                ValueType::of(value)
            ),
            MapperError::Custom {
                field: Some(field),
                message,
            } => write!(f, "{message} (at `{field}`)"),
            MapperError::Custom {
                field: None,
                message,
            } => f.write_str(message),
        }
    }
}

impl core::error::Error for MapperError {}

/// The JSON shape of an untyped value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Any number, integral or not
    Number,
    /// A string
    String,
    /// An ordered sequence
    Array,
    /// A string-keyed map
    Object,
}

impl ValueType {
    /// Classify `value`.
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Lowercase JSON name of this shape.
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_messages() {
        insta::assert_snapshot!(
            MapperError::missing_field("user.name"),
            @"missing field `user.name`"
        );
        insta::assert_snapshot!(
            MapperError::type_mismatch("field", &json!(1), "String"),
            @"type mismatch at `field`: expected String, got number 1"
        );
        insta::assert_snapshot!(
            MapperError::invalid_raw_value("suit", &json!("hearts"), "Suit"),
            @r#"invalid raw value "hearts" at `suit` for Suit"#
        );
        insta::assert_snapshot!(
            MapperError::conversion_failed(&json!(1), "Url"),
            @"cannot convert number 1 to Url"
        );
        insta::assert_snapshot!(MapperError::custom("boom"), @"boom");
        insta::assert_snapshot!(
            MapperError::custom_at("string", "hi"),
            @"hi (at `string`)"
        );
    }

    #[test]
    fn field_accessor() {
        assert_eq!(MapperError::missing_field("a").field(), Some("a"));
        assert_eq!(MapperError::custom("x").field(), None);
        assert_eq!(MapperError::custom_at("b", "x").field(), Some("b"));
        assert_eq!(
            MapperError::conversion_failed(&json!(true), "Url").field(),
            None
        );
    }

    #[test]
    fn value_accessor() {
        let err = MapperError::type_mismatch("a", &json!([1]), "object");
        assert_eq!(err.value(), Some(&json!([1])));
        assert_eq!(MapperError::missing_field("a").value(), None);
    }

    #[test]
    fn value_types() {
        assert_eq!(ValueType::of(&json!(null)), ValueType::Null);
        assert_eq!(ValueType::of(&json!(false)), ValueType::Bool);
        assert_eq!(ValueType::of(&json!(1.5)), ValueType::Number);
        assert_eq!(ValueType::of(&json!("s")), ValueType::String);
        assert_eq!(ValueType::of(&json!([])), ValueType::Array);
        assert_eq!(ValueType::of(&json!({})), ValueType::Object);
        assert_eq!(ValueType::Object.to_string(), "object");
    }
}
