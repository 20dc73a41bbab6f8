#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod error;
pub use error::{MapperError, Result, ValueType};

pub mod convert;
pub use convert::{AbsentConvertible, Convertible, StringConvertible};

mod raw;
pub use raw::RawRepresentable;

mod mapper;
pub use mapper::Mapper;

mod mappable;
pub use mappable::{Mappable, MappableWithContext};

pub mod transform;

pub use mapper_path::{KeyPath, KeyPaths};
pub use serde_json::{Map, Value};

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}

/// Implement [`RawRepresentable`] for a fieldless enum by listing the raw
/// value each variant corresponds to.
///
/// Raw values that match none of the listed ones produce `None`, which the
/// extraction methods report as [`MapperError::InvalidRawValue`].
///
/// ```
/// use mapper::{Mapper, raw_representable};
/// use serde_json::json;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Suit {
///     Spades,
///     Hearts,
/// }
///
/// raw_representable!(Suit: String {
///     Suit::Spades => "spades",
///     Suit::Hearts => "hearts",
/// });
///
/// let json = json!({"suit": "hearts"});
/// let suit: Suit = Mapper::new(&json).from_raw("suit").unwrap();
/// assert_eq!(suit, Suit::Hearts);
/// ```
#[macro_export]
macro_rules! raw_representable {
    ($ty:ty : $raw:ty { $($variant:path => $value:expr),+ $(,)? }) => {
        impl $crate::RawRepresentable for $ty {
            type Raw = $raw;

            fn from_raw(raw: $raw) -> ::core::option::Option<Self> {
                $(
                    if raw == $value {
                        return ::core::option::Option::Some($variant);
                    }
                )+
                ::core::option::Option::None
            }
        }
    };
}

/// Implement [`Convertible`] for types that parse from the text of a JSON
/// string through [`FromStr`](core::str::FromStr).
///
/// Non-string values and text that fails to parse are rejected with
/// [`MapperError::ConversionFailed`].
///
/// ```
/// use mapper::{Mapper, string_convertible};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius(f64);
///
/// impl core::str::FromStr for Celsius {
///     type Err = core::num::ParseFloatError;
///
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         s.trim_end_matches("°C").parse().map(Celsius)
///     }
/// }
///
/// string_convertible!(Celsius);
///
/// let json = json!({"temperature": "21.5°C"});
/// let t: Celsius = Mapper::new(&json).from("temperature").unwrap();
/// assert_eq!(t, Celsius(21.5));
/// ```
#[macro_export]
macro_rules! string_convertible {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::StringConvertible for $ty {}

            impl $crate::Convertible for $ty {
                fn from_untyped(value: &$crate::Value) -> $crate::Result<Self> {
                    $crate::convert::parse_string(value)
                }
            }
        )+
    };
}
