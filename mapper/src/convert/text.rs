use core::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use core::str::FromStr;
use std::path::PathBuf;

use serde_json::Value;

use super::Convertible;
use crate::{MapperError, Result};

/// Marker for [`Convertible`] types that are parsed from the text of a JSON
/// string.
///
/// Implemented together with [`Convertible`] by
/// [`string_convertible!`](crate::string_convertible).
pub trait StringConvertible: FromStr {}

/// Parse the JSON string `value` with `T`'s [`FromStr`] implementation.
///
/// Anything but a string, or text `T` refuses, fails with
/// [`MapperError::ConversionFailed`].
pub fn parse_string<T>(value: &Value) -> Result<T>
where
    T: StringConvertible + Convertible,
{
    value
        .as_str()
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| MapperError::conversion_failed(value, T::type_name()))
}

crate::string_convertible!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, PathBuf, char);
