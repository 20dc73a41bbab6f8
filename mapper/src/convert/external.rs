//! Conversions for third-party types, each behind its own feature.

#[cfg(feature = "url")]
use serde_json::Value;

#[cfg(feature = "url")]
use super::Convertible;
#[cfg(feature = "url")]
use crate::{MapperError, Result};

/// Non-strings fail as a `String` conversion; text that is not a URL fails
/// with a custom error naming the text.
#[cfg(feature = "url")]
impl Convertible for ::url::Url {
    fn from_untyped(value: &Value) -> Result<Self> {
        let text = value
            .as_str()
            .ok_or_else(|| MapperError::conversion_failed(value, "String"))?;
        ::url::Url::parse(text)
            .map_err(|_| MapperError::custom(format!("'{text}' is not a valid URL")))
    }
}

#[cfg(feature = "uuid")]
crate::string_convertible!(::uuid::Uuid);

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use crate::{Convertible, MapperError};
    #[allow(unused_imports)]
    use serde_json::json;

    #[cfg(feature = "url")]
    #[test]
    fn urls() {
        let url = ::url::Url::from_untyped(&json!("https://example.com/a?b=c")).unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.query(), Some("b=c"));
    }

    #[cfg(feature = "url")]
    #[test]
    fn url_errors() {
        assert_eq!(
            ::url::Url::from_untyped(&json!(1)),
            Err(MapperError::conversion_failed(&json!(1), "String"))
        );
        assert_eq!(
            ::url::Url::from_untyped(&json!("not a url")),
            Err(MapperError::custom("'not a url' is not a valid URL"))
        );
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn uuids() {
        let id = ::uuid::Uuid::from_untyped(&json!("67e55044-10b1-426f-9247-bb680e5fe0c8"))
            .unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert!(::uuid::Uuid::from_untyped(&json!("nope")).is_err());
    }
}
