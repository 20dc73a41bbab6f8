//! The extractor: typed access to the fields of one untyped value.

use core::error::Error;
use core::hash::Hash;
use std::collections::HashMap;

use mapper_path::{KeyPath, KeyPaths};
use serde_json::Value;

use crate::{
    AbsentConvertible, Convertible, Mappable, MappableWithContext, MapperError, RawRepresentable,
    Result, debug, trace,
};

/// A read-only view over one untyped value, handing out typed fields.
///
/// Every extraction method takes one or more candidate key paths (see
/// [`KeyPaths`]). A required method tries the candidates in order and returns
/// the first success; when all of them fail, the failure of the last one is
/// returned. Its `optional_*` twin returns the first success or `None`, and
/// never fails.
///
/// Nothing is cached: every call resolves its path again.
///
/// ```
/// use mapper::{Mappable, Mapper, MapperError};
/// use serde_json::json;
///
/// struct User {
///     name: String,
///     email: Option<String>,
/// }
///
/// impl Mappable for User {
///     fn from_mapper(map: &Mapper<'_>) -> mapper::Result<Self> {
///         Ok(User {
///             name: map.from(["name", "login"])?,
///             email: map.optional_from("contact.email"),
///         })
///     }
/// }
///
/// let user = User::try_from_json(&json!({"login": "ada"})).unwrap();
/// assert_eq!(user.name, "ada");
/// assert_eq!(user.email, None);
///
/// let err = User::try_from_json(&json!({})).err().unwrap();
/// assert_eq!(err, MapperError::missing_field("login"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Mapper<'a> {
    json: &'a Value,
}

impl<'a> Mapper<'a> {
    /// Wrap `json` for extraction.
    pub const fn new(json: &'a Value) -> Self {
        Self { json }
    }

    /// The value this mapper reads from.
    pub const fn json(&self) -> &'a Value {
        self.json
    }

    fn resolve(&self, field: &str) -> Option<&'a Value> {
        let found = KeyPath::new(field).resolve(self.json);
        trace!("resolve `{field}`: found={}", found.is_some());
        found
    }

    fn require(&self, field: &str) -> Result<&'a Value> {
        self.resolve(field)
            .ok_or_else(|| MapperError::missing_field(field))
    }

    /// Try `extract` on each candidate path, keeping the last failure.
    fn first_success<T>(
        &self,
        fields: impl KeyPaths,
        mut extract: impl FnMut(&str) -> Result<T>,
    ) -> Result<T> {
        let mut last = None;
        for field in fields.key_paths() {
            match extract(field) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    trace!("candidate `{field}` failed: {err}");
                    last = Some(err);
                }
            }
        }
        Err(last.unwrap_or_else(|| MapperError::missing_field("")))
    }

    /// A [`Convertible`] value.
    ///
    /// Fails with [`MapperError::MissingField`] when no candidate resolves,
    /// otherwise with whatever [`Convertible::from_field`] reports.
    pub fn from<T: Convertible>(&self, fields: impl KeyPaths) -> Result<T> {
        self.first_success(fields, |field| {
            let value = self.require(field)?;
            T::from_field(field, value)
        })
    }

    /// See [`from`](Self::from).
    pub fn optional_from<T: Convertible>(&self, fields: impl KeyPaths) -> Option<T> {
        discard(self.from(fields))
    }

    /// A restricted value, stored as its raw representation.
    ///
    /// A value that does not cast to `T::Raw` fails with
    /// [`MapperError::TypeMismatch`]; a raw value no variant corresponds to
    /// fails with [`MapperError::InvalidRawValue`].
    pub fn from_raw<T: RawRepresentable>(&self, fields: impl KeyPaths) -> Result<T> {
        self.first_success(fields, |field| {
            let value = self.require(field)?;
            let raw = <T::Raw as Convertible>::from_untyped(value).map_err(|_| {
                MapperError::type_mismatch(field, value, <T::Raw as Convertible>::type_name())
            })?;
            T::from_raw(raw).ok_or_else(|| {
                MapperError::invalid_raw_value(field, value, <T as RawRepresentable>::type_name())
            })
        })
    }

    /// See [`from_raw`](Self::from_raw).
    pub fn optional_from_raw<T: RawRepresentable>(&self, fields: impl KeyPaths) -> Option<T> {
        discard(self.from_raw(fields))
    }

    /// A nested object.
    ///
    /// Fails with [`MapperError::TypeMismatch`] when the value is not an
    /// object; errors from `T`'s own construction propagate unchanged.
    pub fn from_mappable<T: Mappable>(&self, fields: impl KeyPaths) -> Result<T> {
        self.first_success(fields, |field| {
            let value = self.require(field)?;
            nested(field, value, T::from_mapper)
        })
    }

    /// See [`from_mappable`](Self::from_mappable).
    pub fn optional_from_mappable<T: Mappable>(&self, fields: impl KeyPaths) -> Option<T> {
        discard(self.from_mappable(fields))
    }

    /// An array of nested objects, all of which must construct.
    ///
    /// An element that is not an object is reported at `field[index]`.
    pub fn from_mappable_array<T: Mappable>(&self, fields: impl KeyPaths) -> Result<Vec<T>> {
        self.first_success(fields, |field| {
            let elements = self.require_array(field)?;
            elements
                .iter()
                .enumerate()
                .map(|(index, element)| nested(&format!("{field}[{index}]"), element, T::from_mapper))
                .collect()
        })
    }

    /// See [`from_mappable_array`](Self::from_mappable_array).
    pub fn optional_from_mappable_array<T: Mappable>(&self, fields: impl KeyPaths) -> Option<Vec<T>> {
        discard(self.from_mappable_array(fields))
    }

    /// An array of [`Convertible`] values, all of which must convert.
    pub fn from_array<T: Convertible>(&self, fields: impl KeyPaths) -> Result<Vec<T>> {
        self.first_success(fields, |field| {
            self.require_array(field)?
                .iter()
                .map(T::from_untyped)
                .collect()
        })
    }

    /// See [`from_array`](Self::from_array).
    pub fn optional_from_array<T: Convertible>(&self, fields: impl KeyPaths) -> Option<Vec<T>> {
        discard(self.from_array(fields))
    }

    /// An array of restricted values, tolerating unknown raw values.
    ///
    /// A raw value no variant corresponds to is replaced by `default`, or
    /// dropped when there is none. An element that is not even a valid raw
    /// value still fails the whole array.
    pub fn from_raw_array<T>(&self, fields: impl KeyPaths, default: Option<T>) -> Result<Vec<T>>
    where
        T: RawRepresentable + Clone,
    {
        self.first_success(fields, |field| {
            let elements = self.require_array(field)?;
            let mut values = Vec::with_capacity(elements.len());
            for element in elements {
                let raw = <T::Raw as Convertible>::from_untyped(element)?;
                match (T::from_raw(raw), &default) {
                    (Some(value), _) => values.push(value),
                    (None, Some(default)) => {
                        debug!("`{field}`: unknown raw value {element}, using the default");
                        values.push(default.clone());
                    }
                    (None, None) => {
                        debug!("`{field}`: unknown raw value {element}, dropped");
                    }
                }
            }
            Ok(values)
        })
    }

    /// See [`from_raw_array`](Self::from_raw_array).
    pub fn optional_from_raw_array<T>(&self, fields: impl KeyPaths, default: Option<T>) -> Option<Vec<T>>
    where
        T: RawRepresentable + Clone,
    {
        discard(self.from_raw_array(fields, default))
    }

    /// An object of [`Convertible`] values, keyed by [`Convertible`] keys.
    ///
    /// Keys are converted from their text with [`Convertible::from_key`], so
    /// numeric keys such as `"1"` work. Any key or value that fails to
    /// convert fails the whole dictionary.
    pub fn from_dictionary<K, V>(&self, fields: impl KeyPaths) -> Result<HashMap<K, V>>
    where
        K: Convertible + Eq + Hash,
        V: Convertible,
    {
        self.first_success(fields, |field| {
            let value = self.require(field)?;
            let object = value
                .as_object()
                .ok_or_else(|| MapperError::type_mismatch(field, value, "object"))?;
            object
                .iter()
                .map(|(key, value)| -> Result<(K, V)> {
                    let key = K::from_key(key)?;
                    Ok((key, V::from_untyped(value)?))
                })
                .collect()
        })
    }

    /// See [`from_dictionary`](Self::from_dictionary).
    pub fn optional_from_dictionary<K, V>(&self, fields: impl KeyPaths) -> Option<HashMap<K, V>>
    where
        K: Convertible + Eq + Hash,
        V: Convertible,
    {
        discard(self.from_dictionary(fields))
    }

    /// Any value, built by `transform` from the untyped value.
    ///
    /// A [`MapperError`] returned by `transform` propagates unchanged; any
    /// other error becomes [`MapperError::Custom`] at the field.
    ///
    /// ```
    /// use mapper::{Mapper, MapperError};
    /// use serde_json::json;
    ///
    /// let json = json!({"tags": "a,b,c"});
    /// let tags: Vec<String> = Mapper::new(&json)
    ///     .from_with("tags", |value| {
    ///         let text = value.as_str().ok_or("tags must be text")?;
    ///         Ok::<_, &str>(text.split(',').map(str::to_owned).collect())
    ///     })
    ///     .unwrap();
    /// assert_eq!(tags, ["a", "b", "c"]);
    ///
    /// let json = json!({"tags": 3});
    /// let err = Mapper::new(&json)
    ///     .from_with("tags", |value| value.as_str().map(str::len).ok_or("tags must be text"))
    ///     .unwrap_err();
    /// assert_eq!(err, MapperError::custom_at("tags", "tags must be text"));
    /// ```
    pub fn from_with<T, E, F>(&self, fields: impl KeyPaths, transform: F) -> Result<T>
    where
        F: Fn(&Value) -> core::result::Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        self.first_success(fields, |field| {
            let value = self.require(field)?;
            transform(value).map_err(|err| transform_error(field, err.into()))
        })
    }

    /// See [`from_with`](Self::from_with).
    pub fn optional_from_with<T, E, F>(&self, fields: impl KeyPaths, transform: F) -> Option<T>
    where
        F: Fn(&Value) -> core::result::Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        discard(self.from_with(fields, transform))
    }

    /// A value of a type that handles absence itself.
    ///
    /// The first candidate that resolves and converts wins. When no candidate
    /// resolves at all, `T` is asked to build a value from nothing, so this
    /// never fails with [`MapperError::MissingField`] unless `T` says so.
    pub fn from_or_absent<T: AbsentConvertible>(&self, fields: impl KeyPaths) -> Result<T> {
        let mut last = None;
        for field in fields.key_paths() {
            if let Some(value) = self.resolve(field) {
                match T::from_untyped_or_absent(Some(value)) {
                    Ok(value) => return Ok(value),
                    Err(err) => last = Some(err),
                }
            }
        }
        match last {
            Some(err) => Err(err),
            None => T::from_untyped_or_absent(None),
        }
    }

    /// See [`from_or_absent`](Self::from_or_absent).
    pub fn optional_from_or_absent<T: AbsentConvertible>(&self, fields: impl KeyPaths) -> Option<T> {
        discard(self.from_or_absent(fields))
    }

    /// A nested object that needs `context` to construct.
    pub fn from_contextual<T: MappableWithContext>(
        &self,
        fields: impl KeyPaths,
        context: &T::Context,
    ) -> Result<T> {
        self.first_success(fields, |field| {
            let value = self.require(field)?;
            nested(field, value, |map| T::from_mapper_with_context(map, context))
        })
    }

    /// See [`from_contextual`](Self::from_contextual).
    pub fn optional_from_contextual<T: MappableWithContext>(
        &self,
        fields: impl KeyPaths,
        context: &T::Context,
    ) -> Option<T> {
        discard(self.from_contextual(fields, context))
    }

    /// An array of nested objects that all share `context`.
    pub fn from_contextual_array<T: MappableWithContext>(
        &self,
        fields: impl KeyPaths,
        context: &T::Context,
    ) -> Result<Vec<T>> {
        self.first_success(fields, |field| {
            let elements = self.require_array(field)?;
            elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    nested(&format!("{field}[{index}]"), element, |map| {
                        T::from_mapper_with_context(map, context)
                    })
                })
                .collect()
        })
    }

    /// See [`from_contextual_array`](Self::from_contextual_array).
    pub fn optional_from_contextual_array<T: MappableWithContext>(
        &self,
        fields: impl KeyPaths,
        context: &T::Context,
    ) -> Option<Vec<T>> {
        discard(self.from_contextual_array(fields, context))
    }

    fn require_array(&self, field: &str) -> Result<&'a Vec<Value>> {
        let value = self.require(field)?;
        value
            .as_array()
            .ok_or_else(|| MapperError::type_mismatch(field, value, "array"))
    }
}

/// Build a nested value from `value`, which must be an object.
fn nested<T>(
    field: &str,
    value: &Value,
    build: impl FnOnce(&Mapper<'_>) -> Result<T>,
) -> Result<T> {
    if !value.is_object() {
        return Err(MapperError::type_mismatch(field, value, "object"));
    }
    build(&Mapper::new(value))
}

fn transform_error(field: &str, err: Box<dyn Error + Send + Sync>) -> MapperError {
    match err.downcast::<MapperError>() {
        Ok(err) => *err,
        Err(other) => MapperError::custom_at(field, other.to_string()),
    }
}

fn discard<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_err) => {
            debug!("optional extraction discarded: {_err}");
            None
        }
    }
}
