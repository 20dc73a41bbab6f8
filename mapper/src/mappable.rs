use serde_json::Value;

use crate::{Mapper, Result};

/// A domain type that builds itself from the fields of an untyped object.
///
/// Only [`from_mapper`](Mappable::from_mapper) has to be written; the
/// `*_json` entry points wrap a root value in a [`Mapper`] and extract it at
/// the empty path, so they follow the same rules as nested extraction: the
/// root must be an object (or an array of objects), and errors are the
/// same ones [`Mapper::from_mappable`] would report.
pub trait Mappable: Sized {
    /// Build a value from the fields `map` gives access to.
    fn from_mapper(map: &Mapper<'_>) -> Result<Self>;

    /// Build a value from a root object.
    fn try_from_json(json: &Value) -> Result<Self> {
        Mapper::new(json).from_mappable("")
    }

    /// Build a value from a root object, or `None` if anything fails.
    fn from_json(json: &Value) -> Option<Self> {
        Mapper::new(json).optional_from_mappable("")
    }

    /// Build every element of a root array. The first failure aborts.
    fn try_from_json_array(json: &Value) -> Result<Vec<Self>> {
        Mapper::new(json).from_mappable_array("")
    }

    /// Build every element of a root array, or `None` if any of them fails.
    fn from_json_array(json: &Value) -> Option<Vec<Self>> {
        Mapper::new(json).optional_from_mappable_array("")
    }
}

/// Like [`Mappable`], for types that need extra input besides the JSON to
/// build themselves, such as a lookup table or a base URL.
pub trait MappableWithContext: Sized {
    /// The extra input.
    type Context;

    /// Build a value from the fields `map` gives access to and `context`.
    fn from_mapper_with_context(map: &Mapper<'_>, context: &Self::Context) -> Result<Self>;

    /// Build a value from a root object.
    fn try_from_json_with_context(json: &Value, context: &Self::Context) -> Result<Self> {
        Mapper::new(json).from_contextual("", context)
    }

    /// Build a value from a root object, or `None` if anything fails.
    fn from_json_with_context(json: &Value, context: &Self::Context) -> Option<Self> {
        Mapper::new(json).optional_from_contextual("", context)
    }
}
