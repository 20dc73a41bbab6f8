//! Ready-made transforms for [`Mapper::from_with`](crate::Mapper::from_with).

use core::hash::Hash;
use std::collections::HashMap;

use serde_json::Value;

use crate::{Mappable, Mapper, MapperError, Result, trace};

/// Build a dictionary out of an array of objects, keyed by `key`.
///
/// Every element must construct as `T`; the first failure aborts. Elements
/// with the same key overwrite earlier ones.
///
/// ```
/// use std::collections::HashMap;
///
/// use mapper::{Mappable, Mapper, transform};
/// use serde_json::json;
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl Mappable for User {
///     fn from_mapper(map: &Mapper<'_>) -> mapper::Result<Self> {
///         Ok(User { id: map.from("id")?, name: map.from("name")? })
///     }
/// }
///
/// let json = json!({"users": [{"id": 1, "name": "ada"}, {"id": 2, "name": "bob"}]});
/// let users: HashMap<u32, User> = Mapper::new(&json)
///     .from_with("users", transform::to_dictionary(|user: &User| user.id))
///     .unwrap();
/// assert_eq!(users[&2].name, "bob");
/// ```
pub fn to_dictionary<K, T, F>(key: F) -> impl Fn(&Value) -> Result<HashMap<K, T>>
where
    K: Eq + Hash,
    T: Mappable,
    F: Fn(&T) -> K,
{
    move |value: &Value| {
        let elements = value
            .as_array()
            .ok_or_else(|| MapperError::conversion_failed(value, "array of objects"))?;
        let mut dictionary = HashMap::with_capacity(elements.len());
        for element in elements {
            if !element.is_object() {
                return Err(MapperError::conversion_failed(value, "array of objects"));
            }
            let item = T::from_mapper(&Mapper::new(element))?;
            if dictionary.insert(key(&item), item).is_some() {
                trace!("to_dictionary: duplicate key, keeping the later element");
            }
        }
        Ok(dictionary)
    }
}
