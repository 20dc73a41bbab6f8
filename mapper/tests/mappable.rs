//! Nested objects, arrays and dictionaries of them.

use std::collections::HashMap;

use mapper::{Mappable, MappableWithContext, Mapper, MapperError};
use serde_json::json;

#[derive(Debug, PartialEq)]
struct Test {
    string: String,
}

impl Mappable for Test {
    fn from_mapper(map: &Mapper<'_>) -> mapper::Result<Self> {
        Ok(Test {
            string: map.from("string")?,
        })
    }
}

#[derive(Debug, PartialEq)]
struct Outer {
    nest: Test,
}

impl Mappable for Outer {
    fn from_mapper(map: &Mapper<'_>) -> mapper::Result<Self> {
        Ok(Outer {
            nest: map.from_mappable("nest")?,
        })
    }
}

#[test]
fn mappable_round_trip() {
    mapper_testhelpers::setup();

    let test = Test::try_from_json(&json!({"string": "Hi"})).unwrap();
    assert_eq!(test.string, "Hi");
    assert_eq!(Test::from_json(&json!({"string": "Hi"})), Some(test));
}

#[test]
fn mappable_missing_field() {
    mapper_testhelpers::setup();

    assert_eq!(
        Test::try_from_json(&json!({})),
        Err(MapperError::missing_field("string"))
    );
    assert_eq!(Test::from_json(&json!({})), None);
}

#[test]
fn nested_failure_propagates_unchanged() {
    mapper_testhelpers::setup();

    assert_eq!(
        Outer::try_from_json(&json!({"nest": {"foo": "bar"}})),
        Err(MapperError::missing_field("string"))
    );
}

#[test]
fn nested_value_must_be_an_object() {
    mapper_testhelpers::setup();

    assert_eq!(
        Outer::try_from_json(&json!({"nest": "Hi"})),
        Err(MapperError::type_mismatch("nest", &json!("Hi"), "object"))
    );
    assert_eq!(
        Outer::try_from_json(&json!({})),
        Err(MapperError::missing_field("nest"))
    );
}

#[test]
fn optional_nested_values() {
    mapper_testhelpers::setup();

    let json = json!({"good": {"string": "a"}, "bad": {"string": 1}});
    let map = Mapper::new(&json);
    assert_eq!(
        map.optional_from_mappable::<Test>("good"),
        Some(Test { string: "a".into() })
    );
    assert_eq!(map.optional_from_mappable::<Test>("bad"), None);
    assert_eq!(map.optional_from_mappable::<Test>("absent"), None);
    assert_eq!(
        map.optional_from_mappable::<Test>(["bad", "good"]),
        Some(Test { string: "a".into() })
    );
}

#[test]
fn mappable_arrays_are_all_or_nothing() {
    mapper_testhelpers::setup();

    let json = json!({
        "ok": [{"string": "a"}, {"string": "b"}, {"string": "c"}],
        "broken": [{"string": "a"}, {"strin": "b"}, {"string": "c"}],
    });
    let map = Mapper::new(&json);

    let tests = map.from_mappable_array::<Test>("ok").unwrap();
    assert_eq!(tests.len(), 3);
    assert_eq!(tests[2].string, "c");

    assert_eq!(
        map.from_mappable_array::<Test>("broken"),
        Err(MapperError::missing_field("string"))
    );
    assert_eq!(map.optional_from_mappable_array::<Test>("broken"), None);
}

#[test]
fn mappable_array_shape_errors() {
    mapper_testhelpers::setup();

    let json = json!({"single": {"string": "a"}, "mixed": [{"string": "a"}, "b"]});
    let map = Mapper::new(&json);
    assert_eq!(
        map.from_mappable_array::<Test>("single"),
        Err(MapperError::type_mismatch("single", &json!({"string": "a"}), "array"))
    );
    assert_eq!(
        map.from_mappable_array::<Test>("mixed"),
        Err(MapperError::type_mismatch("mixed[1]", &json!("b"), "object"))
    );
}

#[test]
fn empty_arrays_are_fine() {
    mapper_testhelpers::setup();

    let json = json!({"none": []});
    let map = Mapper::new(&json);
    assert_eq!(map.from_mappable_array::<Test>("none"), Ok(vec![]));
    assert_eq!(map.from_array::<i32>("none"), Ok(vec![]));
}

#[test]
fn convertible_arrays_are_all_or_nothing() {
    mapper_testhelpers::setup();

    let json = json!({"ok": [1, 2, 3], "broken": [1, "two", 3]});
    let map = Mapper::new(&json);
    assert_eq!(map.from_array::<u16>("ok"), Ok(vec![1, 2, 3]));
    assert_eq!(
        map.from_array::<u16>("broken"),
        Err(MapperError::conversion_failed(&json!("two"), "u16"))
    );
    assert_eq!(map.optional_from_array::<u16>("broken"), None);
    assert_eq!(
        map.from_array::<u16>("ok.deeper"),
        Err(MapperError::missing_field("ok.deeper"))
    );
}

#[test]
fn dictionaries() {
    mapper_testhelpers::setup();

    let json = json!({
        "scores": {"ada": 10, "bob": 7},
        "broken": {"ada": 10, "bob": "seven"},
        "list": [1],
    });
    let map = Mapper::new(&json);

    let scores: HashMap<String, u32> = map.from_dictionary("scores").unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores["bob"], 7);

    assert_eq!(
        map.from_dictionary::<String, u32>("broken"),
        Err(MapperError::conversion_failed(&json!("seven"), "u32"))
    );
    assert_eq!(
        map.from_dictionary::<String, u32>("list"),
        Err(MapperError::type_mismatch("list", &json!([1]), "object"))
    );
    assert_eq!(map.optional_from_dictionary::<String, u32>("list"), None);
}

#[test]
fn dictionary_keys_convert_from_text() {
    mapper_testhelpers::setup();

    let json = json!({"ports": {"127.0.0.1": 80}});
    let ports: HashMap<core::net::IpAddr, u16> =
        Mapper::new(&json).from_dictionary("ports").unwrap();
    assert_eq!(ports.values().copied().collect::<Vec<_>>(), [80]);

    let json = json!({"counts": {"one": 1}});
    assert_eq!(
        Mapper::new(&json).from_dictionary::<i32, i32>("counts"),
        Err(MapperError::conversion_failed(&json!("one"), "i32"))
    );
}

#[test]
fn integer_keyed_dictionaries() {
    mapper_testhelpers::setup();

    let json = json!({"by_id": {"1": "a", "2": "b"}, "named": {"x": 1}});
    let map = Mapper::new(&json);

    let by_id: HashMap<u32, String> = map.from_dictionary("by_id").unwrap();
    assert_eq!(by_id.len(), 2);
    assert_eq!(by_id[&1], "a");
    assert_eq!(by_id[&2], "b");

    assert_eq!(
        map.from_dictionary::<u32, i32>("named"),
        Err(MapperError::conversion_failed(&json!("x"), "u32"))
    );
    assert_eq!(map.optional_from_dictionary::<u32, i32>("named"), None);
}

struct Catalog {
    currency: &'static str,
}

#[derive(Debug, PartialEq)]
struct Price {
    label: String,
}

impl MappableWithContext for Price {
    type Context = Catalog;

    fn from_mapper_with_context(map: &Mapper<'_>, catalog: &Catalog) -> mapper::Result<Self> {
        let amount: f64 = map.from("amount")?;
        Ok(Price {
            label: format!("{amount:.2} {}", catalog.currency),
        })
    }
}

#[test]
fn contextual_construction() {
    mapper_testhelpers::setup();

    let catalog = Catalog { currency: "EUR" };
    let json = json!({"price": {"amount": 3}, "prices": [{"amount": 1.5}, {"amount": "2"}]});
    let map = Mapper::new(&json);

    assert_eq!(
        map.from_contextual::<Price>("price", &catalog),
        Ok(Price { label: "3.00 EUR".into() })
    );
    let labels: Vec<_> = map
        .from_contextual_array::<Price>("prices", &catalog)
        .unwrap()
        .into_iter()
        .map(|p| p.label)
        .collect();
    assert_eq!(labels, ["1.50 EUR", "2.00 EUR"]);

    assert_eq!(map.optional_from_contextual::<Price>("missing", &catalog), None);
    assert_eq!(
        map.from_contextual_array::<Price>("price", &catalog),
        Err(MapperError::type_mismatch("price", &json!({"amount": 3}), "array"))
    );
}

#[test]
fn contextual_root_entry_point() {
    mapper_testhelpers::setup();

    let catalog = Catalog { currency: "USD" };
    assert_eq!(
        Price::try_from_json_with_context(&json!({"amount": 10}), &catalog),
        Ok(Price { label: "10.00 USD".into() })
    );
    assert_eq!(Price::from_json_with_context(&json!({}), &catalog), None);
}
