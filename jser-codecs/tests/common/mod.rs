#![allow(dead_code)]

use jser_core::{Error, Serializer, TypeContract};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sample {
    pub prop_a: i32,
    pub prop_b: bool,
    pub prop_c: String,
}

impl Sample {
    pub fn expected() -> Self {
        Sample {
            prop_a: 5,
            prop_b: true,
            prop_c: "PropC".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NestedExample {
    pub int_property: i32,
    pub bool_property: bool,
    pub string_property: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParentExample {
    pub date_property: String,
    pub class_property: NestedExample,
}

impl ParentExample {
    pub fn expected() -> Self {
        ParentExample {
            date_property: "2020-01-02T03:04:05Z".to_string(),
            class_property: NestedExample {
                int_property: 42,
                bool_property: false,
                string_property: "nested".to_string(),
            },
        }
    }
}

fn assert_null(result: Result<impl std::fmt::Debug, Error>, param: &str) {
    match result {
        Err(Error::ArgumentNull(name)) => assert_eq!(name, param),
        other => panic!("expected ArgumentNull({param}), got {other:?}"),
    }
}

/// Leaves out each required argument of every operation in turn.
pub fn assert_argument_checks<S: Serializer>(serializer: &S) {
    let item = Sample::expected();
    let ty = TypeContract::<Sample>::of();

    let mut sink = Vec::new();
    assert_null(serializer.serialize_to_stream(None, Some(&item), Some(&ty)), "stream");
    assert_null(serializer.serialize_to_stream(Some(&mut sink), None, Some(&ty)), "item");
    assert_null(serializer.serialize_to_stream(Some(&mut sink), Some(&item), None), "type");
    assert_null(serializer.serialize_to_stream::<Sample>(None, None, None), "stream");
    assert!(sink.is_empty());

    let mut source = Cursor::new(Vec::new());
    assert_null(serializer.deserialize_from_stream(None, Some(&ty)), "stream");
    assert_null(serializer.deserialize_from_stream::<Sample>(Some(&mut source), None), "type");

    assert_null(serializer.serialize_to_string(None, Some(&ty)), "item");
    assert_null(serializer.serialize_to_string(Some(&item), None), "type");

    assert_null(serializer.deserialize_from_string(None, Some(&ty)), "data");
    assert_null(serializer.deserialize_from_string::<Sample>(Some(""), None), "type");
    assert_null(serializer.deserialize_from_string::<Sample>(None, None), "data");
}
