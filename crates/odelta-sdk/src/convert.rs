//! Typed values to and from value trees, through serde.
//!
//! Every serialized field lands in the tree, nulls included: an `Option`
//! field that is `None` becomes an explicit null unless the type opts out
//! with `skip_serializing_if`. Converting back ignores fields the target type
//! does not declare, unless the type opts in to `deny_unknown_fields`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use odelta_value::{Object, Value};

use crate::error::{SdkError, SdkResult};

/// Convert a typed value into an object tree.
pub fn to_tree<T: Serialize + ?Sized>(value: &T) -> SdkResult<Object> {
    let json = serde_json::to_value(value).map_err(|e| SdkError::Conversion(e.to_string()))?;
    Value::from(json)
        .into_object()
        .map_err(|other| SdkError::NotAnObject { kind: other.kind() })
}

/// Convert a value tree back into a typed value.
pub fn from_tree<T: DeserializeOwned>(value: Value) -> SdkResult<T> {
    serde_json::from_value(value.into()).map_err(|e| SdkError::Conversion(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
        nickname: Option<String>,
        age: u32,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct NameOnly {
        name: String,
    }

    #[test]
    fn none_fields_are_kept_as_null() {
        let tree = to_tree(&Person {
            name: "Ada".into(),
            nickname: None,
            age: 36,
        })
        .unwrap();
        assert!(tree["nickname"].is_null());
        let keys: Vec<&str> = tree.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "nickname", "age"]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let tree = to_tree(&Person {
            name: "Ada".into(),
            nickname: Some("countess".into()),
            age: 36,
        })
        .unwrap();
        let back: NameOnly = from_tree(Value::Object(tree)).unwrap();
        assert_eq!(back, NameOnly { name: "Ada".into() });
    }

    #[test]
    fn non_object_is_rejected() {
        let err = to_tree(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, SdkError::NotAnObject { kind: "array" }));
        let err = to_tree("text").unwrap_err();
        assert!(matches!(err, SdkError::NotAnObject { kind: "string" }));
    }

    #[test]
    fn type_mismatch_is_conversion_error() {
        let tree = Value::from_json_str(r#"{"name": "Ada", "nickname": null, "age": "old"}"#).unwrap();
        let err = from_tree::<Person>(tree).unwrap_err();
        assert!(matches!(err, SdkError::Conversion(_)));
    }
}
