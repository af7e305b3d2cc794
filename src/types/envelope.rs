// src/types/envelope.rs
//! Response envelope normalization. Endpoints disagree on shape: some wrap
//! lists as `{"data": [...]}`, others return the bare array. Anything else
//! reads as an empty list so screens stay usable.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pull a typed list out of either envelope shape.
pub fn normalize_list<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, serde_json::Error> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items.into_iter().map(serde_json::from_value).collect()
}

/// Pull a single typed record, unwrapping a `data` envelope when present.
pub fn normalize_item<T: DeserializeOwned>(payload: Value) -> Result<T, serde_json::Error> {
    let inner = match payload {
        Value::Object(mut map) if map.contains_key("data") => match map.remove("data") {
            Some(value) => value,
            None => Value::Object(map),
        },
        other => other,
    };
    serde_json::from_value(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::entities::Candidate;
    use serde_json::json;

    #[test]
    fn test_enveloped_list() {
        let list: Vec<Candidate> =
            normalize_list(json!({"data": [{"id": 1}, {"id": 2}]})).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 1);
    }

    #[test]
    fn test_bare_array_list() {
        let list: Vec<Candidate> = normalize_list(json!([{"id": 7}])).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 7);
    }

    #[test]
    fn test_everything_else_is_empty() {
        let list: Vec<Candidate> = normalize_list(json!({"message": "ok"})).unwrap();
        assert!(list.is_empty());

        let list: Vec<Candidate> = normalize_list(json!({"data": null})).unwrap();
        assert!(list.is_empty());

        let list: Vec<Candidate> = normalize_list(Value::Null).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_malformed_element_is_an_error() {
        let result: Result<Vec<Candidate>, _> = normalize_list(json!([{"email": "no-id"}]));
        assert!(result.is_err());
    }

    #[test]
    fn test_item_with_and_without_envelope() {
        let item: Candidate = normalize_item(json!({"data": {"id": 9}})).unwrap();
        assert_eq!(item.id, 9);

        let item: Candidate = normalize_item(json!({"id": 10})).unwrap();
        assert_eq!(item.id, 10);
    }
}
