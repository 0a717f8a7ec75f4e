//! Response envelopes of the remote catalog API.
//!
//! Payloads arrive either as a bare array or wrapped under `data` or a
//! domain-named key (`plants`, `categories`). Unwrapping never fails; an
//! unrecognized body yields no records.

use serde_json::Value;

pub const DATA_KEY: &str = "data";
pub const PLANTS_KEY: &str = "plants";
pub const CATEGORIES_KEY: &str = "categories";

/// Raw record of unknown shape as returned by the API.
pub type RawRecord = Value;

pub fn unwrap_records(body: Value, domain_key: &str) -> Vec<RawRecord> {
    match unwrap_payload(body, domain_key) {
        Some(Value::Array(items)) => items,
        Some(record @ Value::Object(_)) => vec![record],
        _ => Vec::new(),
    }
}

pub fn unwrap_record(body: Value, domain_key: &str) -> Option<RawRecord> {
    match unwrap_payload(body, domain_key)? {
        Value::Array(items) => items.into_iter().next(),
        record @ Value::Object(_) => Some(record),
        _ => None,
    }
}

fn unwrap_payload(body: Value, domain_key: &str) -> Option<Value> {
    match body {
        Value::Array(_) => Some(body),
        Value::Object(mut map) => {
            if let Some(inner) = map.remove(domain_key).filter(|v| !v.is_null()) {
                return Some(inner);
            }
            match map.remove(DATA_KEY).filter(|v| !v.is_null()) {
                // `data` may hold the records directly or wrap the domain key again.
                Some(Value::Object(inner)) if inner.contains_key(domain_key) => {
                    unwrap_payload(Value::Object(inner), domain_key)
                }
                Some(inner) => Some(inner),
                None => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unwraps_domain_key_array() {
        let body = json!({ "status": true, "plants": [{ "id": 1 }, { "id": 2 }] });
        assert_eq!(unwrap_records(body, PLANTS_KEY).len(), 2);
    }

    #[test]
    fn unwraps_data_key_and_nested_domain_key() {
        let flat = json!({ "data": [{ "id": 1 }] });
        assert_eq!(unwrap_records(flat, CATEGORIES_KEY).len(), 1);

        let nested = json!({ "data": { "categories": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] } });
        assert_eq!(unwrap_records(nested, CATEGORIES_KEY).len(), 3);
    }

    #[test]
    fn accepts_bare_array_and_single_object() {
        assert_eq!(unwrap_records(json!([{ "id": 1 }]), PLANTS_KEY).len(), 1);

        let detail = json!({ "plants": { "id": 9, "name": "Neem" } });
        let record = unwrap_record(detail, PLANTS_KEY).expect("record");
        assert_eq!(record["name"], "Neem");
    }

    #[test]
    fn unknown_shapes_yield_nothing() {
        assert!(unwrap_records(json!({ "status": false }), PLANTS_KEY).is_empty());
        assert!(unwrap_records(json!("oops"), PLANTS_KEY).is_empty());
        assert!(unwrap_record(json!({ "plants": null }), PLANTS_KEY).is_none());
    }
}
