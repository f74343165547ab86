//! # Values Checksum
//!
//! Content hash of the resolved release values, used to detect configuration drift
//! independently of the chart revision.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::ReleaseError;

/// SHA-256 hex digest of the canonical JSON encoding of the values
///
/// Object keys are encoded in sorted order, so the checksum does not depend on
/// the order in which the values were written.
///
/// # Errors
///
/// Returns [`ReleaseError::ValuesEncoding`] if the values cannot be encoded.
pub fn values_checksum(values: &Map<String, Value>) -> Result<String, ReleaseError> {
    let encoded = serde_json::to_vec(&canonicalize(&Value::Object(values.clone())))?;
    Ok(format!("{:x}", Sha256::digest(&encoded)))
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), canonicalize(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_checksum_is_hex_sha256() {
        let checksum = values_checksum(&Map::new()).unwrap();
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
        // sha256("{}")
        assert_eq!(
            checksum,
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn test_checksum_ignores_key_order() {
        let a: Map<String, Value> =
            serde_json::from_str(r#"{"image": {"tag": "1.0", "repo": "x"}, "replicas": 2}"#)
                .unwrap();
        let b: Map<String, Value> =
            serde_json::from_str(r#"{"replicas": 2, "image": {"repo": "x", "tag": "1.0"}}"#)
                .unwrap();
        assert_eq!(values_checksum(&a).unwrap(), values_checksum(&b).unwrap());
    }

    #[test]
    fn test_checksum_changes_with_values() {
        let a = object(json!({ "replicas": 2 }));
        let b = object(json!({ "replicas": 3 }));
        assert_ne!(values_checksum(&a).unwrap(), values_checksum(&b).unwrap());
    }
}
