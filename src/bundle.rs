//! Result bundle loading.
//!
//! A bundle is a JSON object produced by an external motion-generation run,
//! mapping result names to values. It is read exactly once per conversion
//! and never mutated.

use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConvertError;

#[derive(Debug)]
pub struct Bundle {
    entries: Map<String, Value>,
}

impl Bundle {
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let text = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ConvertError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::Deserialization {
                path: path.to_path_buf(),
                detail: err.to_string(),
            },
        })?;
        let entries: Map<String, Value> =
            serde_json::from_str(&text).map_err(|err| ConvertError::Deserialization {
                path: path.to_path_buf(),
                detail: err.to_string(),
            })?;
        Ok(Self { entries })
    }

    /// Key set in sorted order (serde_json's map is BTree-backed).
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Remove and return the value under `key`.
    pub fn take(mut self, key: &str) -> Result<Value, ConvertError> {
        self.entries
            .remove(key)
            .ok_or_else(|| ConvertError::MissingKey {
                key: key.to_string(),
                available: self.entries.keys().cloned().collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn loads_and_lists_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, json!({"motion": [1.0], "text": "run"}).to_string()).unwrap();
        let bundle = Bundle::load(&path).unwrap();
        assert_eq!(bundle.keys(), vec!["motion".to_string(), "text".to_string()]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Bundle::load(Path::new("/no/such/bundle.json")).unwrap_err();
        assert!(matches!(err, ConvertError::NotFound { .. }));
    }

    #[test]
    fn non_object_bundle_is_deserialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = Bundle::load(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Deserialization { .. }));
    }

    #[test]
    fn take_reports_available_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, json!({"text": "run"}).to_string()).unwrap();
        let bundle = Bundle::load(&path).unwrap();
        match bundle.take("motion").unwrap_err() {
            ConvertError::MissingKey { key, available } => {
                assert_eq!(key, "motion");
                assert_eq!(available, vec!["text".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
