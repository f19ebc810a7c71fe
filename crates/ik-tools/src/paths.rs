//! Translation between the opaque `ik://` URI scheme and absolute
//! filesystem paths, applied recursively over every string value in a JSON
//! document (tool arguments going in, tool results coming back).

use std::path::{Path, PathBuf};
use thiserror::Error;

const SCHEME: &str = "ik://";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathsError {
    #[error("path escapes the workspace root: {0}")]
    Escapes(String),
}

pub struct Paths {
    root: PathBuf,
}

impl Paths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn ik_uri_to_path(&self, uri: &str) -> Result<String, PathsError> {
        let Some(rel) = uri.strip_prefix(SCHEME) else {
            return Ok(uri.to_string());
        };
        if rel.contains("..") {
            return Err(PathsError::Escapes(uri.to_string()));
        }
        Ok(self.root.join(rel).display().to_string())
    }

    fn path_to_ik_uri(&self, path: &str) -> String {
        match Path::new(path).strip_prefix(&self.root) {
            Ok(rel) => format!("{SCHEME}{}", rel.display()),
            Err(_) => path.to_string(),
        }
    }

    /// Recursively translate every `ik://` string value in `value` to an
    /// absolute path.
    pub fn translate_ik_uri_to_path(&self, value: &serde_json::Value) -> Result<serde_json::Value, PathsError> {
        self.map_strings(value, |s| self.ik_uri_to_path(s))
    }

    /// Recursively translate every string value that sits under this root
    /// back into an `ik://` URI.
    pub fn translate_path_to_ik_uri(&self, value: &serde_json::Value) -> serde_json::Value {
        self.map_strings(value, |s| Ok(self.path_to_ik_uri(s)))
            .expect("path_to_ik_uri is infallible")
    }

    fn map_strings(
        &self,
        value: &serde_json::Value,
        f: impl Fn(&str) -> Result<String, PathsError> + Copy,
    ) -> Result<serde_json::Value, PathsError> {
        use serde_json::Value;
        Ok(match value {
            Value::String(s) => Value::String(f(s)?),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(self.map_strings(item, f)?);
                }
                Value::Array(out)
            }
            Value::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k.clone(), self.map_strings(v, f)?);
                }
                Value::Object(out)
            }
            other => other.clone(),
        })
    }
}
