//! The `package.json` record and its canonical JSON encoding.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{BumpError, Result};

/// Recognized fields of a package manifest.
///
/// Field order here is the order written back to disk. Unrecognized fields
/// are dropped on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Raw version string, not validated on decode
    pub version: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub private: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub license: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub scripts: BTreeMap<String, String>,
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Manifest {
    /// Create a manifest holding only a name and version
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Manifest {
            name: name.into(),
            version: version.into(),
            description: String::new(),
            private: false,
            license: String::new(),
            scripts: BTreeMap::new(),
        }
    }

    /// Decode a manifest from raw file content.
    ///
    /// `path` is only used to label the error.
    pub fn from_slice(path: &Path, bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| BumpError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Encode with 2-space indentation, optionally ending in a newline
    pub fn to_json(&self, trailing_newline: bool) -> Result<String> {
        let mut output = serde_json::to_string_pretty(self).map_err(BumpError::Encode)?;
        if trailing_newline {
            output.push('\n');
        }
        Ok(output)
    }

    /// Copy of this manifest with the version field replaced
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Manifest {
            version: version.into(),
            ..self.clone()
        }
    }
}
