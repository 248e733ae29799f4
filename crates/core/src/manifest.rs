//! Join manifest format (`[join]` table in a TOML file).
//!
//! Relative `files`, `paths` and `destination` entries are anchored at the
//! manifest's own directory, independent of the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::JoinError;
use crate::request::{ClobberPolicy, JoinRequest};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JoinManifestFile {
    join: JoinManifest,
}

/// The `[join]` table. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JoinManifest {
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub expressions: Vec<String>,
    pub result: Option<String>,
    pub destination: Option<PathBuf>,
    #[serde(default)]
    pub no_clobber: bool,
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<JoinManifest, JoinError> {
    let text = std::fs::read_to_string(path).map_err(|e| JoinError::InvalidManifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_manifest(&text, path)
}

/// Parse manifest text. `path` is used for error messages only.
pub fn parse_manifest(text: &str, path: &Path) -> Result<JoinManifest, JoinError> {
    toml::from_str::<JoinManifestFile>(text)
        .map(|file| file.join)
        .map_err(|e| JoinError::InvalidManifest {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
}

impl JoinManifest {
    /// Build a request with relative entries anchored at `manifest_dir`.
    pub fn into_request(self, manifest_dir: &Path) -> JoinRequest {
        let mut request = JoinRequest {
            files: self
                .files
                .into_iter()
                .map(|f| manifest_dir.join(f))
                .collect(),
            paths: self
                .paths
                .into_iter()
                .map(|p| manifest_dir.join(p).to_string_lossy().into_owned())
                .collect(),
            expressions: self.expressions,
            result: self.result,
            clobber: if self.no_clobber {
                ClobberPolicy::NoClobber
            } else {
                ClobberPolicy::Overwrite
            },
            ..JoinRequest::default()
        };
        if let Some(destination) = self.destination {
            request.destination = manifest_dir.join(destination);
        }
        request
    }
}
