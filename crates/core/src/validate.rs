//! Preconditions checked before any state mutation.
//!
//! Each check returns `Ok` with whatever it resolved, or the typed
//! [`JoinError`] naming what was wrong and why.

use std::path::{Path, PathBuf};

use crate::error::JoinError;
use crate::fragment::identifier_for;
use crate::request::JoinRequest;
use crate::source::SourceProvider;

/// Resolve `raw` against `base` and require an existing regular file with a
/// non-empty base name.
pub fn check_path(
    provider: &dyn SourceProvider,
    base: &Path,
    raw: &str,
) -> Result<PathBuf, JoinError> {
    if raw.trim().is_empty() {
        return Err(JoinError::invalid_path(raw, "path is empty"));
    }
    let resolved = provider.resolve(base, raw);
    if !provider.is_file(&resolved) {
        return Err(JoinError::invalid_path(
            raw,
            "path does not resolve to a readable file",
        ));
    }
    if identifier_for(&resolved).is_none() {
        return Err(JoinError::invalid_path(raw, "file has no base name"));
    }
    Ok(resolved)
}

/// Require a destination that could name a file: non-empty, no NUL byte,
/// ends in a file name, and is not an existing directory.
pub fn check_destination(destination: &Path) -> Result<(), JoinError> {
    let shown = destination.display().to_string();
    if destination.as_os_str().is_empty() {
        return Err(JoinError::invalid_destination(shown, "path is empty"));
    }
    if destination.to_string_lossy().contains('\0') {
        return Err(JoinError::invalid_destination(shown, "path contains a NUL byte"));
    }
    if destination.file_name().is_none() || ends_with_separator(destination) {
        return Err(JoinError::invalid_destination(shown, "path has no file name"));
    }
    if destination.is_dir() {
        return Err(JoinError::invalid_destination(shown, "path is a directory"));
    }
    Ok(())
}

/// At least one of {files, paths} or expressions must be non-empty.
pub fn check_inputs(request: &JoinRequest) -> Result<(), JoinError> {
    let has_file_input = !request.files.is_empty() || !request.paths.is_empty();
    let has_inline_input = !request.expressions.is_empty();
    if has_file_input || has_inline_input {
        Ok(())
    } else {
        Err(JoinError::MissingInput)
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .last()
        .is_some_and(std::path::is_separator)
}
