//! Write: persist the assembled text to the destination in one step.
//!
//! The text goes to a temporary file beside the destination (or beside the
//! file a symlinked destination points to), which is then renamed into
//! place, so a failed write never leaves a truncated artifact.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::JoinError;
use crate::request::ClobberPolicy;

/// What the write did. Both variants carry the destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// No-clobber was set and the destination already existed; nothing
    /// was written.
    SkippedExisting(PathBuf),
}

impl WriteOutcome {
    pub fn destination(&self) -> &Path {
        match self {
            WriteOutcome::Written(p) | WriteOutcome::SkippedExisting(p) => p,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written(_))
    }

    pub fn status(&self) -> &'static str {
        match self {
            WriteOutcome::Written(_) => "written",
            WriteOutcome::SkippedExisting(_) => "skipped_existing",
        }
    }
}

/// Write `text` to `destination` under `policy`.
///
/// Under [`ClobberPolicy::NoClobber`] the final rename refuses to replace
/// an existing file, so a destination created after the existence check is
/// still left alone.
pub fn write_artifact(
    text: &str,
    destination: &Path,
    policy: ClobberPolicy,
) -> Result<WriteOutcome, JoinError> {
    let skipped = || -> Result<WriteOutcome, JoinError> {
        info!(
            "destination {} exists, skipping (no-clobber)",
            destination.display()
        );
        Ok(WriteOutcome::SkippedExisting(destination.to_path_buf()))
    };

    if policy == ClobberPolicy::NoClobber && destination.symlink_metadata().is_ok() {
        return skipped();
    }

    // Overwriting follows a symlinked destination and keeps the existing
    // file's permissions; a new file gets 0o666 minus the umask.
    let target = match policy {
        ClobberPolicy::Overwrite => {
            std::fs::canonicalize(destination).unwrap_or_else(|_| destination.to_path_buf())
        }
        ClobberPolicy::NoClobber => destination.to_path_buf(),
    };
    let existing = std::fs::metadata(&target).ok().map(|m| m.permissions());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|e| JoinError::io(dir, e))?;
    tmp.write_all(text.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| JoinError::io(tmp.path(), e))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| JoinError::io(tmp.path(), e))?;
    }

    match policy {
        ClobberPolicy::Overwrite => {
            tmp.persist(&target)
                .map_err(|e| JoinError::io(destination, e.error))?;
        }
        ClobberPolicy::NoClobber => match tmp.persist_noclobber(&target) {
            Ok(_) => {}
            Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => return skipped(),
            Err(e) => return Err(JoinError::io(destination, e.error)),
        },
    }

    info!("wrote {} ({} bytes)", destination.display(), text.len());
    Ok(WriteOutcome::Written(destination.to_path_buf()))
}
