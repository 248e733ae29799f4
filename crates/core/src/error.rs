use std::path::PathBuf;

/// All errors a join can fail with. Every variant aborts the join before
/// the destination is touched, except `Io` raised by the write itself.
#[derive(Debug, thiserror::Error)]
pub enum JoinError {
    /// A path string (or file entry) does not resolve to a readable regular file.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// The destination is not a usable file path.
    #[error("invalid destination '{path}': {reason}")]
    InvalidDestination { path: String, reason: String },

    /// Neither file-based nor inline fragments were supplied.
    #[error("no input: supply at least one file, path or expression")]
    MissingInput,

    /// A join manifest could not be read or parsed.
    #[error("invalid manifest '{}': {message}", path.display())]
    InvalidManifest { path: PathBuf, message: String },

    /// Reading a fragment or writing the artifact failed.
    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JoinError {
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        JoinError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_destination(path: impl Into<String>, reason: impl Into<String>) -> Self {
        JoinError::InvalidDestination {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JoinError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable kind, used by the CLI's JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            JoinError::InvalidPath { .. } => "invalid_path",
            JoinError::InvalidDestination { .. } => "invalid_destination",
            JoinError::MissingInput => "missing_input",
            JoinError::InvalidManifest { .. } => "invalid_manifest",
            JoinError::Io { .. } => "io",
        }
    }
}
