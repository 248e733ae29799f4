use std::path::PathBuf;

use crate::DEFAULT_DESTINATION;

/// What to do when the destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClobberPolicy {
    #[default]
    Overwrite,
    /// Leave an existing destination untouched and report the skip.
    NoClobber,
}

/// The aggregate input of one join, built per invocation and used once.
#[derive(Debug, Clone)]
pub struct JoinRequest {
    /// Already-resolved fragment files. Emitted before `paths`.
    pub files: Vec<PathBuf>,
    /// Path strings, resolved against `base_dir` and checked for existence.
    pub paths: Vec<String>,
    /// Inline expressions, emitted verbatim after all file fragments.
    pub expressions: Vec<String>,
    /// Final result expression. Present and non-empty selects the
    /// `let ... in <result>` wrapping; otherwise the record wrapping.
    pub result: Option<String>,
    pub destination: PathBuf,
    pub clobber: ClobberPolicy,
    /// Directory that relative `paths` entries resolve against.
    pub base_dir: PathBuf,
}

impl Default for JoinRequest {
    fn default() -> Self {
        JoinRequest {
            files: Vec::new(),
            paths: Vec::new(),
            expressions: Vec::new(),
            result: None,
            destination: PathBuf::from(DEFAULT_DESTINATION),
            clobber: ClobberPolicy::Overwrite,
            base_dir: PathBuf::from("."),
        }
    }
}

impl JoinRequest {
    /// The result expression, treating an empty string as absent.
    pub fn result_expr(&self) -> Option<&str> {
        self.result.as_deref().filter(|r| !r.is_empty())
    }
}
