//! Source provider abstraction for filesystem-independent joining.
//!
//! The [`SourceProvider`] trait abstracts the file I/O that Resolve needs,
//! so fragment resolution can be exercised without touching disk.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Trait that abstracts fragment file I/O.
///
/// The default [`FileSystemProvider`] delegates to `std::fs`;
/// [`InMemoryProvider`] serves fragment text from a map for testing.
pub trait SourceProvider {
    /// Read the full text of a fragment file.
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error>;

    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Resolve a user-supplied path string against a base directory.
    fn resolve(&self, base: &Path, raw: &str) -> PathBuf;
}

/// Default filesystem-backed source provider.
pub struct FileSystemProvider;

impl SourceProvider for FileSystemProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
    }

    fn resolve(&self, base: &Path, raw: &str) -> PathBuf {
        // Path::join keeps absolute paths as they are.
        base.join(raw)
    }
}

/// In-memory source provider for testing.
///
/// Maps paths to fragment text. Paths are normalized (`.` and `..`
/// removed) on insertion and lookup so resolution behaves like the
/// filesystem provider without requiring real files.
#[derive(Default)]
pub struct InMemoryProvider {
    files: HashMap<PathBuf, String>,
}

impl InMemoryProvider {
    /// Create a new in-memory provider from a map of paths to fragment text.
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        let files = files
            .into_iter()
            .map(|(path, text)| (Self::normalize_path(&path), text))
            .collect();
        Self { files }
    }

    /// Builder-style insertion, handy in tests.
    pub fn with_file(mut self, path: impl AsRef<Path>, text: impl Into<String>) -> Self {
        self.files
            .insert(Self::normalize_path(path.as_ref()), text.into());
        self
    }

    fn normalize_path(path: &Path) -> PathBuf {
        let mut components = Vec::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !components.is_empty() {
                        components.pop();
                    }
                }
                other => components.push(other),
            }
        }
        components.iter().collect()
    }
}

impl SourceProvider for InMemoryProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        let normalized = Self::normalize_path(path);
        self.files.get(&normalized).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found in memory: {}", normalized.display()),
            )
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(&Self::normalize_path(path))
    }

    fn resolve(&self, base: &Path, raw: &str) -> PathBuf {
        Self::normalize_path(&base.join(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_path_resolves_dot_and_dotdot() {
        let p = Path::new("/a/b/../c/./d.pq");
        assert_eq!(
            InMemoryProvider::normalize_path(p),
            PathBuf::from("/a/c/d.pq")
        );
    }

    #[test]
    fn in_memory_read_source_found() {
        let provider = InMemoryProvider::default().with_file("/q/A.pq", "1");
        let content = provider.read_source(Path::new("/q/A.pq")).unwrap();
        assert_eq!(content, "1");
    }

    #[test]
    fn in_memory_new_normalizes_keys() {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("/q/./sub/../A.pq"), "1".to_string());
        let provider = InMemoryProvider::new(files);
        assert!(provider.is_file(Path::new("/q/A.pq")));
        assert_eq!(provider.read_source(Path::new("/q/A.pq")).unwrap(), "1");
    }

    #[test]
    fn in_memory_read_source_not_found() {
        let provider = InMemoryProvider::default();
        let err = provider.read_source(Path::new("/missing.pq")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn in_memory_resolve_relative_and_absolute() {
        let provider = InMemoryProvider::default();
        assert_eq!(
            provider.resolve(Path::new("/work"), "../q/A.pq"),
            PathBuf::from("/q/A.pq")
        );
        assert_eq!(
            provider.resolve(Path::new("/work"), "/abs/B.pq"),
            PathBuf::from("/abs/B.pq")
        );
    }

    #[test]
    fn in_memory_is_file_only_for_known_entries() {
        let provider = InMemoryProvider::default().with_file("/q/A.pq", "1");
        assert!(provider.is_file(Path::new("/q/./A.pq")));
        assert!(!provider.is_file(Path::new("/q")));
    }

    #[test]
    fn filesystem_is_file_rejects_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("A.pq");
        std::fs::write(&file, "1").unwrap();
        assert!(FileSystemProvider.is_file(&file));
        assert!(!FileSystemProvider.is_file(dir.path()));
        assert!(!FileSystemProvider.is_file(&dir.path().join("nope.pq")));
    }
}
