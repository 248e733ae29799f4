//! Resolve: turn file entries and path strings into file fragments.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::JoinError;
use crate::fragment::{identifier_for, strip_bom, Fragment};
use crate::source::SourceProvider;
use crate::validate::check_path;

/// Resolve `files` then `paths` into ordered file fragments.
///
/// Every path string is checked before any file is read, so a bad path
/// aborts the whole resolution. Identifiers are not deduplicated.
pub fn resolve(
    provider: &dyn SourceProvider,
    base: &Path,
    files: &[PathBuf],
    paths: &[String],
) -> Result<Vec<Fragment>, JoinError> {
    let resolved_paths = paths
        .iter()
        .map(|raw| check_path(provider, base, raw))
        .collect::<Result<Vec<_>, _>>()?;

    files
        .iter()
        .chain(resolved_paths.iter())
        .map(|path| read_fragment(provider, path))
        .collect()
}

fn read_fragment(provider: &dyn SourceProvider, path: &Path) -> Result<Fragment, JoinError> {
    let shown = path.display().to_string();
    let identifier = identifier_for(path)
        .ok_or_else(|| JoinError::invalid_path(&shown, "file has no base name"))?;
    let body = provider
        .read_source(path)
        .map_err(|e| JoinError::invalid_path(&shown, e.to_string()))?;
    debug!("resolved fragment '{}' from {} ({} bytes)", identifier, shown, body.len());
    Ok(Fragment::from_file(identifier, strip_bom(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryProvider;

    fn provider() -> InMemoryProvider {
        InMemoryProvider::default()
            .with_file("/work/A.pq", "1")
            .with_file("/work/B.pq", "2")
            .with_file("/elsewhere/C.pq", "\u{feff}3")
    }

    #[test]
    fn files_precede_paths() {
        let fragments = resolve(
            &provider(),
            Path::new("/work"),
            &[PathBuf::from("/elsewhere/C.pq")],
            &["B.pq".to_string(), "A.pq".to_string()],
        )
        .unwrap();
        let ids: Vec<_> = fragments.iter().filter_map(|f| f.identifier()).collect();
        assert_eq!(ids, ["C", "B", "A"]);
        assert_eq!(fragments[0].body(), "3");
    }

    #[test]
    fn missing_path_aborts() {
        let err = resolve(
            &provider(),
            Path::new("/work"),
            &[],
            &["A.pq".to_string(), "Z.pq".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, JoinError::InvalidPath { ref path, .. } if path == "Z.pq"));
    }

    #[test]
    fn unreadable_file_entry_is_invalid_path() {
        let err = resolve(
            &provider(),
            Path::new("/work"),
            &[PathBuf::from("/work/ghost.pq")],
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, JoinError::InvalidPath { .. }));
    }

    #[test]
    fn resolving_twice_is_deterministic() {
        let p = provider();
        let paths = ["A.pq".to_string()];
        let first = resolve(&p, Path::new("/work"), &[], &paths).unwrap();
        let second = resolve(&p, Path::new("/work"), &[], &paths).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_identifiers_are_kept() {
        let fragments = resolve(
            &provider(),
            Path::new("/work"),
            &[],
            &["A.pq".to_string(), "./A.pq".to_string()],
        )
        .unwrap();
        assert_eq!(fragments.len(), 2);
    }
}
