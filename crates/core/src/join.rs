//! Join pipeline: validate -> resolve -> assemble -> write.
//!
//! A thin orchestrator over the stage modules. All checks run before the
//! destination is touched.

use log::debug;

use crate::assemble::assemble;
use crate::error::JoinError;
use crate::request::JoinRequest;
use crate::resolve::resolve;
use crate::source::SourceProvider;
use crate::validate::{check_destination, check_inputs};
use crate::write::{write_artifact, WriteOutcome};

/// Result of a completed join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub write: WriteOutcome,
    /// File fragments plus inline expressions.
    pub fragments: usize,
}

/// Validate and assemble `request` without writing anything.
pub fn render(provider: &dyn SourceProvider, request: &JoinRequest) -> Result<String, JoinError> {
    Ok(prepare(provider, request)?.0)
}

/// Run the full join and write the artifact.
pub fn join(
    provider: &dyn SourceProvider,
    request: &JoinRequest,
) -> Result<JoinOutcome, JoinError> {
    let (text, fragments) = prepare(provider, request)?;
    let write = write_artifact(&text, &request.destination, request.clobber)?;
    Ok(JoinOutcome { write, fragments })
}

fn prepare(
    provider: &dyn SourceProvider,
    request: &JoinRequest,
) -> Result<(String, usize), JoinError> {
    check_inputs(request)?;
    check_destination(&request.destination)?;

    let file_fragments = resolve(provider, &request.base_dir, &request.files, &request.paths)?;
    let count = file_fragments.len() + request.expressions.len();
    debug!(
        "assembling {} file fragment(s) and {} inline expression(s)",
        file_fragments.len(),
        request.expressions.len()
    );

    let text = assemble(&file_fragments, &request.expressions, request.result_expr());
    Ok((text, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ClobberPolicy;
    use crate::source::InMemoryProvider;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn provider() -> InMemoryProvider {
        InMemoryProvider::default()
            .with_file("/q/A.pq", "1")
            .with_file("/q/B.pq", "2")
    }

    #[test]
    fn render_orders_files_paths_then_expressions() {
        let request = JoinRequest {
            files: vec![PathBuf::from("/q/B.pq")],
            paths: vec!["A.pq".into()],
            expressions: vec!["C = 3".into()],
            result: Some("A".into()),
            base_dir: PathBuf::from("/q"),
            ..JoinRequest::default()
        };
        assert_eq!(
            render(&provider(), &request).unwrap(),
            "let #\"B\" = 2,\n#\"A\" = 1,\nC = 3 in A"
        );
    }

    #[test]
    fn missing_input_is_reported_first() {
        let request = JoinRequest {
            destination: PathBuf::new(),
            ..JoinRequest::default()
        };
        assert!(matches!(
            render(&provider(), &request),
            Err(JoinError::MissingInput)
        ));
    }

    #[test]
    fn invalid_path_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.pq");
        let request = JoinRequest {
            paths: vec!["missing.pq".into()],
            destination: dest.clone(),
            base_dir: PathBuf::from("/q"),
            ..JoinRequest::default()
        };
        assert!(matches!(
            join(&provider(), &request),
            Err(JoinError::InvalidPath { .. })
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn join_reports_fragment_count_and_outcome() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.pq");
        let request = JoinRequest {
            files: vec![PathBuf::from("/q/A.pq")],
            expressions: vec!["D = 4".into(), "E = 5".into()],
            destination: dest.clone(),
            clobber: ClobberPolicy::NoClobber,
            ..JoinRequest::default()
        };
        let outcome = join(&provider(), &request).unwrap();
        assert_eq!(outcome.fragments, 3);
        assert_eq!(outcome.write, WriteOutcome::Written(dest.clone()));

        let again = join(&provider(), &request).unwrap();
        assert_eq!(again.write, WriteOutcome::SkippedExisting(dest));
    }
}
