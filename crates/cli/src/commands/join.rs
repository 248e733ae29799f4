use std::path::Path;
use std::process;

use pqjoin_core::{
    join, load_manifest, render, ClobberPolicy, FileSystemProvider, JoinError, JoinRequest,
    WriteOutcome,
};

use crate::{report_error, JoinArgs, OutputFormat};

pub(crate) fn cmd_join(args: JoinArgs, output: OutputFormat, quiet: bool) {
    let print = args.print;
    let request = match build_request(args) {
        Ok(r) => r,
        Err(e) => fail(&e, output, quiet),
    };

    if print {
        match render(&FileSystemProvider, &request) {
            Ok(text) => match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "status": "printed", "text": text }));
                }
                // No trailing newline, so piping reproduces the artifact byte-for-byte.
                OutputFormat::Text => print!("{}", text),
            },
            Err(e) => fail(&e, output, quiet),
        }
        return;
    }

    let outcome = match join(&FileSystemProvider, &request) {
        Ok(o) => o,
        Err(e) => fail(&e, output, quiet),
    };

    match output {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "destination": outcome.write.destination().display().to_string(),
                "fragments": outcome.fragments,
                "status": outcome.write.status(),
            });
            println!("{}", json);
        }
        OutputFormat::Text => {
            if !quiet {
                match &outcome.write {
                    WriteOutcome::Written(dest) => println!(
                        "wrote {} ({} fragment{})",
                        dest.display(),
                        outcome.fragments,
                        if outcome.fragments == 1 { "" } else { "s" }
                    ),
                    WriteOutcome::SkippedExisting(dest) => println!(
                        "skipped {}: destination exists (--no-clobber)",
                        dest.display()
                    ),
                }
            }
        }
    }
}

/// Merge the optional manifest with command-line flags. List flags append
/// after manifest entries; scalar flags override; `--no-clobber` only adds.
fn build_request(args: JoinArgs) -> Result<JoinRequest, JoinError> {
    let mut request = match &args.manifest {
        Some(path) => {
            let dir = path.parent().unwrap_or(Path::new(""));
            load_manifest(path)?.into_request(dir)
        }
        None => JoinRequest::default(),
    };

    request.files.extend(args.files);
    request.paths.extend(args.paths);
    request.expressions.extend(args.expressions);
    if args.result.is_some() {
        request.result = args.result;
    }
    if let Some(destination) = args.destination {
        request.destination = destination;
    }
    if args.no_clobber {
        request.clobber = ClobberPolicy::NoClobber;
    }
    Ok(request)
}

fn fail(e: &JoinError, output: OutputFormat, quiet: bool) -> ! {
    report_error(&e.to_string(), e.kind(), output, quiet);
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn args() -> JoinArgs {
        JoinArgs {
            files: Vec::new(),
            paths: Vec::new(),
            expressions: Vec::new(),
            result: None,
            destination: None,
            no_clobber: false,
            manifest: None,
            print: false,
        }
    }

    #[test]
    fn flags_alone_build_request() {
        let request = build_request(JoinArgs {
            paths: vec!["A.pq".into()],
            result: Some("A".into()),
            no_clobber: true,
            ..args()
        })
        .unwrap();
        assert_eq!(request.paths, vec!["A.pq".to_string()]);
        assert_eq!(request.result_expr(), Some("A"));
        assert_eq!(request.clobber, ClobberPolicy::NoClobber);
        assert_eq!(
            request.destination,
            PathBuf::from(pqjoin_core::DEFAULT_DESTINATION)
        );
    }

    #[test]
    fn flags_append_to_and_override_manifest() {
        let tmp = tempfile::TempDir::new().unwrap();
        let manifest = tmp.path().join("join.toml");
        fs::write(
            &manifest,
            "[join]\nexpressions = [\"X = 1\"]\nresult = \"X\"\nno_clobber = true\n",
        )
        .unwrap();

        let request = build_request(JoinArgs {
            manifest: Some(manifest),
            expressions: vec!["Y = 2".into()],
            result: Some("Y".into()),
            destination: Some(PathBuf::from("cli.pq")),
            ..args()
        })
        .unwrap();
        assert_eq!(request.expressions, vec!["X = 1", "Y = 2"]);
        assert_eq!(request.result.as_deref(), Some("Y"));
        assert_eq!(request.destination, PathBuf::from("cli.pq"));
        assert_eq!(request.clobber, ClobberPolicy::NoClobber);
    }

    #[test]
    fn bad_manifest_is_an_error() {
        let err = build_request(JoinArgs {
            manifest: Some(PathBuf::from("/no/such/join.toml")),
            ..args()
        })
        .unwrap_err();
        assert_eq!(err.kind(), "invalid_manifest");
    }
}
