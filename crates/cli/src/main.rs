mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use commands::join::cmd_join;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Join expression fragments into a single let-block or record.
#[derive(Parser)]
#[command(
    name = "pqjoin",
    version,
    about = "Join expression fragments into a single let-block or record"
)]
struct Cli {
    #[command(flatten)]
    join: JoinArgs,

    /// Output format (text or json)
    #[arg(long, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Log resolution and write details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Inputs of one join. At least one fragment source is required.
#[derive(Args, Debug)]
pub(crate) struct JoinArgs {
    /// Fragment file; its base name becomes the binding name (repeatable)
    #[arg(long = "file", short = 'f', value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Fragment path, checked to exist before use; emitted after --file entries (repeatable)
    #[arg(long = "path", short = 'p', value_name = "PATH")]
    pub paths: Vec<String>,

    /// Inline expression such as `Name = 1 + 2`, emitted verbatim after all files (repeatable)
    #[arg(long = "expression", short = 'e', value_name = "EXPR")]
    pub expressions: Vec<String>,

    /// Final result expression; wraps the output as `let ... in <EXPR>` instead of a record
    #[arg(long, short = 'r', value_name = "EXPR")]
    pub result: Option<String>,

    /// Output file [default: joined.pq]
    #[arg(long, short = 'd', value_name = "PATH")]
    pub destination: Option<PathBuf>,

    /// Leave an existing destination untouched
    #[arg(long)]
    pub no_clobber: bool,

    /// TOML manifest with a [join] table; flags are merged on top
    #[arg(long, value_name = "TOML")]
    pub manifest: Option<PathBuf>,

    /// Print the joined expression to stdout instead of writing the destination
    #[arg(long)]
    pub print: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    cmd_join(cli.join, cli.output, cli.quiet);
}

/// Route `log` output to stderr. `RUST_LOG` wins over the flag-derived level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

pub(crate) fn report_error(msg: &str, kind: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error: {}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg, "kind": kind }));
        }
    }
}
