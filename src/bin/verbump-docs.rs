use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use verbump::rewrite::{self, RunOptions};
use verbump::version::discover_doc_version;
use verbump::{validation, Error, DOC_MATCHERS};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "verbump-docs")]
#[command(version = VERSION)]
#[command(about = "Sync version strings in the project documentation")]
struct Cli {
    /// New version number
    version: String,

    /// Preview changes without making them
    #[arg(short, long)]
    preview: bool,

    /// Number of lines of context to show in diff
    #[arg(short = 'n', long, default_value_t = 3)]
    num_lines: usize,

    /// Disable color-coded diff output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: &Cli) -> verbump::Result<()> {
    let new_version =
        validation::require_non_empty(&cli.version, "version", "Version must not be blank")?;

    // Paths in the matcher table are relative to the repository root.
    let root = Path::new(".");

    // The docs tool has no state record: the current version is whatever
    // the README's install line announces.
    let old_version = discover_doc_version(root)?;

    rewrite::run(
        root,
        DOC_MATCHERS,
        &old_version,
        new_version,
        RunOptions {
            preview: cli.preview,
            context_lines: cli.num_lines,
            color: !cli.no_color,
        },
    )?;

    Ok(())
}

fn report(err: &Error) -> ExitCode {
    eprintln!("error[{}]: {}", err.code.as_str(), err);
    for hint in &err.hints {
        eprintln!("  hint: {}", hint.message);
    }
    ExitCode::from(err.exit_code())
}
