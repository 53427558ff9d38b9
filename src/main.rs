use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use verbump::rewrite::{self, RunOptions};
use verbump::version::read_state_version;
use verbump::{validation, Error, RELEASE_MATCHERS};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "verbump")]
#[command(version = VERSION)]
#[command(about = "Rewrite version strings across the project's release files")]
struct Cli {
    /// Version number to change to
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
    let old_version = read_state_version(root)?;

    rewrite::run(
        root,
        RELEASE_MATCHERS,
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
