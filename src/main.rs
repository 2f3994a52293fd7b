use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fsnorm::{FsNormError, SilentReporter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "fsnorm")]
#[command(version = VERSION)]
#[command(about = "Rename files and directories to normalized, filesystem-safe Unicode names")]
struct Cli {
    /// A directory to scan
    #[arg(value_name = "directory", required = true)]
    directories: Vec<PathBuf>,

    /// Run quietly
    #[arg(short, long)]
    quiet: bool,

    /// Actually do rename the files (default is a dry run)
    #[arg(long)]
    notest: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder = fsnorm::run().roots(cli.directories).apply(cli.notest);
    if cli.quiet {
        builder = builder.reporter(SilentReporter);
    }

    match builder.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(err: &FsNormError) {
    match err.path() {
        Some(path) => eprintln!("fsnorm: {}: {}", err, path.display()),
        None => eprintln!("fsnorm: {}", err),
    }
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("fsnorm: caused by: {}", cause);
        source = cause.source();
    }
}
