use std::path::PathBuf;

use clap::Parser;
use field_audit_corpus::{AuditConfig, AuditOutcome, run_audit};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "field-audit")]
#[command(about = "Check that field definitions agree across integration packages")]
struct Cli {
    /// Location of the integrations repository.
    #[arg(short = 'd', long = "dir", default_value = "./")]
    dir: PathBuf,
    /// Also report fields whose `external` value differs between files.
    #[arg(short = 'w', long = "warnings")]
    warnings: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = AuditConfig::new(cli.dir).with_external_warnings(cli.warnings);
    debug!(root = %config.root().display(), warnings = config.report_external, "Starting field audit");

    let outcome = run_audit(&config).map_err(|err| {
        format!(
            "Failed to scan '{}': {err}",
            config.scan_root().display()
        )
    })?;

    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &AuditOutcome) {
    for failure in &outcome.failures {
        eprintln!("{failure}");
    }
    for conflict in &outcome.conflicts {
        println!("{conflict}");
    }
}
