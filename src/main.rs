use anyhow::Context;
use daily_rain::cli::Args;
use daily_rain::{RainError, Reporter, locate_required};
use std::io::{self, BufWriter};
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse_with_epilog();
    setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Nothing to report is not an internal failure; print it plainly
            if let Some(no_match @ RainError::NoMatchingFiles { .. }) =
                error.downcast_ref::<RainError>()
            {
                eprintln!("{}", no_match);
            } else {
                eprintln!("Error: {:#}", error);
            }
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args
        .to_config()
        .context("Failed to resolve source directory")?;
    debug!("Report configuration: {:?}", config);

    let files = locate_required(&config.directory, &config.pattern)?;

    let stdout = io::stdout();
    let reporter = Reporter::new(&config, BufWriter::new(stdout.lock()));
    reporter
        .report(&files)
        .context("Failed to generate daily rainfall report")?;
    Ok(())
}

/// Set up structured logging on stderr; stdout carries only the report
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("daily_rain={}", log_level)));

    // --verbose echoes file paths at info even when RUST_LOG is stricter
    if args.verbose {
        match "daily_rain=info".parse::<tracing_subscriber::filter::Directive>() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(error) => eprintln!("Invalid verbose log directive: {}", error),
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .without_time()
                .with_writer(io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
