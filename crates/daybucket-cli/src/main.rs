use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod bucket_cmd;
mod cli;
mod error;
mod events_cmd;
mod ics_cmd;
mod shared;
mod window_cmd;

use bucket_cmd::run_bucket;
use cli::{Cli, Commands};
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use events_cmd::run_events;
use ics_cmd::run_ics;
use window_cmd::run_window;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Bucket(args) => {
            let format = args.output_format.clone();
            dispatch("bucket", &format, |output_format| run_bucket(args, output_format))
        }
        Commands::Window(args) => {
            let format = args.output_format.clone();
            dispatch("window", &format, |output_format| run_window(args, output_format))
        }
        Commands::Events(args) => {
            let format = args.output_format.clone();
            dispatch("events", &format, |output_format| run_events(args, output_format))
        }
        // ics writes a calendar, not JSON, so its errors are always text.
        Commands::Ics(args) => match run_ics(args) {
            Ok(code) => code,
            Err(err) => render_error("ics", &err, OutputFormat::Text),
        },
    }
}

/// Resolve the requested output format, then run `command`. An unknown
/// format is itself reported in the closest format the user asked for.
fn dispatch<F>(command: &str, output_format: &str, run: F) -> ExitCode
where
    F: FnOnce(OutputFormat) -> CliResult<ExitCode>,
{
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(command, &err, output_format_hint(output_format)),
    };

    match run(output_format) {
        Ok(code) => code,
        Err(err) => render_error(command, &err, output_format),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
