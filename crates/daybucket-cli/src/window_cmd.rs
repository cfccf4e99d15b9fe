use std::process::ExitCode;

use daybucket_core::Window;
use serde::Serialize;

use crate::cli::WindowArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::parse_date_arg;

pub fn run_window(args: WindowArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let start = parse_date_arg("start", &args.start)?;

    let window = match (args.days, args.end.as_deref()) {
        (Some(days), _) => Window::new(start, days),
        (None, Some(end)) => Window::spanning(start, parse_date_arg("end", end)?),
        (None, None) => return Err(CliError::input("Either --days or --end is required")),
    }
    .map_err(|e| CliError::input(e.to_string()))?;

    let output = WindowOutput {
        days: window.days(),
        window,
    };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for day in &output.days {
                println!("{}", day);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct WindowOutput {
    #[serde(flatten)]
    window: Window,
    days: Vec<String>,
}
