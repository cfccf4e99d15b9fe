use std::process::ExitCode;

use daybucket_core::day::format_rfc3339_utc;
use daybucket_core::{Place, calendar_events};

use crate::cli::EventsArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{parse_records, read_input};

pub fn run_events(args: EventsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let input = read_input(&args.input)?;
    let places: Vec<Place> = parse_records(&input)?;
    let events = calendar_events(&places);

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&events)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for event in &events {
                println!(
                    "{} -> {}: {}",
                    format_rfc3339_utc(&event.start),
                    format_rfc3339_utc(&event.end),
                    event.title
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
