use std::process::ExitCode;

use chrono::Utc;
use daybucket_core::{Organizer, Place, render_ics};

use crate::cli::IcsArgs;
use crate::error::{CliResult, EXIT_SUCCESS};
use crate::shared::{parse_date_arg, parse_records, read_input};

pub fn run_ics(args: IcsArgs) -> CliResult<ExitCode> {
    let stamp = match args.stamp.as_deref() {
        Some(stamp) => parse_date_arg("stamp", stamp)?,
        None => Utc::now(),
    };

    let organizer = args.organizer_email.map(|email| Organizer {
        name: args.organizer_name.unwrap_or_else(|| email.clone()),
        email,
    });

    let input = read_input(&args.input)?;
    let places: Vec<Place> = parse_records(&input)?;

    print!("{}", render_ics(&places, stamp, organizer.as_ref()));

    Ok(ExitCode::from(EXIT_SUCCESS))
}
