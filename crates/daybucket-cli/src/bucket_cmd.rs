use std::process::ExitCode;

use daybucket_core::{
    BucketMap, Checklist, DatedRecord, Note, Place, Transportation, Window, bucket,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::BucketArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{RecordKind, RecordLabel, parse_date_arg, parse_kind, parse_records, read_input};

pub fn run_bucket(args: BucketArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let kind = parse_kind(&args.kind)?;
    let start = parse_date_arg("start", &args.start)?;
    let window = Window::new(start, args.days).map_err(|e| CliError::input(e.to_string()))?;
    let input = read_input(&args.input)?;

    debug!(%kind, start = %window.start(), days = window.number_of_days(), "bucketing records");

    match kind {
        RecordKind::Places => bucket_kind::<Place>(&input, &window, output_format),
        RecordKind::Transportations => {
            bucket_kind::<Transportation>(&input, &window, output_format)
        }
        RecordKind::Notes => bucket_kind::<Note>(&input, &window, output_format),
        RecordKind::Checklists => bucket_kind::<Checklist>(&input, &window, output_format),
    }
}

fn bucket_kind<R>(input: &str, window: &Window, output_format: OutputFormat) -> CliResult<ExitCode>
where
    R: DatedRecord + RecordLabel + Serialize + DeserializeOwned,
{
    let records: Vec<R> = parse_records(input)?;
    let buckets = bucket(&records, window);

    debug!(
        records = records.len(),
        placements = buckets.total_placements(),
        "bucketed"
    );

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&buckets)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text(&buckets),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn print_text<R: RecordLabel>(buckets: &BucketMap<'_, R>) {
    for bucket in buckets.buckets() {
        if bucket.records.is_empty() {
            println!("{}: (none)", bucket.day);
        } else {
            let labels: Vec<&str> = bucket.records.iter().map(|record| record.label()).collect();
            println!("{}: {}", bucket.day, labels.join(", "));
        }
    }
}
