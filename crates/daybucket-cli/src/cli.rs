use clap::{Parser, Subcommand};

/// Calendar-day bucketing for travel records
#[derive(Parser, Debug)]
#[command(name = "daybucket", version)]
#[command(about = "Calendar-day bucketing for travel records")]
pub struct Cli {
    /// Enable verbose (debug) logging; RUST_LOG takes precedence when set
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign records to every window day they overlap
    Bucket(BucketArgs),
    /// List the days of a window
    Window(WindowArgs),
    /// List place visits as calendar events
    Events(EventsArgs),
    /// Export place visits as an iCalendar document
    Ics(IcsArgs),
}

#[derive(clap::Args, Debug)]
pub struct BucketArgs {
    /// Record kind: places, transportations, notes, checklists
    #[arg(short, long, default_value = "places")]
    pub kind: String,

    /// First day of the window (YYYY-MM-DD or ISO-8601 datetime, UTC day used)
    #[arg(short, long)]
    pub start: String,

    /// Number of days in the window
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: i64,

    /// Input file with a JSON array of records (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct WindowArgs {
    /// First day of the window
    #[arg(short, long)]
    pub start: String,

    /// Number of days in the window
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        conflicts_with = "end",
        required_unless_present = "end"
    )]
    pub days: Option<i64>,

    /// Last day of the window (inclusive), instead of --days
    #[arg(long)]
    pub end: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct EventsArgs {
    /// Input file with a JSON array of places (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct IcsArgs {
    /// Input file with a JSON array of places (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Timestamp for DTSTAMP/CREATED/LAST-MODIFIED (RFC3339, defaults to now)
    #[arg(long)]
    pub stamp: Option<String>,

    /// Organizer display name
    #[arg(long, requires = "organizer_email")]
    pub organizer_name: Option<String>,

    /// Organizer email address
    #[arg(long)]
    pub organizer_email: Option<String>,
}
