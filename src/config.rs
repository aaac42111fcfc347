use clap::Parser;
use serde::{Deserialize, Serialize};

/// Rendering style for track durations.
#[derive(Debug, PartialEq, Clone, Copy, clap::ValueEnum, Serialize, Deserialize)]
pub enum Style {
    /// Unit-suffixed form: "1h30min30s"
    Long,
    /// Colon-separated form: "1:30:30"
    Compact,
    /// Zero-padded form: "01:30:30"
    Clock,
}

/// Configuration parsed from command-line arguments.
#[derive(Debug, Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Milliseconds to format; duration text with --parse, bytes with --bytes
    pub value: String,
    /// Duration rendering style
    #[arg(long = "style", value_enum, default_value_t = Style::Long)]
    pub style: Style,
    /// Omit seconds in long style output
    #[arg(long = "no-seconds", default_value_t = false, action = clap::ArgAction::SetTrue)]
    pub no_seconds: bool,
    /// Parse duration text back to a millisecond count
    #[arg(long = "parse", conflicts_with = "bytes", default_value_t = false, action = clap::ArgAction::SetTrue)]
    pub parse: bool,
    /// Treat the value as a byte count and print a readable size
    #[arg(long = "bytes", default_value_t = false, action = clap::ArgAction::SetTrue)]
    pub bytes: bool,
    /// Use 1024-based units with --bytes
    #[arg(long = "binary", requires = "bytes", default_value_t = false, action = clap::ArgAction::SetTrue)]
    pub binary: bool,
    /// Emit JSON ({"text": ...}) instead of plain text
    #[arg(long = "json", default_value_t = false, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}
