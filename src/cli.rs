use clap::{Args, Parser, Subcommand, ValueEnum};
use issues::{ClassifierConfig, DecodeErrorPolicy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inspect-report")]
#[command(
    author,
    version,
    about = "Summarize inspection issues recorded in an activity export"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored console output
    #[clap(long, global = true, default_value_t = false)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full issue analysis: presence, fix status, fix descriptions and unfixed categories
    Analyze {
        #[command(flatten)]
        args: ReportArgs,
    },

    /// Breakdown of the fix descriptions recorded for activities with identified issues
    Fixes {
        #[command(flatten)]
        args: ReportArgs,
    },
}

#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Activity export to analyze (CSV with type, activityId and data columns)
    pub input: PathBuf,

    /// Output format of the report
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit JSON on a single line (only used with --format json)
    #[clap(long, default_value_t = false)]
    pub compact: bool,

    /// Write the report to this file instead of standard output
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// What to do with inspection records whose data column is not valid JSON
    #[clap(long, value_enum, default_value_t = DecodeErrorMode::SkipAndReport)]
    pub on_decode_error: DecodeErrorMode,

    /// Record type tag that marks an inspection
    #[clap(long, default_value = "INSPECTION")]
    pub inspection_type: String,

    /// Example activities kept per distinct fix description
    #[clap(long, default_value_t = 3)]
    pub max_examples: usize,

    /// Characters kept from each fix description
    #[clap(long, default_value_t = 100)]
    pub value_limit: usize,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl ReportArgs {
    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig::default()
            .with_inspection_type(self.inspection_type.clone())
            .with_max_examples(self.max_examples)
            .with_value_limit(self.value_limit)
            .with_decode_error_policy(self.on_decode_error.into())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text report
    Text,

    /// Structured JSON document
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorMode {
    /// Skip the record and only count it
    SkipSilent,

    /// Skip the record, print a warning and list it in the report
    SkipAndReport,
}

impl From<DecodeErrorMode> for DecodeErrorPolicy {
    fn from(mode: DecodeErrorMode) -> Self {
        match mode {
            DecodeErrorMode::SkipSilent => DecodeErrorPolicy::SkipSilent,
            DecodeErrorMode::SkipAndReport => DecodeErrorPolicy::SkipAndReport,
        }
    }
}
