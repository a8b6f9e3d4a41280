use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "prostrat",
    version,
    about = "Prostate biopsy report parsing, NCCN risk and nomogram"
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true, default_value_t = false)]
    pub log_json: bool,

    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse pathology report text into a comparison table.
    Parse(ParseArgs),
    /// Classify NCCN risk from explicit values.
    Risk(RiskArgs),
    /// Run the pre-treatment nomogram from explicit values.
    Nomogram(NomogramArgs),
    /// Inspect or initialize the config file.
    Config(ConfigArgs),
}

/// PSA, stage and therapy flags shared by `parse`.
#[derive(Debug, Clone, Args)]
pub struct ClinicalArgs {
    #[arg(long, help = "PSA bucket (<10, 10-20, >20) or a numeric value")]
    pub psa: Option<String>,

    #[arg(long, help = "Clinical T-stage (T1c, T2a, ..., T4, or Auto)")]
    pub stage: Option<String>,

    #[arg(long, help = "Manual total-core count replacing the aggregated denominator")]
    pub total_cores: Option<u32>,

    #[arg(long, default_value_t = false)]
    pub hormone: bool,

    #[arg(long, default_value_t = false)]
    pub radiation: bool,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    #[arg(long, help = "Report text file (reads stdin when omitted or '-')")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub clinical: ClinicalArgs,

    #[arg(long, help = "Cores in a systematic biopsy (overrides config)")]
    pub systematic_cores: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also run the nomogram on the report at this index (0 = newest).
    #[arg(long)]
    pub nomogram: Option<usize>,

    #[arg(long, help = "Reference date for age calculation (YYYY-MM-DD, default today)")]
    pub today: Option<String>,
}

#[derive(Debug, Args)]
pub struct RiskArgs {
    #[arg(long)]
    pub psa: f64,

    #[arg(long, default_value_t = 1)]
    pub grade_group: u8,

    #[arg(long, default_value = "T1c")]
    pub stage: String,

    #[arg(long, default_value_t = 0)]
    pub positive_cores: u32,

    #[arg(long, default_value_t = 14)]
    pub total_cores: u32,
}

#[derive(Debug, Args)]
pub struct NomogramArgs {
    #[arg(long)]
    pub age: Option<f64>,

    #[arg(long)]
    pub psa: Option<f64>,

    #[arg(long)]
    pub grade_group: Option<i32>,

    #[arg(long, help = "Nomogram stage (T1, T2a, T2b, T2c, T3)")]
    pub stage: Option<String>,

    #[arg(long)]
    pub positive_cores: Option<i32>,

    #[arg(long)]
    pub negative_cores: Option<i32>,

    #[arg(long, default_value_t = false)]
    pub hormone: bool,

    #[arg(long, default_value_t = false)]
    pub radiation: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective config.
    Show,
    /// Print the config file location.
    Path,
    /// Write a default config file if none exists.
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
