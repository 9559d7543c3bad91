//! Command-line arguments for the `kstock-signal` binary.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | Analyse configured (or given) stock codes, print JSON reports |
//! | `market` | Show KOSPI/KOSDAQ levels and current headlines |
//! | `search` | Search the stock catalogue by name or code |
//! | `calc` | Run an investment calculator |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kstock-signal", version, about = "Indicator and recommendation engine for KRX stocks")]
pub struct Cli {
    /// Runtime configuration file (JSON).
    #[arg(long, global = true, default_value = "runtime_config.json")]
    pub config: PathBuf,

    /// Override the snapshot path from the configuration.
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyse stock codes and print one report per code.
    Analyze(AnalyzeArgs),
    /// Market indices and headlines.
    Market(MarketArgs),
    /// Search the catalogue (queries shorter than two characters match nothing).
    Search(SearchArgs),
    /// Investment calculators.
    #[command(subcommand)]
    Calc(CalcCommand),
}

#[derive(Debug, Args, Default)]
pub struct AnalyzeArgs {
    /// Stock codes; defaults to the configured symbols.
    pub codes: Vec<String>,

    /// Omit chart series from the output.
    #[arg(long)]
    pub brief: bool,
}

#[derive(Debug, Args)]
pub struct MarketArgs {
    /// Stock whose headlines are shown when the snapshot has none.
    pub code: Option<String>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: String,
}

#[derive(Debug, Subcommand)]
pub enum CalcCommand {
    /// Monthly-compounded growth.
    Compound(GrowthArgs),
    /// Simple-interest growth.
    Simple(GrowthArgs),
    /// Lump sum or monthly saving needed to reach a target.
    Target(TargetArgs),
}

#[derive(Debug, Args)]
pub struct GrowthArgs {
    pub principal: f64,
    /// Annual rate in percent.
    pub rate: f64,
    pub years: f64,
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    pub amount: f64,
    /// Annual rate in percent.
    pub rate: f64,
    pub years: f64,
}
