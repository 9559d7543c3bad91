// =============================================================================
// KStock Signal — Main Entry Point
// =============================================================================
//
// Loads the runtime config and the crawler snapshot, each falling back to
// built-in defaults when unavailable, then runs the requested command.
// Reports go to stdout as JSON; logs go to stderr.
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kstock_signal::analysis::StockAnalysis;
use kstock_signal::calculators;
use kstock_signal::indicators::rsi_zone;
use kstock_signal::market_data::{build_catalog, search, MarketOverview, MarketSnapshot};
use kstock_signal::runtime_config::RuntimeConfig;

use crate::cli::{AnalyzeArgs, CalcCommand, Cli, Command};

fn main() -> Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ── 2. Config ────────────────────────────────────────────────────────
    let mut config = RuntimeConfig::load(&cli.config).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    apply_symbol_override(&mut config, std::env::var("STOCK_SYMBOLS").ok().as_deref());
    if let Some(path) = &cli.snapshot {
        config.snapshot_path = path.clone();
    }

    // ── 3. Snapshot ──────────────────────────────────────────────────────
    let snapshot = match MarketSnapshot::load(&config.snapshot_path) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(error = %e, "Failed to load market snapshot, using stock profiles");
            None
        }
    };

    // ── 4. Dispatch ──────────────────────────────────────────────────────
    match cli.command {
        None => analyze(&config, snapshot.as_ref(), &AnalyzeArgs::default(), cli.pretty),
        Some(Command::Analyze(args)) => analyze(&config, snapshot.as_ref(), &args, cli.pretty),
        Some(Command::Market(args)) => {
            let overview = MarketOverview::build(&config, snapshot.as_ref(), args.code.as_deref());
            emit(&overview, cli.pretty)
        }
        Some(Command::Search(args)) => {
            let catalog = build_catalog(&config, snapshot.as_ref());
            let hits = search(&catalog, &args.query);
            info!(query = %args.query, hits = hits.len(), "catalogue searched");
            emit(&hits, cli.pretty)
        }
        Some(Command::Calc(calc)) => match calc {
            CalcCommand::Compound(a) => emit(&calculators::compound(a.principal, a.rate, a.years)?, cli.pretty),
            CalcCommand::Simple(a) => emit(&calculators::simple(a.principal, a.rate, a.years)?, cli.pretty),
            CalcCommand::Target(a) => emit(&calculators::target(a.amount, a.rate, a.years)?, cli.pretty),
        },
    }
}

fn analyze(
    config: &RuntimeConfig,
    snapshot: Option<&MarketSnapshot>,
    args: &AnalyzeArgs,
    pretty: bool,
) -> Result<()> {
    let codes = if args.codes.is_empty() {
        &config.symbols
    } else {
        &args.codes
    };
    let today = chrono::Local::now().date_naive();

    info!(codes = ?codes, snapshot = snapshot.is_some(), "Analysing stocks");

    for code in codes {
        let analysis = StockAnalysis::build(code, config, snapshot, today);

        if let Some(rsi) = analysis.rsi {
            info!(code = %code, rsi, zone = rsi_zone(rsi), "RSI");
        }

        let mut value = serde_json::to_value(&analysis).context("failed to serialise analysis")?;
        if args.brief {
            strip_chart_series(&mut value);
        }
        emit(&value, pretty)?;
    }

    Ok(())
}

/// Replace the configured symbols with a comma-separated `STOCK_SYMBOLS`
/// list when one is set, and never leave the list empty.
fn apply_symbol_override(config: &mut RuntimeConfig, env_symbols: Option<&str>) {
    if let Some(syms) = env_symbols {
        config.symbols = syms
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if config.symbols.is_empty() {
        warn!(default_symbol = %config.default_symbol, "no symbols configured, using default symbol");
        config.symbols = vec![config.default_symbol.clone()];
    }
}

/// Drop the per-day chart data from a serialised analysis.
fn strip_chart_series(value: &mut serde_json::Value) {
    if let Some(obj) = value.as_object_mut() {
        obj.remove("series");
        obj.remove("overlays");
    }
}

fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialise output")?;
    println!("{text}");
    Ok(())
}
