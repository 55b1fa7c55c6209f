use anyhow::Context;
use colored::Colorize;
use concord_sdk::{EngineConfig, MeasurementPair, Reconciler, ReconciliationReport, PRESETS};
use tracing::debug;

use crate::cli::*;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    debug!(command = cli.command.name(), format = ?cli.format, "dispatching command");
    match cli.command {
        Command::Reproduce(args) => cmd_reproduce(&config, args, &cli.format),
        Command::Merge(args) => cmd_merge(&config, args, &cli.format),
        Command::Presets => cmd_presets(&cli.format),
        Command::Config => cmd_config(&config),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading engine config");
            EngineConfig::load(path)
                .with_context(|| format!("loading engine config from {}", path.display()))
        }
        None => {
            debug!("using default engine config");
            Ok(EngineConfig::default())
        }
    }
}

fn cmd_reproduce(
    config: &EngineConfig,
    args: ReproduceArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let pair = MeasurementPair::hubble_reproduction()?.with_reference(args.reference.into());
    let report = Reconciler::new(*config)?.reconcile(&pair)?;
    emit(&report, format)
}

fn cmd_merge(
    config: &EngineConfig,
    args: MergeArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let mut pair = MeasurementPair::load(&args.path)
        .with_context(|| format!("reading measurement pair from {}", args.path.display()))?;
    if let Some(reference) = args.reference {
        pair = pair.with_reference(reference.into());
    }
    let report = Reconciler::new(*config)?.reconcile(&pair)?;
    emit(&report, format)
}

fn emit(report: &ReconciliationReport, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render::report_text(report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn cmd_presets(format: &OutputFormat) -> anyhow::Result<()> {
    let measurements = PRESETS
        .iter()
        .map(|p| p.measurement().map(|m| (p.key, m)))
        .collect::<Result<Vec<_>, _>>()?;
    match format {
        OutputFormat::Text => {
            for (key, m) in &measurements {
                println!("{:<12} {}", key.yellow().bold(), m);
            }
        }
        OutputFormat::Json => {
            let json: serde_json::Map<String, serde_json::Value> = measurements
                .iter()
                .map(|(key, m)| serde_json::to_value(m).map(|v| (key.to_string(), v)))
                .collect::<Result<_, serde_json::Error>>()?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn cmd_config(config: &EngineConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
