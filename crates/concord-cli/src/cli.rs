use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use concord_sdk::ReferenceChoice;

#[derive(Parser)]
#[command(
    name = "concord",
    about = "Concord — epistemic merge and concordance analysis for discrepant measurements",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReferenceArg {
    First,
    Second,
    Direct,
    Indirect,
}

impl From<ReferenceArg> for ReferenceChoice {
    fn from(arg: ReferenceArg) -> Self {
        match arg {
            ReferenceArg::First => Self::First,
            ReferenceArg::Second => Self::Second,
            ReferenceArg::Direct => Self::Direct,
            ReferenceArg::Indirect => Self::Indirect,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Reproduce the Planck 2018 / SH0ES Hubble tension reconciliation
    Reproduce(ReproduceArgs),
    /// Reconcile a measurement pair read from a TOML file
    Merge(MergeArgs),
    /// List built-in published measurements
    Presets,
    /// Print the effective engine configuration
    Config,
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reproduce(_) => "reproduce",
            Self::Merge(_) => "merge",
            Self::Presets => "presets",
            Self::Config => "config",
        }
    }
}

#[derive(Args)]
pub struct ReproduceArgs {
    /// Measurement to score the merged estimate against
    #[arg(long, value_enum, default_value = "direct")]
    pub reference: ReferenceArg,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Pair file with [first] and [second] tables
    pub path: PathBuf,
    /// Overrides the reference named in the pair file
    #[arg(long, value_enum)]
    pub reference: Option<ReferenceArg>,
}
