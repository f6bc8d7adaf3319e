pub mod sweep;

use clap::{Parser, Subcommand};
use sweepr_common::network::range::{AddrPrefix, RangeBound};

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "A concurrent reachability sweeper.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Seconds each probe waits for an echo reply
    #[arg(short = 't', long, global = true, default_value_t = 2)]
    pub timeout: u64,

    /// Skip DNS annotation of reachable targets
    #[arg(long, global = true)]
    pub no_dns: bool,

    /// Maximum probes in flight at once
    #[arg(long, global = true, default_value_t = 128)]
    pub max_in_flight: usize,

    /// Suppress the banner and decorative output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sweep PREFIX.1 through PREFIX.254
    #[command(alias = "a")]
    Addr { prefix: AddrPrefix },
    /// Detect the local /24 prefix and sweep it
    #[command(alias = "d")]
    Auto,
    /// Sweep a numbered hostname range, zero-padded like START
    #[command(alias = "n")]
    Names {
        prefix: String,
        start: RangeBound,
        end: RangeBound,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
