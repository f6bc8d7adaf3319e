mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, sweep};
use sweepr_common::config::Config;
use sweepr_common::network::interface;
use sweepr_common::network::range::SweepRange;
use sweepr_common::success;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        timeout: Duration::from_secs(commands.timeout),
        no_dns: commands.no_dns,
        max_in_flight: commands.max_in_flight,
        quiet: commands.quiet,
    };

    print::banner(&cfg);

    let range = match commands.command {
        Commands::Addr { prefix } => SweepRange::Addresses { prefix },
        Commands::Auto => {
            let prefix = interface::detect_lan_prefix()?;
            success!("Detected local prefix {prefix}");
            SweepRange::Addresses { prefix }
        }
        Commands::Names { prefix, start, end } => SweepRange::Names { prefix, start, end },
    };

    sweep::sweep(range, &cfg).await
}
