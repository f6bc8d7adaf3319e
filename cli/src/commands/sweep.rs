use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;

use sweepr_common::config::Config;
use sweepr_common::info;
use sweepr_common::network::range::SweepRange;
use sweepr_core::probe::IcmpProber;
use sweepr_core::resolve::DnsResolver;
use sweepr_core::sweep::SweepCoordinator;

use crate::terminal::print::{self, SweepPrinter};
use crate::terminal::spinner;

pub async fn sweep(range: SweepRange, cfg: &Config) -> anyhow::Result<()> {
    let total = range.targets().len();

    print::header(&format!("sweeping {}", range.describe()), cfg);
    print::fat_separator(cfg);
    info!(
        "Dispatching {total} probes, {} in flight at most",
        cfg.max_in_flight
    );

    let prober = Arc::new(
        IcmpProber::new().context("opening the ICMP socket (elevated privileges may be needed)")?,
    );
    let resolver = Arc::new(DnsResolver::default());

    let pb = (!cfg.quiet).then(|| spinner::start_sweep_spinner(total));
    let printer = Arc::new(SweepPrinter::new(pb.clone(), total, range.keeps_tally()));
    let coordinator = SweepCoordinator::new(prober, resolver, printer, cfg);

    let start_time: Instant = Instant::now();
    let summary = coordinator.run(&range).await?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    print::fat_separator(cfg);
    if let Some(summary) = summary {
        print::summary(&summary);
    }
    print::completion(total, start_time.elapsed(), cfg);
    Ok(())
}
