use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use colored::*;
use indicatif::ProgressBar;

use sweepr_common::config::Config;
use sweepr_common::network::outcome::{ProbeOutcome, SweepSummary};
use sweepr_common::success;
use sweepr_core::report::Report;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn banner(cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let text_content: String = format!("⟦ SWEEPR v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    println!("{sep}{text}{sep}");
}

pub fn header(msg: &str, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );

    println!("{line}");
}

pub fn fat_separator(cfg: &Config) {
    if cfg.quiet {
        return;
    }
    println!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    println!("{space}{msg}");
}

/// The final tally block, name-range mode only.
pub fn summary(summary: &SweepSummary) {
    println!(
        "Nodes found: {}",
        summary.total_up.to_string().color(colors::UP).bold()
    );
    println!(
        "Nodes not found: {}",
        summary.total_down.to_string().color(colors::DOWN).bold()
    );
}

pub fn completion(total: usize, elapsed: Duration, cfg: &Config) {
    let probed: ColoredString = format!("{total} targets probed").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    let output: String = format!("Sweep complete: {probed} in {elapsed}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    if cfg.quiet {
        success!("{}", output);
    } else {
        centerln(&output);
    }
}

/// Streams outcome lines as probe tasks finish, in whatever order they land.
///
/// Reachable targets always get a line; unreachable ones only in name-range
/// mode. Each line is one `println` call, so concurrent tasks can interleave
/// lines but never characters.
pub struct SweepPrinter {
    spinner: Option<ProgressBar>,
    done: AtomicUsize,
    total: usize,
    show_down: bool,
}

impl SweepPrinter {
    pub fn new(spinner: Option<ProgressBar>, total: usize, show_down: bool) -> Self {
        Self {
            spinner,
            done: AtomicUsize::new(0),
            total,
            show_down,
        }
    }

    fn line(&self, line: String) {
        match &self.spinner {
            Some(pb) => pb.println(line),
            None => println!("{line}"),
        }
    }
}

impl Report for SweepPrinter {
    fn outcome(&self, outcome: &ProbeOutcome) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(pb) = &self.spinner {
            pb.set_message(format!("{done}/{} probes answered or timed out", self.total));
        }

        if outcome.reachable {
            let tag: ColoredString = "[UP]".color(colors::UP).bold();
            match &outcome.annotation {
                Some(annotation) => self.line(format!(
                    "{tag} {}  ({})",
                    outcome.target,
                    annotation.color(colors::ANNOTATION)
                )),
                None => self.line(format!("{tag} {}", outcome.target)),
            }
        } else if self.show_down {
            let tag: ColoredString = "[DOWN]".color(colors::DOWN);
            self.line(format!("{tag} {}", outcome.target));
        }
    }
}
