#![cfg(test)]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use sweepr_common::config::Config;
use sweepr_common::network::range::SweepRange;
use sweepr_core::sweep::SweepCoordinator;

use crate::util::{CollectingReport, FakeProbe, FakeResolve};

fn names(prefix: &str, start: &str, end: &str) -> SweepRange {
    SweepRange::Names {
        prefix: prefix.to_string(),
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
    }
}

fn addresses(prefix: &str) -> SweepRange {
    SweepRange::Addresses {
        prefix: prefix.parse().unwrap(),
    }
}

fn coordinator(
    probe: Arc<FakeProbe>,
    resolve: Arc<FakeResolve>,
    report: Arc<CollectingReport>,
    cfg: &Config,
) -> SweepCoordinator {
    SweepCoordinator::new(probe, resolve, report, cfg)
}

#[tokio::test]
async fn name_sweep_all_reachable_tallies_everything_up() {
    let probe = Arc::new(FakeProbe::new([
        "node01", "node02", "node03", "node04", "node05",
    ]));
    let resolve = Arc::new(FakeResolve::with_entries([
        ("node01", "10.0.0.1"),
        ("node02", "10.0.0.2"),
        ("node03", "10.0.0.3"),
        ("node04", "10.0.0.4"),
        ("node05", "10.0.0.5"),
    ]));
    let report = Arc::new(CollectingReport::new());
    let cfg = Config::default();

    let summary = coordinator(probe, resolve, report.clone(), &cfg)
        .run(&names("node", "01", "05"))
        .await
        .unwrap()
        .expect("name sweeps must produce a summary");

    assert_eq!(summary.total_up, 5);
    assert_eq!(summary.total_down, 0);

    let outcomes = report.outcomes();
    assert_eq!(outcomes.len(), 5);
    for outcome in &outcomes {
        assert!(outcome.reachable);
        assert!(outcome.annotation.is_some());
        assert_eq!(outcome.target.display.len(), "node01".len());
    }
}

#[tokio::test]
async fn name_sweep_none_reachable_tallies_everything_down() {
    let probe = Arc::new(FakeProbe::new([]));
    let resolve = Arc::new(FakeResolve::empty());
    let report = Arc::new(CollectingReport::new());
    let cfg = Config::default();

    let summary = coordinator(probe, resolve, report.clone(), &cfg)
        .run(&names("node", "1", "3"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(summary.total_up, 0);
    assert_eq!(summary.total_down, 3);

    let displays: HashSet<String> = report
        .outcomes()
        .iter()
        .map(|o| o.target.display.clone())
        .collect();
    assert_eq!(
        displays,
        ["node1", "node2", "node3"]
            .iter()
            .map(|s| s.to_string())
            .collect::<HashSet<String>>()
    );
}

#[tokio::test]
async fn address_sweep_reports_no_summary() {
    let probe = Arc::new(FakeProbe::new(["10.0.0.7", "10.0.0.42", "10.0.0.254"]));
    let resolve = Arc::new(FakeResolve::empty());
    let report = Arc::new(CollectingReport::new());
    let cfg = Config::default();

    let summary = coordinator(probe, resolve, report.clone(), &cfg)
        .run(&addresses("10.0.0"))
        .await
        .unwrap();

    assert!(summary.is_none(), "address sweeps must not tally");

    let outcomes = report.outcomes();
    assert_eq!(outcomes.len(), 254);

    let up: Vec<_> = outcomes.iter().filter(|o| o.reachable).collect();
    assert_eq!(up.len(), 3);
    for outcome in up {
        // No reverse records in the fake: bare lines, no stale annotation.
        assert_eq!(outcome.annotation, None);
    }
}

#[tokio::test]
async fn barrier_accounts_for_every_target() {
    let reachable: Vec<String> = (1..=60).filter(|n| n % 3 == 0).map(|n| format!("host{n:02}")).collect();
    let probe = Arc::new(FakeProbe::with_delay(
        reachable.iter().map(String::as_str),
        Duration::from_millis(5),
    ));
    let resolve = Arc::new(FakeResolve::empty());
    let report = Arc::new(CollectingReport::new());
    let cfg = Config {
        max_in_flight: 16,
        ..Config::default()
    };

    let summary = coordinator(probe, resolve, report.clone(), &cfg)
        .run(&names("host", "01", "60"))
        .await
        .unwrap()
        .unwrap();

    // Summary exists only after the barrier, so it must cover every target.
    assert_eq!(summary.total_up + summary.total_down, 60);
    assert_eq!(summary.total_up, 20);
    assert_eq!(report.outcomes().len(), 60);
}

#[tokio::test]
async fn sweeping_twice_finds_the_same_hosts() {
    let probe = Arc::new(FakeProbe::new(["node2", "node4"]));
    let resolve = Arc::new(FakeResolve::empty());
    let cfg = Config::default();

    let mut up_sets: Vec<HashSet<String>> = Vec::new();
    for _ in 0..2 {
        let report = Arc::new(CollectingReport::new());
        let sweep = coordinator(probe.clone(), resolve.clone(), report.clone(), &cfg);
        sweep.run(&names("node", "1", "5")).await.unwrap();

        up_sets.push(
            report
                .outcomes()
                .iter()
                .filter(|o| o.reachable)
                .map(|o| o.target.display.clone())
                .collect(),
        );
    }

    assert_eq!(up_sets[0], up_sets[1]);
    assert_eq!(up_sets[0].len(), 2);
}

#[tokio::test]
async fn in_flight_probes_never_exceed_the_bound() {
    let all: Vec<String> = (1..=40).map(|n| format!("node{n:02}")).collect();
    let probe = Arc::new(FakeProbe::with_delay(
        all.iter().map(String::as_str),
        Duration::from_millis(10),
    ));
    let resolve = Arc::new(FakeResolve::empty());
    let report = Arc::new(CollectingReport::new());
    let cfg = Config {
        max_in_flight: 8,
        ..Config::default()
    };

    coordinator(probe.clone(), resolve, report, &cfg)
        .run(&names("node", "01", "40"))
        .await
        .unwrap();

    assert!(
        probe.high_water_mark() <= 8,
        "observed {} concurrent probes with a bound of 8",
        probe.high_water_mark()
    );
}

#[tokio::test]
async fn annotation_present_only_when_resolution_succeeds() {
    let probe = Arc::new(FakeProbe::new(["node1", "node2", "node3"]));
    // Only node2 has a forward record.
    let resolve = Arc::new(FakeResolve::with_entries([("node2", "192.168.7.2")]));
    let report = Arc::new(CollectingReport::new());
    let cfg = Config::default();

    coordinator(probe, resolve, report.clone(), &cfg)
        .run(&names("node", "1", "4"))
        .await
        .unwrap();

    for outcome in report.outcomes() {
        match outcome.target.display.as_str() {
            "node2" => assert_eq!(outcome.annotation.as_deref(), Some("192.168.7.2")),
            _ => assert_eq!(outcome.annotation, None),
        }
    }
}

#[tokio::test]
async fn no_dns_skips_annotation_entirely() {
    let probe = Arc::new(FakeProbe::new(["node1", "node2"]));
    let resolve = Arc::new(FakeResolve::with_entries([
        ("node1", "10.0.0.1"),
        ("node2", "10.0.0.2"),
    ]));
    let report = Arc::new(CollectingReport::new());
    let cfg = Config {
        no_dns: true,
        ..Config::default()
    };

    coordinator(probe, resolve, report.clone(), &cfg)
        .run(&names("node", "1", "2"))
        .await
        .unwrap();

    assert!(report.outcomes().iter().all(|o| o.annotation.is_none()));
}

#[tokio::test]
async fn inverted_name_range_completes_with_empty_tally() {
    let probe = Arc::new(FakeProbe::new(["node3"]));
    let resolve = Arc::new(FakeResolve::empty());
    let report = Arc::new(CollectingReport::new());
    let cfg = Config::default();

    let summary = coordinator(probe, resolve, report.clone(), &cfg)
        .run(&names("node", "5", "3"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(summary.total_up, 0);
    assert_eq!(summary.total_down, 0);
    assert!(report.outcomes().is_empty());
}
