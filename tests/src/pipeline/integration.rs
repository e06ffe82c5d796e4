#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use geosift_common::config::Config;
use geosift_common::filter::TargetFilter;
use geosift_common::resolve::Location;
use geosift_common::tally::Tally;
use geosift_core::classify::Classifier;
use geosift_core::pipeline;

use crate::util::{ScriptedResolver, SyntheticResolver};

fn config(workers: usize) -> Config {
    Config {
        workers,
        queue_capacity: 1024,
    }
}

fn run_lines(lines: &[&str], classifier: &Classifier, workers: usize) -> Tally {
    let input = lines.join("\n");
    pipeline::run(input.as_bytes(), classifier, &config(workers))
        .expect("pipeline run failed")
}

fn scripted_classifier(country: Option<&str>) -> (Arc<ScriptedResolver>, Classifier) {
    let resolver = Arc::new(ScriptedResolver::new(&[
        ("8.8.8.8", Location::new(Some("US"), &["CA"])),
        ("1.1.1.1", Location::new(Some("US"), &["NY"])),
        ("9.9.9.9", Location::new(Some("US"), &[])),
    ]));
    let classifier = Classifier::new(
        resolver.clone(),
        TargetFilter::new("CA", country).unwrap(),
    );
    (resolver, classifier)
}

#[test]
fn mixed_input_partitions_exactly() {
    let (_, classifier) = scripted_classifier(None);

    let tally = run_lines(&["8.8.8.8", "not-an-ip", "1.1.1.1"], &classifier, 4);

    assert_eq!(tally.total, 3);
    assert_eq!(tally.parse_failed, 1);
    assert_eq!(tally.matched, 1);
    assert_eq!(tally.not_matched, 1);
    assert_eq!(tally.lookup_failed, 0);
    assert_eq!(tally.no_subdivision, 0);
    assert_eq!(tally.outcome_sum(), tally.total);
}

#[test]
fn missing_subdivision_is_counted_not_dropped() {
    let (_, classifier) = scripted_classifier(Some("US"));

    let tally = run_lines(&["9.9.9.9"], &classifier, 2);

    assert_eq!(tally.total, 1);
    assert_eq!(tally.no_subdivision, 1);
    assert_eq!(tally.matched, 0);
    // The country match is still observable on the no-subdivision record.
    assert_eq!(tally.country_matched, 1);
}

#[test]
fn unknown_address_counts_as_lookup_failure() {
    let (_, classifier) = scripted_classifier(None);

    let tally = run_lines(&["4.4.4.4"], &classifier, 2);

    assert_eq!(tally.total, 1);
    assert_eq!(tally.lookup_failed, 1);
}

#[test]
fn parse_failure_never_reaches_the_resolver() {
    let (resolver, classifier) = scripted_classifier(None);

    let tally = run_lines(&["256.256.256.256"], &classifier, 2);

    assert_eq!(tally.total, 1);
    assert_eq!(tally.parse_failed, 1);
    assert_eq!(resolver.calls(), 0);
}

#[test]
fn result_is_invariant_under_input_order() {
    let (_, classifier) = scripted_classifier(Some("US"));
    let lines = ["8.8.8.8", "not-an-ip", "1.1.1.1", "9.9.9.9", "4.4.4.4"];

    let forward = run_lines(&lines, &classifier, 4);

    let mut reversed = lines;
    reversed.reverse();
    let backward = run_lines(&reversed, &classifier, 4);

    assert_eq!(forward, backward);
    assert_eq!(forward.total, lines.len() as u64);
}

#[test]
fn result_is_invariant_under_worker_count() {
    let (_, classifier) = scripted_classifier(Some("US"));
    let lines = ["8.8.8.8", "1.1.1.1", "bogus", "9.9.9.9", "8.8.8.8"];

    let single = run_lines(&lines, &classifier, 1);
    let pooled = run_lines(&lines, &classifier, 8);

    assert_eq!(single, pooled);
}

/// 100k synthetic records against a fixed-latency mock, pool size swept
/// across {1, 2, 8, 32}: every sweep must produce the identical tally.
#[test]
fn stress_sweep_is_deterministic() {
    let mut input = String::new();
    for i in 0..100_000u32 {
        if i % 13 == 0 {
            input.push_str(&format!("host-{i}\n"));
        } else {
            let [_, b, c, d] = i.to_be_bytes();
            input.push_str(&format!("10.{b}.{c}.{d}\n"));
        }
    }

    let resolver = Arc::new(SyntheticResolver::new().with_latency(Duration::from_micros(1)));
    let classifier = Classifier::new(resolver, TargetFilter::new("CA", Some("US")).unwrap());

    let baseline = pipeline::run(input.as_bytes(), &classifier, &config(1))
        .expect("pipeline run failed");
    assert_eq!(baseline.total, 100_000);
    assert_eq!(baseline.outcome_sum(), baseline.total);
    assert!(baseline.parse_failed > 0);
    assert!(baseline.lookup_failed > 0);
    assert!(baseline.no_subdivision > 0);

    for workers in [2, 8, 32] {
        let swept = pipeline::run(input.as_bytes(), &classifier, &config(workers))
            .expect("pipeline run failed");
        assert_eq!(swept, baseline, "tally diverged at {workers} workers");
    }
}
