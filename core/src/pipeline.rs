//! # Fan-out/Fan-in Pipeline
//!
//! One reader thread streams input lines into a bounded record queue; a
//! fixed pool of worker threads classifies records until the queue is closed
//! and drained; each worker hands its private [`Tally`] over a result
//! channel exactly once, and the tallies fold into the run's final counters.
//!
//! Shutdown is signaled solely by the reader dropping its end of the record
//! queue. Workers never race a stop signal against the queue, so a record
//! that was enqueued is always classified: the final tally partitions the
//! input exactly, for any worker count and any scheduling.

use std::io::{self, BufRead, BufReader, Read};
use std::thread;

use anyhow::Context;
use crossbeam_channel::{Receiver, Sender, bounded};
use tracing::debug;

use geosift_common::config::Config;
use geosift_common::tally::Tally;

use crate::classify::Classifier;

/// Runs the pipeline to completion over `input` and returns the merged
/// counters.
///
/// Per-record failures are absorbed into the tally; the only hard failure
/// is an I/O or encoding error on the input stream, reported once after the
/// in-flight records have drained.
pub fn run<R>(input: R, classifier: &Classifier, cfg: &Config) -> anyhow::Result<Tally>
where
    R: Read + Send,
{
    let workers = cfg.workers.max(1);
    let (record_tx, record_rx) = bounded::<String>(cfg.queue_capacity.max(1));
    // Each worker sends exactly one tally, so this never blocks a worker.
    let (tally_tx, tally_rx) = bounded::<Tally>(workers);

    debug!("starting {workers} classifier workers");

    let fed = thread::scope(|scope| {
        let reader = scope.spawn(move || feed_records(input, record_tx));

        for _ in 0..workers {
            let records = record_rx.clone();
            let tallies = tally_tx.clone();
            scope.spawn(move || classify_records(classifier, records, tallies));
        }
        // The workers hold the only remaining handles; once the last one
        // exits, the result channel closes.
        drop(record_rx);
        drop(tally_tx);

        match reader.join() {
            Ok(result) => result,
            Err(_) => Err(io::Error::other("record reader thread panicked")),
        }
    });
    // Leaving the scope joined every worker, which closed the result
    // channel; from here the drain below cannot block.

    fed.context("failed reading input records")?;

    let mut tally = Tally::default();
    for partial in tally_rx.iter() {
        tally.merge(&partial);
    }

    debug!("pipeline drained: {} records", tally.total);

    Ok(tally)
}

/// Streams input lines into the record queue, then closes it by dropping
/// the sender. Line terminators (LF or CRLF) are stripped.
///
/// An I/O or encoding error halts production; it is reported once to the
/// pipeline, never counted per record.
fn feed_records<R: Read>(input: R, records: Sender<String>) -> io::Result<()> {
    for line in BufReader::new(input).lines() {
        let line = line?;
        if records.send(line).is_err() {
            // Every worker is gone already; nothing is waiting for records.
            break;
        }
    }
    Ok(())
}

/// Worker loop: pull records until the queue is closed and drained, fold
/// each verdict into a private tally, hand the tally over exactly once.
fn classify_records(classifier: &Classifier, records: Receiver<String>, tallies: Sender<Tally>) {
    let mut tally = Tally::default();
    for record in records.iter() {
        tally.record(classifier.classify(&record));
    }
    let _ = tallies.send(tally);
}
