//! Validation execution strategies.
//!
//! Rows are independent units of work: no shared mutable input, no ordering
//! dependency between rows. The sequential strategy keeps input order; the
//! concurrent strategy fans rows out over a worker pool and funnels outcomes
//! through a channel to a single consumer, so the output collection and the
//! rejection log are only ever touched from one thread.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use vpr_model::{PurchaseRecord, RawRow};

use crate::validator::RowValidator;

/// Execution mode for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One thread, accepted records in input order.
    Sequential,
    /// Worker pool, accepted-record order unspecified.
    Concurrent,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Concurrent => "concurrent",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options shared by both strategies.
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// Worker-pool size override; defaults to the host's available
    /// parallelism. Ignored by the sequential strategy.
    pub workers: Option<usize>,
    /// Emit each rejected row's diagnostics at warn level. Has no effect on
    /// which rows are accepted.
    pub log_rejections: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            workers: None,
            log_rejections: true,
        }
    }
}

/// Aggregate counts and timing for one validation run.
///
/// Blank rows are excluded from every count. `elapsed` covers the validation
/// phase only.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub strategy: Strategy,
    pub rows_processed: usize,
    pub rows_accepted: usize,
    pub rows_rejected: usize,
    pub elapsed: Duration,
}

/// Result of one validation run: the accepted records plus its report.
#[derive(Debug)]
pub struct ValidationRun {
    pub records: Vec<PurchaseRecord>,
    pub report: RunReport,
}

/// Validate every row under the chosen strategy.
///
/// Blank rows are skipped silently. One bad row never affects another, and a
/// run always completes. Both strategies accept the same multiset of records;
/// only the sequential strategy guarantees their order.
pub fn run(
    rows: &[RawRow],
    validator: &RowValidator,
    strategy: Strategy,
    options: &RunnerOptions,
) -> ValidationRun {
    let start = Instant::now();
    let (records, rows_processed, rows_rejected) = match strategy {
        Strategy::Sequential => run_sequential(rows, validator, options),
        Strategy::Concurrent => run_concurrent(rows, validator, options),
    };
    let elapsed = start.elapsed();
    let report = RunReport {
        strategy,
        rows_processed,
        rows_accepted: records.len(),
        rows_rejected,
        elapsed,
    };
    info!(
        strategy = strategy.as_str(),
        rows_processed = report.rows_processed,
        rows_accepted = report.rows_accepted,
        rows_rejected = report.rows_rejected,
        duration_ms = elapsed.as_millis() as u64,
        "validation complete"
    );
    ValidationRun { records, report }
}

fn run_sequential(
    rows: &[RawRow],
    validator: &RowValidator,
    options: &RunnerOptions,
) -> (Vec<PurchaseRecord>, usize, usize) {
    let mut records = Vec::new();
    let mut processed = 0usize;
    let mut rejected = 0usize;
    for row in rows {
        if row.is_blank() {
            continue;
        }
        processed += 1;
        match validator.validate(&row.fields) {
            Ok(record) => records.push(record),
            Err(reasons) => {
                rejected += 1;
                log_rejection(row.row_number, &reasons, options);
            }
        }
    }
    (records, processed, rejected)
}

fn run_concurrent(
    rows: &[RawRow],
    validator: &RowValidator,
    options: &RunnerOptions,
) -> (Vec<PurchaseRecord>, usize, usize) {
    let worker_count = options.workers.unwrap_or_else(default_worker_count).max(1);
    let mut records = Vec::new();
    let mut processed = 0usize;
    let mut rejected = 0usize;
    let cursor = AtomicUsize::new(0);

    thread::scope(|scope| {
        let (sender, receiver) = mpsc::channel();

        for _ in 0..worker_count {
            let sender = sender.clone();
            let cursor = &cursor;
            scope.spawn(move || {
                // Claim one row at a time so a slow row never serializes a
                // whole pre-assigned chunk behind it.
                loop {
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(row) = rows.get(index) else { break };
                    if row.is_blank() {
                        continue;
                    }
                    let outcome = validator.validate(&row.fields);
                    if sender.send((row.row_number, outcome)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(sender);

        // Single consumer: accepted records and rejection diagnostics are
        // handled on this thread only, so no insert is lost and each row's
        // diagnostics stay contiguous in the log.
        for (row_number, outcome) in receiver {
            processed += 1;
            match outcome {
                Ok(record) => records.push(record),
                Err(reasons) => {
                    rejected += 1;
                    log_rejection(row_number, &reasons, options);
                }
            }
        }
    });

    (records, processed, rejected)
}

fn default_worker_count() -> usize {
    thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

fn log_rejection(row_number: u64, reasons: &[String], options: &RunnerOptions) {
    if !options.log_rejections {
        return;
    }
    for reason in reasons {
        warn!(row = row_number, "{reason}");
    }
}
