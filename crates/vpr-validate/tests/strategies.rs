//! Strategy-equivalence tests: sequential and concurrent runs must accept
//! the same multiset of records for any input.

use chrono::NaiveDate;
use proptest::prelude::*;

use vpr_model::RawRow;
use vpr_validate::{RowValidator, RunnerOptions, Strategy, run};

fn valid_row(row_number: u64, id: u32) -> RawRow {
    RawRow::new(
        row_number,
        vec![
            id.to_string(),
            "Jane".to_string(),
            "Miller".to_string(),
            format!("jane.miller{id}@example.com"),
            "404-555-0134".to_string(),
            "12 Peach Ave".to_string(),
            "Atlanta".to_string(),
            "GA".to_string(),
            "30301".to_string(),
            "Honda".to_string(),
            "Civic".to_string(),
            "2018".to_string(),
            "XYZ987".to_string(),
            "03/20/2019".to_string(),
            "18500".to_string(),
        ],
    )
}

fn invalid_row(row_number: u64, id: u32) -> RawRow {
    let mut row = valid_row(row_number, id);
    row.fields[4] = "not-a-phone".to_string();
    row
}

fn validator() -> RowValidator {
    RowValidator::new().with_today(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
}

fn quiet(workers: usize) -> RunnerOptions {
    RunnerOptions {
        workers: Some(workers),
        log_rejections: false,
    }
}

fn sorted_ids(run: &vpr_validate::ValidationRun) -> Vec<i32> {
    let mut ids: Vec<i32> = run.records.iter().map(|r| r.customer_id).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn outcome_is_identical_across_strategies() {
    let mut rows = Vec::new();
    for i in 0..500u32 {
        let row_number = u64::from(i) + 2;
        match i % 5 {
            0 => rows.push(invalid_row(row_number, i)),
            1 => rows.push(RawRow::new(row_number, Vec::new())),
            _ => rows.push(valid_row(row_number, i)),
        }
    }
    let v = validator();
    let sequential = run(&rows, &v, Strategy::Sequential, &quiet(8));
    let concurrent = run(&rows, &v, Strategy::Concurrent, &quiet(8));

    assert_eq!(sorted_ids(&sequential), sorted_ids(&concurrent));
    assert_eq!(
        sequential.report.rows_processed,
        concurrent.report.rows_processed
    );
    assert_eq!(
        sequential.report.rows_accepted,
        concurrent.report.rows_accepted
    );
    assert_eq!(
        sequential.report.rows_rejected,
        concurrent.report.rows_rejected
    );
}

#[test]
fn rejection_logging_toggle_does_not_change_outcomes() {
    let rows = vec![valid_row(2, 1), invalid_row(3, 2), valid_row(4, 3)];
    let v = validator();

    let noisy = run(
        &rows,
        &v,
        Strategy::Sequential,
        &RunnerOptions {
            workers: None,
            log_rejections: true,
        },
    );
    let silent = run(&rows, &v, Strategy::Sequential, &quiet(2));

    assert_eq!(sorted_ids(&noisy), sorted_ids(&silent));
    assert_eq!(noisy.report.rows_rejected, silent.report.rows_rejected);
}

proptest! {
    // Each row is independently valid, invalid, or blank; whatever the mix
    // and the input order, both strategies must agree on the accepted set.
    #[test]
    fn strategies_agree_for_any_row_mix(kinds in prop::collection::vec(0u8..3, 0..60)) {
        let rows: Vec<RawRow> = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let row_number = i as u64 + 2;
                match kind {
                    0 => valid_row(row_number, i as u32),
                    1 => invalid_row(row_number, i as u32),
                    _ => RawRow::new(row_number, Vec::new()),
                }
            })
            .collect();

        let v = validator();
        let sequential = run(&rows, &v, Strategy::Sequential, &quiet(4));
        let concurrent = run(&rows, &v, Strategy::Concurrent, &quiet(4));

        prop_assert_eq!(sorted_ids(&sequential), sorted_ids(&concurrent));
        prop_assert_eq!(
            sequential.report.rows_processed,
            concurrent.report.rows_processed
        );
    }
}
