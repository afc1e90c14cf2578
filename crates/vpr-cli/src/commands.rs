use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use vpr_ingest::read_rows;
use vpr_model::RawRow;
use vpr_report::write_records_json;
use vpr_validate::{RowValidator, RunnerOptions, Strategy};

use crate::cli::{GenerateArgs, StrategyArg, ValidateArgs};
use crate::generate::{GenerateOptions, generate_file};
use crate::types::{RunSummary, ValidateResult};

/// Run the validate pipeline: parse once, then validate under each selected
/// strategy and export the accepted records per run.
pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let span = info_span!("validate", input = %args.input.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Parse - split the input into indexed rows
    // =========================================================================
    let parse_start = Instant::now();
    let rows = read_rows(&args.input).context("read input")?;
    info!(
        rows = rows.len(),
        duration_ms = parse_start.elapsed().as_millis() as u64,
        "input parsed"
    );

    // =========================================================================
    // Stage 2: Validate - one run per selected strategy
    // =========================================================================
    let validator = RowValidator::new();
    let options = RunnerOptions {
        workers: args.workers,
        log_rejections: !args.no_rejection_log,
    };

    let mut runs = Vec::new();
    for strategy in selected_strategies(args.strategy) {
        runs.push(execute(&rows, &validator, strategy, &options, args)?);
    }

    Ok(ValidateResult {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        runs,
    })
}

fn execute(
    rows: &[RawRow],
    validator: &RowValidator,
    strategy: Strategy,
    options: &RunnerOptions,
    args: &ValidateArgs,
) -> Result<RunSummary> {
    let outcome = vpr_validate::run(rows, validator, strategy, options);

    // =========================================================================
    // Stage 3: Export - hand the accepted records to the serializer
    // =========================================================================
    let output = if args.dry_run {
        None
    } else {
        let export_start = Instant::now();
        let path = args
            .output_dir
            .join(format!("valid_records_{}.json", strategy.as_str()));
        let written = write_records_json(&path, &outcome.records)
            .with_context(|| format!("export {strategy} records"))?;
        info!(
            strategy = strategy.as_str(),
            path = %written.display(),
            records = outcome.records.len(),
            duration_ms = export_start.elapsed().as_millis() as u64,
            "records exported"
        );
        Some(written)
    };

    Ok(RunSummary {
        report: outcome.report,
        output,
    })
}

fn selected_strategies(arg: StrategyArg) -> Vec<Strategy> {
    match arg {
        StrategyArg::Sequential => vec![Strategy::Sequential],
        StrategyArg::Concurrent => vec![Strategy::Concurrent],
        StrategyArg::Both => vec![Strategy::Concurrent, Strategy::Sequential],
    }
}

/// Write a synthetic input file for load testing.
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let start = Instant::now();
    let options = GenerateOptions {
        rows: args.rows,
        seed: args.seed,
    };
    generate_file(&args.output, &options).context("generate input file")?;
    info!(
        path = %args.output.display(),
        rows = args.rows,
        duration_ms = start.elapsed().as_millis() as u64,
        "synthetic input written"
    );
    println!("Wrote {} rows to {}", args.rows, args.output.display());
    Ok(())
}
