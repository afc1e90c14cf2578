use std::path::PathBuf;

use vpr_validate::RunReport;

/// Outcome of a `validate` invocation, one entry per executed strategy.
#[derive(Debug)]
pub struct ValidateResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub runs: Vec<RunSummary>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub report: RunReport,
    /// Written records document, absent on --dry-run.
    pub output: Option<PathBuf>,
}
