use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use vpr_model::{IngestError, RawRow, Result};

use crate::splitter::LineSplitter;

/// Read every data row of a delimited input file into memory.
///
/// A missing file is the one condition that aborts a run before any row is
/// processed. Everything else that can be wrong with the content is left to
/// the validator, row by row.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.is_file() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    let rows = LineSplitter::new(reader).collect::<std::io::Result<Vec<_>>>()?;
    debug!(path = %path.display(), rows = rows.len(), "input parsed");
    Ok(rows)
}
