use std::io::BufRead;

use vpr_model::RawRow;

/// Split one physical line into trimmed fields.
///
/// A blank or whitespace-only line yields no fields at all; the row is later
/// skipped, not rejected with diagnostics. No quote or escape handling: a
/// field can never contain the separator.
pub fn split_line(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }
    line.split(',')
        .map(|field| field.trim().to_string())
        .collect()
}

/// Lazy iterator of [`RawRow`]s over a line-oriented source.
///
/// The first physical line is always a header: it is consumed, never yielded,
/// but still occupies row number 1 so data rows keep their file line numbers.
/// One pass over the source; not restartable.
pub struct LineSplitter<R> {
    lines: std::io::Lines<R>,
    row_number: u64,
}

impl<R: BufRead> LineSplitter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            row_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for LineSplitter<R> {
    type Item = std::io::Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(error) => return Some(Err(error)),
            };
            self.row_number += 1;
            if self.row_number == 1 {
                // Header row: skipped, but it still counts toward numbering.
                continue;
            }
            return Some(Ok(RawRow::new(self.row_number, split_line(&line))));
        }
    }
}
