//! Synthetic input-file generation for load testing.
//!
//! Produces schema-conforming rows only; the validator never depends on this
//! module. The RNG is always an explicit instance passed down per call, so a
//! seed reproduces the same file byte for byte.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use vpr_model::FIELD_NAMES;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alex", "Chris", "Sam", "Emily", "Tyler", "Kate", "Robert", "Linda",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Doe", "Johnson", "Brown", "Davis", "Miller", "Wilson", "Garcia", "Clark", "Hall",
];

const STATES: &[&str] = &["GA", "FL", "NY", "TX", "CA", "IL", "WA", "OR", "AZ", "NC"];

const CAR_MAKES: &[&str] = &[
    "Toyota", "Honda", "Ford", "Chevy", "Nissan", "BMW", "Audi", "Hyundai", "Kia", "Mazda",
];

const CAR_MODELS: &[&str] = &[
    "Corolla", "Civic", "Accord", "Camry", "Focus", "Model3", "Altima", "Soul", "CX5", "Pilot",
];

const PLATE_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Below this row count the run finishes before a progress bar is worth
/// drawing.
const PROGRESS_THRESHOLD: u64 = 50_000;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub rows: u64,
    /// Explicit seed for reproducible files; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

pub fn generate_file(path: &Path, options: &GenerateOptions) -> Result<()> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    write_rows(path, options.rows, &mut rng)
}

/// Write a header plus `rows` schema-conforming data rows.
pub fn write_rows(path: &Path, rows: u64, rng: &mut StdRng) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(FIELD_NAMES).context("write header")?;

    let bar = progress_bar(rows);
    for id in 1..=rows {
        writer
            .write_record(synthetic_row(id, rng))
            .context("write row")?;
        bar.inc(1);
    }
    bar.finish_and_clear();
    writer.flush().context("flush output")?;
    Ok(())
}

/// One row in schema order; every field passes its validation rule.
fn synthetic_row(id: u64, rng: &mut StdRng) -> Vec<String> {
    let first = pick(FIRST_NAMES, rng);
    let last = pick(LAST_NAMES, rng);
    vec![
        id.to_string(),
        first.to_string(),
        last.to_string(),
        format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            id
        ),
        format!(
            "{}-{}-{}",
            rng.gen_range(100..1000),
            rng.gen_range(100..1000),
            rng.gen_range(1000..10000)
        ),
        format!("{} Main St", rng.gen_range(1..10000)),
        format!("City{}", rng.gen_range(1..100)),
        pick(STATES, rng).to_string(),
        rng.gen_range(10000..100000).to_string(),
        pick(CAR_MAKES, rng).to_string(),
        pick(CAR_MODELS, rng).to_string(),
        rng.gen_range(2000..=2024).to_string(),
        license_plate(rng),
        // Day capped at 28 keeps every month valid.
        format!(
            "{:02}/{:02}/{}",
            rng.gen_range(1..=12),
            rng.gen_range(1..=28),
            rng.gen_range(2005..=2024)
        ),
        format!("{}.{:02}", rng.gen_range(3000..50000), rng.gen_range(0..100)),
    ]
}

fn license_plate(rng: &mut StdRng) -> String {
    let letters: String = (0..3)
        .map(|_| char::from(*PLATE_LETTERS.choose(rng).unwrap_or(&b'A')))
        .collect();
    format!("{letters}{}", rng.gen_range(100..1000))
}

fn pick<'a>(values: &'a [&'a str], rng: &mut StdRng) -> &'a str {
    values.choose(rng).copied().unwrap_or("")
}

fn progress_bar(rows: u64) -> ProgressBar {
    if rows < PROGRESS_THRESHOLD {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(rows);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} rows")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
