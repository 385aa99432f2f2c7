use crate::iupac_name;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::fs::File;
use std::io::{Read, Write};
use tracing::{info, warn};

/// Column holding the formula, falling back to the first column.
fn formula_column(headers: &StringRecord) -> usize {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case("formula"))
        .unwrap_or(0)
}

/// Names every formula in a CSV stream, writing `formula,name,status` rows.
/// Returns the number of rows written.
pub fn name_csv_records(input: impl Read, output: impl Write) -> Result<usize> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(input);
    let column = formula_column(rdr.headers().context("Failed to read CSV headers")?);

    let mut wtr = Writer::from_writer(output);
    wtr.write_record(["formula", "name", "status"])?;

    let mut written = 0;
    for (row, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read CSV record {}", row + 1))?;
        let formula = record.get(column).unwrap_or("").trim();
        if formula.is_empty() {
            warn!("Skipping record with empty formula: {:?}", record);
            continue;
        }

        match iupac_name(formula) {
            Ok(name) => {
                let status = if name.is_degraded() { "degraded" } else { "ok" };
                wtr.write_record([formula, name.text.as_str(), status])?;
            }
            Err(e) => {
                warn!("Could not name {}: {}", formula, e);
                wtr.write_record([formula, "", e.to_string().as_str()])?;
            }
        }
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}

/// File-to-file wrapper around [`name_csv_records`].
pub fn name_csv_file(input_filename: &str, output_filename: &str) -> Result<usize> {
    let input = File::open(input_filename)
        .with_context(|| format!("Failed to open {input_filename}"))?;
    let output = File::create(output_filename)
        .with_context(|| format!("Failed to create {output_filename}"))?;
    let written = name_csv_records(input, output)?;
    info!("Named {} formulas into {}", written, output_filename);
    Ok(written)
}
