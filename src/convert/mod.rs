use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{
    collections::{BTreeSet, HashMap},
    fs::{self, File},
    io::{BufWriter, Cursor, Write},
    path::Path,
};
use tracing::info;

use crate::reading::Reading;

pub mod date;
pub mod season;

/// Season code assumed when the CSV header has no `stagione` column at all.
/// A short row is different: its missing cells become "0" in [`raw_row`].
const FALLBACK_SEASON_CODE: &str = "7";

/// One parsed CSV line, keyed by lower-cased trimmed column name.
type RawRow = HashMap<String, String>;

/// Pair header names with record fields. Keys are lower-cased and trimmed,
/// values trimmed; a cell that is empty before trimming, or missing because
/// the record is shorter than the header, becomes the literal "0" so the
/// numeric columns coerce cleanly later. Extra fields beyond the header are
/// dropped.
fn raw_row(headers: &csv::StringRecord, record: &csv::StringRecord) -> RawRow {
    headers
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let value = match record.get(i) {
                None | Some("") => "0".to_string(),
                Some(cell) => cell.trim().to_string(),
            };
            (key.trim().to_lowercase(), value)
        })
        .collect()
}

/// Coerce one room column to `f64`. Absent column or blank cell means 0.0;
/// anything else must parse, and a failure aborts the whole conversion.
fn room_value(row: &RawRow, column: &str) -> Result<f64> {
    match row.get(column).map(String::as_str) {
        None | Some("") => Ok(0.0),
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("invalid numeric value `{}` in column `{}`", raw, column)),
    }
}

/// Normalize one CSV record into a [`Reading`]. Column lookup is
/// case-insensitive and unrecognized columns are ignored.
fn normalize_row(headers: &csv::StringRecord, record: &csv::StringRecord) -> Result<Reading> {
    let row = raw_row(headers, record);
    Ok(Reading {
        data: date::to_iso(row.get("data").map(String::as_str).unwrap_or("")),
        stagione: season::label(
            row.get("stagione")
                .map(String::as_str)
                .unwrap_or(FALLBACK_SEASON_CODE),
        ),
        cucina: room_value(&row, "cucina")?,
        soggiorno: room_value(&row, "soggiorno")?,
        camera: room_value(&row, "camera")?,
        cameretta: room_value(&row, "cameretta")?,
        bagno: room_value(&row, "bagno")?,
    })
}

/// Parse `input` into unsorted readings. The file is buffered whole and an
/// optional UTF-8 BOM stripped before the CSV reader sees it.
pub fn read_readings<P: AsRef<Path>>(input: P) -> Result<Vec<Reading>> {
    let input = input.as_ref();
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_reader(Cursor::new(text.as_bytes()));
    let headers = rdr
        .headers()
        .with_context(|| format!("reading CSV header row of {}", input.display()))?
        .clone();

    let mut readings = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("CSV parse error in {} at record {}", input.display(), idx))?;
        readings.push(normalize_row(&headers, &record)?);
    }
    Ok(readings)
}

/// Read every row of `input`, normalize it, sort ascending by date, and write
/// the result as a pretty-printed JSON array (2-space indent, non-ASCII kept
/// literal) to `output`. Returns the sorted readings.
pub fn convert_csv_to_json<P, Q>(input: P, output: Q) -> Result<Vec<Reading>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output = output.as_ref();
    let mut readings = read_readings(input)?;
    readings.sort_by(|a, b| a.data.cmp(&b.data));

    let out_file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(out_file);
    serde_json::to_writer_pretty(&mut writer, &readings)
        .context("serializing readings to JSON")?;
    writer
        .flush()
        .with_context(|| format!("flushing {}", output.display()))?;

    info!("converted {} readings", readings.len());
    info!("output saved to {}", output.display());
    let seasons: BTreeSet<&str> = readings.iter().map(|r| r.stagione.as_str()).collect();
    info!(
        "seasons found: {}",
        seasons.into_iter().collect::<Vec<_>>().join(", ")
    );

    Ok(readings)
}
