use crate::models::{Cell, Dataset};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read a CSV with a header row. Empty fields become `Missing`, finite
/// numbers `Number`, everything else `Text`.
pub fn read_csv<R: Read>(rdr: R) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(rdr);
    let headers = rdr.headers().context("read csv header")?.clone();
    let mut ds = Dataset::new(headers.iter());
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("read csv record {}", i + 1))?;
        ds.push_row(rec.iter().map(Cell::parse).collect())
            .with_context(|| format!("csv record {}", i + 1))?;
    }
    debug!("read_csv: {} columns, {} rows", ds.columns().len(), ds.len());
    Ok(ds)
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_csv(f)
}

/// Text that a spreadsheet would evaluate as a formula gets a leading `'`.
fn csv_safe(s: &str) -> String {
    if s.starts_with(['=', '+', '-', '@']) {
        format!("'{s}")
    } else {
        s.to_string()
    }
}

/// Write observations as CSV with header.
pub fn write_csv<W: Write>(ds: &Dataset, w: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(w);
    wtr.write_record(ds.columns())?;
    for row in ds.rows() {
        wtr.write_record(row.iter().map(|c| match c {
            Cell::Text(s) => csv_safe(s),
            other => other.to_string(),
        }))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_csv<P: AsRef<Path>>(ds: &Dataset, path: P) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv(ds, f)
}

/// Save rows as a pretty JSON array of objects.
pub fn save_json<P: AsRef<Path>>(ds: &Dataset, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(ds)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
