//! Enriched CSV export
//!
//! Writes the classified data set back out for download: the original
//! sample columns plus the assigned cooling mode, one row per input
//! reading in input order.
//!
//! ```csv
//! Timestamp,Temperature,Luminosity,Charge,Mode_Refroidissement
//! 2024-03-14 09:00:00,25.5,512,930,Pas de refroidissement
//! ```
//!
//! Output is UTF-8 and comma-separated with a header row. Missing
//! cells are written empty; numeric cells use the shortest form that
//! parses back to the same value, so a re-import reproduces the
//! original numbers. The mode column carries the French dashboard
//! label (see [`CoolingMode::label`](crate::CoolingMode::label)),
//! which downstream tooling groups on.

use std::io::{self, Write};

use log::debug;

use crate::classifier::Classifier;
use crate::reading::{Classification, Reading};
use crate::time::Timestamp;

/// Header row of the enriched export
pub const EXPORT_HEADER: &str = "Timestamp,Temperature,Luminosity,Charge,Mode_Refroidissement";

fn write_timestamp<W: Write>(out: &mut W, timestamp: Option<Timestamp>) -> io::Result<()> {
    if let Some(ms) = timestamp {
        if let Some(dt) = chrono::DateTime::from_timestamp_millis(ms as i64) {
            return write!(out, "{}", dt.format("%Y-%m-%d %H:%M:%S"));
        }
    }
    Ok(())
}

fn write_number<W: Write>(out: &mut W, value: Option<f32>) -> io::Result<()> {
    if let Some(v) = value {
        write!(out, "{}", v)?;
    }
    Ok(())
}

/// Write the enriched table to any writer
///
/// Returns the number of data rows written.
pub fn write_enriched_csv<'a, W, I>(mut out: W, rows: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = (&'a Reading, Classification)>,
{
    writeln!(out, "{}", EXPORT_HEADER)?;

    let mut written = 0;
    for (reading, classification) in rows {
        write_timestamp(&mut out, reading.timestamp)?;
        write!(out, ",")?;
        write_number(&mut out, reading.temperature)?;
        write!(out, ",")?;
        write_number(&mut out, reading.luminosity)?;
        write!(out, ",")?;
        write_number(&mut out, reading.charge)?;
        writeln!(out, ",{}", classification.mode.label())?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}

/// Classify a reading set and export it to a file
pub fn export_to_path(
    path: &str,
    readings: &[Reading],
    classifier: &Classifier,
) -> io::Result<usize> {
    let file = std::fs::File::create(path)?;
    let written = write_enriched_csv(io::BufWriter::new(file), classifier.annotate(readings))?;
    debug!("exported {} rows to {}", written, path);
    Ok(written)
}
