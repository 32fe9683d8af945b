//! CSV file streaming for logger data
//!
//! Reads the monitoring station's data table: a header row, then one
//! row per sample
//!
//! ```csv
//! Timestamp,Temperature,Humidity,Luminosity,Charge
//! 2024-03-14 09:00:00,25.5,40.2,512,930
//! ```
//!
//! Columns are located by header name (case-insensitive), so column
//! order does not matter, unknown columns are ignored, and a file
//! missing a column simply yields that field as missing on every row.
//! This is what lets an enriched export - which drops Humidity and
//! appends the mode column - be re-read as a plain data table.
//!
//! ## Coercion, Not Rejection
//!
//! The logger writes whatever came over the serial link, so individual
//! cells are routinely garbage. A cell that fails to parse becomes a
//! missing value and the row is kept; only transport problems and
//! oversized lines surface as stream errors. The per-file coercion
//! count is tracked in [`CsvStreamStats`] for the operator.
//!
//! ## Timestamps
//!
//! Accepted forms, tried in order: `%Y-%m-%d %H:%M:%S` with optional
//! fractional seconds, the ISO-8601 `T` variant, and raw milliseconds
//! since the Unix epoch.
//!
//! ## Memory
//!
//! Data is read in 4KB chunks and assembled into a fixed-capacity line
//! buffer, so memory use is independent of file size.

use std::fs::File;
use std::io::Read;
use std::vec::Vec;

use log::{debug, warn};

use crate::reading::Reading;
use crate::time::Timestamp;

use super::{Stream, StreamError};

/// Maximum length of one data row
const MAX_LINE: usize = 256;

/// Maximum columns considered per row
const MAX_COLUMNS: usize = 16;

/// Timestamp formats accepted in the timestamp column
///
/// `%.f` also matches the no-fraction case, so these two cover the
/// plain and ISO-8601 spellings with or without fractional seconds.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Where each reading field lives in a data row
///
/// Built from the header row when present; defaults to the canonical
/// logger column order.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    timestamp: Option<usize>,
    temperature: Option<usize>,
    humidity: Option<usize>,
    luminosity: Option<usize>,
    charge: Option<usize>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        // Canonical order: Timestamp,Temperature,Humidity,Luminosity,Charge
        Self {
            timestamp: Some(0),
            temperature: Some(1),
            humidity: Some(2),
            luminosity: Some(3),
            charge: Some(4),
        }
    }
}

impl ColumnMap {
    fn from_header(line: &str) -> Self {
        let mut map = Self {
            timestamp: None,
            temperature: None,
            humidity: None,
            luminosity: None,
            charge: None,
        };

        for (idx, name) in line.split(',').take(MAX_COLUMNS).enumerate() {
            let name = name.trim().trim_matches('"');
            if name.eq_ignore_ascii_case("timestamp") {
                map.timestamp = Some(idx);
            } else if name.eq_ignore_ascii_case("temperature") {
                map.temperature = Some(idx);
            } else if name.eq_ignore_ascii_case("humidity") {
                map.humidity = Some(idx);
            } else if name.eq_ignore_ascii_case("luminosity") {
                map.luminosity = Some(idx);
            } else if name.eq_ignore_ascii_case("charge") {
                map.charge = Some(idx);
            }
        }

        map
    }
}

/// Statistics for CSV streaming
#[derive(Debug, Default, Clone)]
pub struct CsvStreamStats {
    /// Readings produced
    pub rows_read: usize,
    /// Total lines processed (including header, blanks, comments)
    pub lines_processed: usize,
    /// Cells that failed to parse and were coerced to missing
    pub cells_coerced: usize,
    /// Bytes read from the file
    pub bytes_read: usize,
}

/// CSV file reading stream
///
/// ## Example
///
/// ```rust,no_run
/// use coolwatch_core::stream::{CsvStream, Stream};
///
/// let mut stream = CsvStream::open("arduino_data.csv")?
///     .with_header_row(); // Map columns from the header
///
/// while let Ok(reading) = stream.poll_next() {
///     // Process reading
/// }
/// # Ok::<(), coolwatch_core::stream::StreamError<std::io::Error>>(())
/// ```
pub struct CsvStream {
    /// File handle
    file: File,
    /// Read buffer
    buffer: [u8; 4096],
    /// Current position in buffer
    buffer_pos: usize,
    /// Valid bytes in buffer
    buffer_len: usize,
    /// Line assembly buffer
    line_buffer: heapless::String<MAX_LINE>,
    /// Whether we've reached EOF
    eof: bool,
    /// Skip first N lines unconditionally
    skip_lines: usize,
    /// Lines already skipped
    lines_skipped: usize,
    /// Column layout of data rows
    columns: ColumnMap,
    /// Consume the next content line as a header
    header_pending: bool,
    /// Statistics
    stats: CsvStreamStats,
}

impl CsvStream {
    /// Open a CSV file for streaming
    ///
    /// Assumes the canonical column order and no header; see
    /// [`with_header_row`](Self::with_header_row) for header-mapped
    /// files.
    pub fn open(path: &str) -> Result<Self, StreamError<std::io::Error>> {
        let file = File::open(path).map_err(StreamError::Transport)?;

        Ok(Self {
            file,
            buffer: [0; 4096],
            buffer_pos: 0,
            buffer_len: 0,
            line_buffer: heapless::String::new(),
            eof: false,
            skip_lines: 0,
            lines_skipped: 0,
            columns: ColumnMap::default(),
            header_pending: false,
            stats: CsvStreamStats::default(),
        })
    }

    /// Map columns from the first content line
    pub fn with_header_row(mut self) -> Self {
        self.header_pending = true;
        self
    }

    /// Skip first N lines unconditionally (before any header)
    pub fn with_skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    /// Get statistics
    pub fn stats(&self) -> &CsvStreamStats {
        &self.stats
    }

    /// Refill buffer from file
    fn refill_buffer(&mut self) -> Result<bool, StreamError<std::io::Error>> {
        if self.eof {
            return Ok(false);
        }

        // Move remaining data to beginning
        if self.buffer_pos < self.buffer_len {
            let remaining = self.buffer_len - self.buffer_pos;
            self.buffer.copy_within(self.buffer_pos..self.buffer_len, 0);
            self.buffer_len = remaining;
            self.buffer_pos = 0;
        } else {
            self.buffer_len = 0;
            self.buffer_pos = 0;
        }

        let bytes_read = self
            .file
            .read(&mut self.buffer[self.buffer_len..])
            .map_err(StreamError::Transport)?;

        if bytes_read == 0 {
            self.eof = true;
            return Ok(self.buffer_len > 0);
        }

        self.buffer_len += bytes_read;
        self.stats.bytes_read += bytes_read;
        Ok(true)
    }

    /// Assemble the next line into `line_buffer`
    ///
    /// Returns false at end of file. Lines configured via
    /// `with_skip_lines` are consumed here.
    fn next_line(&mut self) -> Result<bool, StreamError<std::io::Error>> {
        self.line_buffer.clear();

        loop {
            while self.buffer_pos < self.buffer_len {
                let byte = self.buffer[self.buffer_pos];
                self.buffer_pos += 1;

                if byte == b'\n' {
                    self.stats.lines_processed += 1;

                    if self.lines_skipped < self.skip_lines {
                        self.lines_skipped += 1;
                        self.line_buffer.clear();
                        continue;
                    }

                    return Ok(true);
                } else if byte != b'\r' {
                    if self.line_buffer.push(byte as char).is_err() {
                        return Err(StreamError::Overflow);
                    }
                }
            }

            if !self.refill_buffer()? {
                // Final line without trailing newline
                if !self.line_buffer.is_empty() && self.lines_skipped >= self.skip_lines {
                    self.stats.lines_processed += 1;
                    return Ok(true);
                }
                return Ok(false);
            }
        }
    }

    /// Parse one numeric cell, coercing failures to missing
    fn parse_number(&mut self, field: Option<&str>) -> Option<f32> {
        let raw = field?.trim().trim_matches('"');
        if raw.is_empty() {
            return None;
        }

        match raw.parse::<f32>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                self.stats.cells_coerced += 1;
                debug!("coerced numeric cell {:?} to missing", raw);
                None
            }
        }
    }

    /// Parse the timestamp cell, coercing failures to missing
    fn parse_timestamp(&mut self, field: Option<&str>) -> Option<Timestamp> {
        let raw = match field {
            Some(f) => f.trim().trim_matches('"'),
            None => return None,
        };
        if raw.is_empty() {
            return None;
        }

        for format in TIMESTAMP_FORMATS {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, format) {
                return u64::try_from(dt.and_utc().timestamp_millis()).ok();
            }
        }

        // Raw epoch milliseconds, as written by loggers without an RTC
        if let Ok(ms) = raw.parse::<u64>() {
            return Some(ms);
        }

        self.stats.cells_coerced += 1;
        debug!("coerced timestamp cell {:?} to missing", raw);
        None
    }

    /// Parse one data row
    ///
    /// Total over any input line: missing or garbage cells come back as
    /// `None`, columns beyond [`MAX_COLUMNS`] are ignored.
    fn parse_row(&mut self, line: &str) -> Reading {
        let fields: heapless::Vec<&str, MAX_COLUMNS> =
            line.split(',').take(MAX_COLUMNS).collect();
        let cell = |idx: Option<usize>| idx.and_then(|i| fields.get(i).copied());
        let columns = self.columns;

        Reading {
            timestamp: self.parse_timestamp(cell(columns.timestamp)),
            temperature: self.parse_number(cell(columns.temperature)),
            humidity: self.parse_number(cell(columns.humidity)),
            luminosity: self.parse_number(cell(columns.luminosity)),
            charge: self.parse_number(cell(columns.charge)),
        }
    }
}

impl Stream for CsvStream {
    type Item = Reading;
    type Error = StreamError<std::io::Error>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        loop {
            if !self.next_line()? {
                return Err(nb::Error::Other(StreamError::EndOfStream));
            }

            // Copy out of the assembly buffer so parsing can update stats
            let line: heapless::String<MAX_LINE> = self.line_buffer.clone();
            let trimmed = line.trim();

            // Skip blank lines and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if self.header_pending {
                self.columns = ColumnMap::from_header(trimmed);
                self.header_pending = false;
                continue;
            }

            let reading = self.parse_row(trimmed);
            self.stats.rows_read += 1;
            return Ok(reading);
        }
    }
}

/// Load a whole data table into memory
///
/// Maps columns from the header row, reads every data row (coercing
/// bad cells to missing), and returns the readings in file order - the
/// one-shot parse the dashboard performs at startup.
pub fn load_readings(path: &str) -> Result<Vec<Reading>, StreamError<std::io::Error>> {
    let mut stream = CsvStream::open(path)?.with_header_row();
    let mut readings = Vec::new();

    loop {
        match stream.poll_next() {
            Ok(reading) => readings.push(reading),
            Err(nb::Error::WouldBlock) => continue,
            Err(nb::Error::Other(StreamError::EndOfStream)) => break,
            Err(nb::Error::Other(e)) => return Err(e),
        }
    }

    let stats = stream.stats();
    if stats.cells_coerced > 0 {
        warn!(
            "{} rows loaded with {} unparseable cells coerced to missing",
            stats.rows_read, stats.cells_coerced
        );
    }

    Ok(readings)
}
