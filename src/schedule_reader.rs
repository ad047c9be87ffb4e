//! Schedule snapshot reader.
//!
//! Reads a line-oriented JSON snapshot of one operational day: a header
//! line, one line per flight, and a trailing footer with totals. Files
//! ending in `.br` are transparently Brotli-decompressed.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use anyhow::{anyhow, Context, Result};
use brotli::Decompressor;
use serde::{Deserialize, Serialize};

use crate::model::{Flight, ScheduleData, ScheduleMetadata};

/// Snapshot format version understood by this reader.
pub const SCHEDULE_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleHeader {
    pub version: String,
    pub airport: String,
    pub date: String,
    pub day_start_hour: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleFooter {
    pub total_flights: Option<usize>,
    pub total_events: Option<usize>,
}

/// One line of the snapshot stream, dispatched on its `type` tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SnapshotLine {
    Header(ScheduleHeader),
    Flight { flight: Flight },
    Footer(ScheduleFooter),
}

/// Reads schedule snapshot files from disk.
pub struct ScheduleReader;

impl ScheduleReader {
    pub fn new() -> Self {
        ScheduleReader
    }

    /// Reads and validates a snapshot from `path`.
    ///
    /// The header must be the first line; flights may not precede it and the
    /// footer (when present) must be last. Malformed lines are reported with
    /// their line number.
    pub fn read(&self, path: &str) -> Result<ScheduleData> {
        let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;

        let reader: Box<dyn Read> = if path.ends_with(".br") {
            Box::new(Decompressor::new(file, 4096))
        } else {
            Box::new(file)
        };

        parse_schedule(BufReader::new(reader))
    }
}

impl Default for ScheduleReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a snapshot from any buffered reader.
///
/// Split from [`ScheduleReader::read`] so in-memory sources can be parsed
/// in tests without touching the filesystem.
pub fn parse_schedule<R: BufRead>(reader: R) -> Result<ScheduleData> {
    let mut header: Option<ScheduleHeader> = None;
    let mut footer: Option<ScheduleFooter> = None;
    let mut flights: Vec<Flight> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }
        if footer.is_some() {
            return Err(anyhow!("Unexpected content after footer at line {}", line_no));
        }

        let parsed: SnapshotLine = serde_json::from_str(&line)
            .with_context(|| format!("Malformed snapshot line {}", line_no))?;

        match parsed {
            SnapshotLine::Header(h) => {
                if header.is_some() {
                    return Err(anyhow!("Duplicate header at line {}", line_no));
                }
                header = Some(h);
            }
            SnapshotLine::Flight { flight } => {
                if header.is_none() {
                    return Err(anyhow!("Flight before header at line {}", line_no));
                }
                flights.push(flight);
            }
            SnapshotLine::Footer(f) => {
                footer = Some(f);
            }
        }
    }

    let header = header.ok_or_else(|| anyhow!("Snapshot has no header line"))?;

    if let Some(footer) = &footer {
        if let Some(expected) = footer.total_flights {
            if expected != flights.len() {
                return Err(anyhow!(
                    "Footer declares {} flights but {} were read",
                    expected,
                    flights.len()
                ));
            }
        }
    }

    Ok(ScheduleData {
        metadata: ScheduleMetadata {
            version: header.version,
            airport: header.airport,
            date: header.date,
            day_start_hour: header.day_start_hour,
        },
        flights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header_line() -> String {
        r#"{"type":"header","version":"1.0","airport":"CTU","date":"2026-02-05","day_start_hour":8}"#
            .to_string()
    }

    fn flight_line(id: &str) -> String {
        format!(
            r#"{{"type":"flight","flight":{{"id":"{}","flight_no":"CA1538","times":{{}},"events":[]}}}}"#,
            id
        )
    }

    #[test]
    fn test_parse_minimal_snapshot() {
        let input = format!(
            "{}\n{}\n{}\n",
            header_line(),
            flight_line("1"),
            r#"{"type":"footer","total_flights":1,"total_events":0}"#
        );
        let data = parse_schedule(Cursor::new(input)).unwrap();
        assert_eq!(data.metadata.airport, "CTU");
        assert_eq!(data.metadata.day_start_hour, 8);
        assert_eq!(data.flights.len(), 1);
        assert_eq!(data.flights[0].id, "1");
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let input = format!("{}\n", flight_line("1"));
        let err = parse_schedule(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("before header"));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let input = format!("{}\nnot json\n", header_line());
        let err = parse_schedule(Cursor::new(input)).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_footer_count_mismatch_is_an_error() {
        let input = format!(
            "{}\n{}\n{}\n",
            header_line(),
            flight_line("1"),
            r#"{"type":"footer","total_flights":3,"total_events":0}"#
        );
        let err = parse_schedule(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("declares 3 flights"));
    }

    #[test]
    fn test_footer_is_optional() {
        let input = format!("{}\n{}\n", header_line(), flight_line("7"));
        let data = parse_schedule(Cursor::new(input)).unwrap();
        assert_eq!(data.flights.len(), 1);
    }
}
