//! Schedule snapshot writer.
//!
//! Emits the line-oriented JSON format consumed by [`crate::ScheduleReader`]:
//! header, one line per flight, footer with totals. Paths ending in `.br`
//! are Brotli-compressed (quality 6, balanced speed/ratio).

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use serde::Serialize;

use crate::model::Flight;
use crate::schedule_reader::SCHEDULE_FORMAT_VERSION;

pub struct ScheduleWriter {
    writer: Box<dyn Write>,
    flight_count: usize,
    event_count: usize,
}

impl ScheduleWriter {
    /// Creates a writer for `path`, compressing when the extension asks for it.
    pub fn new(path: &str) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("Failed to create file: {}", path))?;

        let writer: Box<dyn Write> = if path.ends_with(".br") {
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(ScheduleWriter {
            writer,
            flight_count: 0,
            event_count: 0,
        })
    }

    pub fn write_header(&mut self, airport: &str, date: &str, day_start_hour: i32) -> Result<()> {
        let header = serde_json::json!({
            "type": "header",
            "version": SCHEDULE_FORMAT_VERSION,
            "airport": airport,
            "date": date,
            "day_start_hour": day_start_hour,
        });
        self.write_line(&header)
    }

    pub fn write_flight(&mut self, flight: &Flight) -> Result<()> {
        let line = serde_json::json!({
            "type": "flight",
            "flight": flight,
        });
        self.write_line(&line)?;
        self.flight_count += 1;
        self.event_count += flight.events.len();
        Ok(())
    }

    pub fn write_footer(&mut self) -> Result<()> {
        let footer = serde_json::json!({
            "type": "footer",
            "total_flights": self.flight_count,
            "total_events": self.event_count,
        });
        self.write_line(&footer)
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).context("Failed to serialize to JSON")?;
        writeln!(self.writer, "{}", json).context("Failed to write line")?;
        Ok(())
    }

    /// Flushes buffered output. Also performed on drop, but calling this
    /// explicitly surfaces write errors.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }
}

impl Drop for ScheduleWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
