//! CSV adapters for fix records.
//!
//! Input and output share one format: `latitude,longitude,timestamp`, one
//! record per line, no header row. Reading validates every field and fails
//! with [`RouteCleanError::MalformedRecord`] instead of coercing bad fields
//! to zero, and returns the points stable-sorted by timestamp so the
//! classifier receives a chronological journey.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;

use crate::error::{Result, RouteCleanError};
use crate::GeoPoint;

/// Read fix records from a CSV stream, sorted by timestamp ascending.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<GeoPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    let mut record = csv::StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        // csv lines are 1-based; the record remembers where it was read
        let line = record.position().map_or(0, |p| p.line());
        let point: GeoPoint =
            record
                .deserialize(None)
                .map_err(|e| RouteCleanError::MalformedRecord {
                    line,
                    reason: match e.kind() {
                        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
                        _ => e.to_string(),
                    },
                })?;

        if !point.is_valid() {
            return Err(RouteCleanError::MalformedRecord {
                line,
                reason: format!(
                    "coordinates out of range: latitude {}, longitude {}",
                    point.latitude, point.longitude
                ),
            });
        }

        points.push(point);
    }

    // Stable: fixes sharing a timestamp keep their input order.
    points.sort_by_key(|p| p.timestamp);
    debug!("read {} fix records", points.len());

    Ok(points)
}

/// Read fix records from a CSV file, sorted by timestamp ascending.
pub fn read_points_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<GeoPoint>> {
    read_points(File::open(path)?)
}

/// Write fix records to a CSV stream in the input format.
pub fn write_points<W: Write>(writer: W, points: &[GeoPoint]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for point in points {
        csv_writer.serialize(point.to_triple())?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write fix records to a CSV file in the input format.
pub fn write_points_to_path<P: AsRef<Path>>(path: P, points: &[GeoPoint]) -> Result<()> {
    write_points(File::create(path)?, points)
}
