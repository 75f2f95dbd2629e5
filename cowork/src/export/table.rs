//! Padded CSV table export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::reservation::ReservationView;

use super::{ensure_rows, ExportRecord, Exporter};

/// Column widths: id, client, room, date, shift, event.
pub const COLUMN_WIDTHS: [usize; 6] = [7, 30, 20, 12, 10, 25];

const HEADERS: [&str; 6] = ["Clave", "Cliente", "Sala", "Fecha", "Turno", "Evento"];

/// Writes a CSV whose fields are padded to fixed widths, so the file also
/// reads as an aligned table.
///
/// The first row holds the headers and the second a dashed rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableExporter;

impl TableExporter {
    /// Writes the table to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be written.
    pub fn write<W: Write>(&self, rows: &[ReservationView], writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(padded(HEADERS.map(String::from)))?;
        csv.write_record(COLUMN_WIDTHS.map(|width| "-".repeat(width)))?;
        for row in rows {
            csv.write_record(padded(ExportRecord::from(row).fields()))?;
        }

        csv.flush()?;
        Ok(())
    }
}

impl Exporter for TableExporter {
    fn export(&self, rows: &[ReservationView], path: &Path) -> Result<()> {
        ensure_rows(rows)?;
        self.write(rows, File::create(path)?)
    }
}

fn padded(fields: [String; 6]) -> Vec<String> {
    fields
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(field, width)| format!("{field:<width$}"))
        .collect()
}
