//! JSON export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::reservation::ReservationView;

use super::{ensure_rows, ExportRecord, Exporter};

/// Writes a pretty-printed array of [`ExportRecord`] objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl JsonExporter {
    /// Writes the array to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W: Write>(&self, rows: &[ReservationView], mut writer: W) -> Result<()> {
        let records: Vec<ExportRecord> = rows.iter().map(ExportRecord::from).collect();
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl Exporter for JsonExporter {
    fn export(&self, rows: &[ReservationView], path: &Path) -> Result<()> {
        ensure_rows(rows)?;
        self.write(rows, BufWriter::new(File::create(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_rows;

    #[test]
    fn test_field_names() {
        let mut out = Vec::new();
        JsonExporter.write(&test_rows::sample(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let first = &value[0];
        assert_eq!(first["id"], 1);
        assert_eq!(first["client"], "Ana Ruiz");
        assert_eq!(first["room"], "Sala A");
        assert_eq!(first["date"], "01-07-2030");
        assert_eq!(first["shift"], "Morning");
        assert_eq!(first["event"], "Taller");
    }

    #[test]
    fn test_file_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("ReservacionesJSON.json");
        let rows = test_rows::sample();
        JsonExporter.export(&rows, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let records: Vec<ExportRecord> = serde_json::from_str(&text).unwrap();
        let expected: Vec<ExportRecord> = rows.iter().map(ExportRecord::from).collect();
        assert_eq!(records, expected);
    }
}
