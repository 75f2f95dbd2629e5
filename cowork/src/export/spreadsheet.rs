//! xlsx report export.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};

use crate::error::Result;
use crate::reservation::ReservationView;

use super::{ensure_rows, ExportRecord, Exporter};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Reservaciones";

/// Title written across the first row.
pub const TITLE: &str = "REPORTE DE RESERVACIONES";

const HEADERS: [&str; 6] = ["Clave Reservacion", "Cliente", "Sala", "Fecha", "Turno", "Evento"];

// Zero-based rows: title on row 1, headers on row 3, data from row 4
const TITLE_ROW: u32 = 0;
const HEADER_ROW: u32 = 2;
const FIRST_DATA_ROW: u32 = 3;
const LAST_COLUMN: u16 = 5;

/// Writes a one-sheet workbook with a merged title, a bordered header row
/// and one row per reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetExporter;

impl Exporter for SpreadsheetExporter {
    fn export(&self, rows: &[ReservationView], path: &Path) -> Result<()> {
        ensure_rows(rows)?;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        let title = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_align(FormatAlign::Center);
        sheet.merge_range(TITLE_ROW, 0, TITLE_ROW, LAST_COLUMN, TITLE, &title)?;

        let header = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_border_bottom(FormatBorder::Thick);
        for (col, text) in (0u16..).zip(HEADERS) {
            sheet.write_string_with_format(HEADER_ROW, col, text, &header)?;
        }

        let centered = Format::new().set_align(FormatAlign::Center);
        for (row, view) in (FIRST_DATA_ROW..).zip(rows) {
            let record = ExportRecord::from(view);
            #[allow(clippy::cast_precision_loss)]
            let id = record.id.value() as f64;
            sheet.write_number_with_format(row, 0, id, &centered)?;
            for (col, text) in (1u16..).zip(&record.fields()[1..]) {
                sheet.write_string_with_format(row, col, text, &centered)?;
            }
        }

        sheet.autofit();
        workbook.save(path)?;
        Ok(())
    }
}
