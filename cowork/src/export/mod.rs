//! Export of reservation listings to files.
//!
//! Three formats are supported, each with its own default file name:
//! a padded CSV table, an xlsx spreadsheet, and pretty-printed JSON.
//! Dates are written as `MM-DD-YYYY` in all of them.

mod json;
mod spreadsheet;
mod table;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reservation::{ReservationId, ReservationView};
use crate::schedule::format_date;

pub use json::JsonExporter;
pub use spreadsheet::{SpreadsheetExporter, SHEET_NAME, TITLE};
pub use table::{TableExporter, COLUMN_WIDTHS};

/// Default file name of the table export.
pub const DEFAULT_TABLE_FILE: &str = "Reservaciones.csv";

/// Default file name of the spreadsheet export.
pub const DEFAULT_SPREADSHEET_FILE: &str = "DatosReservaciones.xlsx";

/// Default file name of the JSON export.
pub const DEFAULT_JSON_FILE: &str = "ReservacionesJSON.json";

/// Writes reservation rows to a file.
pub trait Exporter {
    /// Writes `rows` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToExport`] if `rows` is empty, or an error if
    /// the file cannot be written.
    fn export(&self, rows: &[ReservationView], path: &Path) -> Result<()>;
}

/// Available export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Padded CSV table.
    Table,
    /// xlsx workbook.
    Spreadsheet,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    /// All formats, in menu order.
    pub const ALL: [Self; 3] = [Self::Table, Self::Spreadsheet, Self::Json];

    /// Creates an exporter for this format.
    #[must_use]
    pub fn create_exporter(self) -> Box<dyn Exporter> {
        match self {
            Self::Table => Box::new(TableExporter),
            Self::Spreadsheet => Box::new(SpreadsheetExporter),
            Self::Json => Box::new(JsonExporter),
        }
    }

    /// The file name used when none is configured.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Table => DEFAULT_TABLE_FILE,
            Self::Spreadsheet => DEFAULT_SPREADSHEET_FILE,
            Self::Json => DEFAULT_JSON_FILE,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Spreadsheet => "spreadsheet",
            Self::Json => "json",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "csv" => Ok(Self::Table),
            "spreadsheet" | "xlsx" | "excel" => Ok(Self::Spreadsheet),
            "json" => Ok(Self::Json),
            other => Err(Error::Validation {
                field: "format".into(),
                message: format!("unknown export format '{other}'"),
            }),
        }
    }
}

/// Where exports are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Directory that receives the files.
    pub directory: PathBuf,
    /// File name of the table export.
    pub table_file: String,
    /// File name of the spreadsheet export.
    pub spreadsheet_file: String,
    /// File name of the JSON export.
    pub json_file: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            table_file: DEFAULT_TABLE_FILE.to_string(),
            spreadsheet_file: DEFAULT_SPREADSHEET_FILE.to_string(),
            json_file: DEFAULT_JSON_FILE.to_string(),
        }
    }
}

impl ExportSettings {
    /// Default file names written into `directory`.
    #[must_use]
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// The full path the given format is written to.
    #[must_use]
    pub fn path_for(&self, format: ExportFormat) -> PathBuf {
        let name = match format {
            ExportFormat::Table => &self.table_file,
            ExportFormat::Spreadsheet => &self.spreadsheet_file,
            ExportFormat::Json => &self.json_file,
        };
        self.directory.join(name)
    }
}

/// One exported row, with display-ready values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Reservation identifier.
    pub id: ReservationId,
    /// Client full name.
    pub client: String,
    /// Room name.
    pub room: String,
    /// Event date as `MM-DD-YYYY`.
    pub date: String,
    /// Shift label.
    pub shift: String,
    /// Event name.
    pub event: String,
}

impl From<&ReservationView> for ExportRecord {
    fn from(view: &ReservationView) -> Self {
        Self {
            id: view.id,
            client: view.client_name.clone(),
            room: view.room_name.clone(),
            date: format_date(view.date),
            shift: view.shift.label().to_string(),
            event: view.event_name.clone(),
        }
    }
}

impl ExportRecord {
    /// The row's values in column order.
    #[must_use]
    pub fn fields(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.client.clone(),
            self.room.clone(),
            self.date.clone(),
            self.shift.clone(),
            self.event.clone(),
        ]
    }
}

pub(crate) fn ensure_rows(rows: &[ReservationView]) -> Result<()> {
    if rows.is_empty() {
        return Err(Error::NothingToExport);
    }
    Ok(())
}

/// Exports `rows` in `format` to the configured location.
///
/// The export directory is created if missing. Returns the written path.
///
/// # Errors
///
/// Returns [`Error::NothingToExport`] for an empty listing, or an error if
/// the directory or file cannot be written.
///
/// # Examples
///
/// ```
/// use cowork::export::{export_rows, ExportFormat, ExportSettings};
/// use cowork::Error;
///
/// let dir = tempfile::tempdir().unwrap();
/// let settings = ExportSettings::in_directory(dir.path());
///
/// let err = export_rows(ExportFormat::Json, &[], &settings).unwrap_err();
/// assert!(matches!(err, Error::NothingToExport));
/// ```
pub fn export_rows(
    format: ExportFormat,
    rows: &[ReservationView],
    settings: &ExportSettings,
) -> Result<PathBuf> {
    ensure_rows(rows)?;

    if !settings.directory.exists() {
        fs::create_dir_all(&settings.directory)?;
    }

    let path = settings.path_for(format);
    format.create_exporter().export(rows, &path)?;
    log::info!("exported {} reservation(s) to {}", rows.len(), path.display());
    Ok(path)
}
