//! List command implementation.
//!
//! This module implements the `list` command, which shows the Active
//! reservations in a date range on stdout (table, JSON or CSV) and can
//! also write them to the export files.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use cowork::export::{export_rows, ExportFormat, ExportRecord, JsonExporter};
use cowork::operations::ReservationQuery;
use cowork::ReservationView;

use crate::error::CliError;
use crate::render::write_reservations;
use crate::utils::{date_range, load_configuration, open_store, parse_date_arg, GlobalOptions};

/// List reservations in a date range.
#[derive(Args)]
pub struct ListCommand {
    /// First day of the range (MM-DD-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub from: NaiveDate,

    /// Last day of the range (MM-DD-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub to: NaiveDate,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "COWORK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Also write an export file: table, spreadsheet or json (repeatable)
    #[arg(long, value_name = "FORMAT", value_parser = parse_export_format)]
    pub export: Vec<ExportFormat>,

    /// Write export files to this directory instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub export_dir: Option<PathBuf>,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array
    Json,
    /// CSV with a header row
    Csv,
}

fn parse_export_format(s: &str) -> Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let range = date_range(self.from, self.to)?;
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let query = ReservationQuery::new(range);
        let rows = store.with_database(|db| query.run(db.connection()))?;

        if rows.is_empty() && !global.quiet {
            eprintln!("No reservations found from {range}");
        }
        if global.verbose {
            eprintln!(
                "{} reservation(s) across {} day(s) from {range}",
                rows.len(),
                range.days()
            );
        }

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Table => {
                if !rows.is_empty() {
                    write_reservations(&mut handle, "RESERVATIONS FOUND", &rows)?;
                }
            }
            OutputFormat::Json => JsonExporter.write(&rows, &mut handle)?,
            OutputFormat::Csv => format_as_csv(&rows, &mut handle)?,
        }
        drop(handle);

        if self.export.is_empty() {
            return Ok(());
        }

        let mut settings = config.export_settings();
        if let Some(dir) = self.export_dir {
            settings.directory = dir;
        }
        for format in self.export {
            let path = export_rows(format, &rows, &settings)?;
            if !global.quiet {
                eprintln!("Exported {format} to {}", path.display());
            }
        }

        Ok(())
    }
}

/// Writes rows as plain CSV, one header row then one row per reservation.
fn format_as_csv<W: Write>(rows: &[ReservationView], writer: W) -> Result<(), CliError> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(ExportRecord::from(row))
            .map_err(|e| CliError::Library(e.into()))?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cowork::{ReservationId, Shift};

    #[test]
    fn test_csv_has_header_and_display_dates() {
        let rows = vec![ReservationView {
            id: ReservationId::new(4),
            client_name: "Ana Ruiz".into(),
            room_name: "Sala A".into(),
            date: NaiveDate::from_ymd_opt(2030, 1, 7).unwrap(),
            shift: Shift::Morning,
            event_name: "Taller".into(),
        }];
        let mut out = Vec::new();
        format_as_csv(&rows, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "id,client,room,date,shift,event\n4,Ana Ruiz,Sala A,01-07-2030,Morning,Taller\n"
        );
    }

    #[test]
    fn test_export_format_aliases() {
        assert_eq!(parse_export_format("xlsx").unwrap(), ExportFormat::Spreadsheet);
        assert_eq!(parse_export_format("CSV").unwrap(), ExportFormat::Table);
        assert!(parse_export_format("pdf").is_err());
    }
}
