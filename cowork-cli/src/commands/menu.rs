//! Menu command implementation.
//!
//! This module implements the interactive menu, which is also what runs
//! when `cowork` is started without a subcommand. Each option walks the
//! operator through the fields of one operation, re-asking any field that
//! fails validation. An operation error is reported and the menu resumes.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use clap::Args;
use cowork::export::{export_rows, ExportFormat, ExportSettings};
use cowork::operations::{
    CancelOptions, CancelPlan, CreateOptions, CreatePlan, RegisterClientOptions, RegisterPlan,
    RegisterRoomOptions, RenameOptions, RenamePlan, ReservationQuery,
};
use cowork::registry::{parse_capacity, validate_letters};
use cowork::reservation::ValidationError;
use cowork::schedule::availability::{AvailabilityChecker, StoreAvailability};
use cowork::schedule::policy::DateDecision;
use cowork::schedule::{format_date, parse_date};
use cowork::{
    BookingPolicy, ClientId, Database, DateRange, Error, EventName, ReservationId,
    ReservationView, RoomId, Shift, Slot, Store,
};

use crate::error::CliError;
use crate::prompt::Prompter;
use crate::render::{write_clients, write_reservations, write_rooms, write_shifts};
use crate::utils::{load_configuration, open_store, run_plan, GlobalOptions};

/// Run the interactive menu.
#[derive(Args)]
pub struct MenuCommand {}

impl MenuCommand {
    /// Execute the menu command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let stdin = io::stdin();
        let prompter = Prompter::new(stdin.lock(), io::stdout(), config.max_empty_inputs());
        let mut menu = Menu::new(
            prompter,
            store,
            config.booking_policy(),
            config.export_settings(),
        );
        menu.run()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Create,
    Rename,
    Query,
    RegisterClient,
    RegisterRoom,
    Cancel,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Create),
            "2" => Ok(Self::Rename),
            "3" => Ok(Self::Query),
            "4" => Ok(Self::RegisterClient),
            "5" => Ok(Self::RegisterRoom),
            "6" => Ok(Self::Cancel),
            "7" => Ok(Self::Exit),
            _ => Err("Choose an option from 1 to 7.".to_string()),
        }
    }
}

/// The interactive menu over one store.
pub struct Menu<R, W> {
    prompter: Prompter<R, W>,
    store: Store,
    policy: BookingPolicy,
    export: ExportSettings,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu reading answers through `prompter`.
    pub fn new(
        prompter: Prompter<R, W>,
        store: Store,
        policy: BookingPolicy,
        export: ExportSettings,
    ) -> Self {
        Self {
            prompter,
            store,
            policy,
            export,
        }
    }

    /// Shows the menu until the operator exits or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.show_options()?;
            let Some(line) = self.prompter.read_line()? else {
                writeln!(self.out())?;
                return Ok(());
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(message) => {
                    writeln!(self.out(), "{message}")?;
                    continue;
                }
            };

            let outcome = match choice {
                MenuChoice::Create => self.create_reservation(),
                MenuChoice::Rename => self.rename_reservation(),
                MenuChoice::Query => self.query_reservations(),
                MenuChoice::RegisterClient => self.register_client(),
                MenuChoice::RegisterRoom => self.register_room(),
                MenuChoice::Cancel => self.cancel_reservation(),
                MenuChoice::Exit => {
                    if self.prompter.confirm("Do you want to exit?")? == Some(true) {
                        writeln!(self.out(), "Goodbye.")?;
                        return Ok(());
                    }
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                log::debug!("menu operation failed: {e}");
                writeln!(self.out(), "Error: {e}")?;
            }
        }
    }

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }

    fn show_options(&mut self) -> io::Result<()> {
        let out = self.out();
        writeln!(out)?;
        writeln!(out, "MAIN MENU")?;
        writeln!(out, "1. Create a reservation")?;
        writeln!(out, "2. Edit the event name of a reservation")?;
        writeln!(out, "3. Query reservations")?;
        writeln!(out, "4. Register a client")?;
        writeln!(out, "5. Register a room")?;
        writeln!(out, "6. Cancel a reservation")?;
        writeln!(out, "7. Exit")?;
        write!(out, "Option: ")?;
        out.flush()
    }

    fn create_reservation(&mut self) -> Result<(), CliError> {
        let (clients, rooms) = self.store.with_database(|db| {
            Ok((
                Database::list_clients(db.connection())?,
                Database::list_rooms(db.connection())?,
            ))
        })?;
        if clients.is_empty() {
            writeln!(self.out(), "No clients registered yet. Register a client first.")?;
            return Ok(());
        }
        if rooms.is_empty() {
            writeln!(self.out(), "No rooms registered yet. Register a room first.")?;
            return Ok(());
        }

        write_clients(self.out(), &clients)?;
        let client_ids: Vec<ClientId> = clients.iter().map(|c| c.id).collect();
        let Some(client) = self.prompter.ask("Client ID", |s| known_id(s, &client_ids))? else {
            return Ok(());
        };

        write_rooms(self.out(), &rooms)?;
        let room_ids: Vec<RoomId> = rooms.iter().map(|r| r.id).collect();
        let Some(room) = self.prompter.ask("Room ID", |s| known_id(s, &room_ids))? else {
            return Ok(());
        };

        let today = Local::now().date_naive();
        let Some((requested, booked, accept)) = self.ask_event_date(today)? else {
            return Ok(());
        };

        let mut event_name: Option<String> = None;
        loop {
            let Some(shift) = self.ask_free_shift(room, booked)? else {
                return Ok(());
            };
            let name = match event_name.take() {
                Some(name) => name,
                None => match self.prompter.ask("Event name", parse_event_name)? {
                    Some(name) => name,
                    None => return Ok(()),
                },
            };

            let options = CreateOptions::new(client, room, requested, shift, name.clone())
                .with_accept_substitute(accept)
                .with_today(today);
            let planner = CreatePlan::new(options, self.policy);
            match run_plan(&self.store, false, |db| planner.build_plan(db.connection())) {
                Ok(result) => {
                    if let Some(id) = result.reservation_id() {
                        writeln!(self.out(), "Reservation {id} registered.")?;
                    }
                    return Ok(());
                }
                Err(CliError::Library(Error::SlotOccupied { slot })) => {
                    writeln!(self.out(), "{slot} was just booked; choose another shift.")?;
                    event_name = Some(name);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Asks for a date until one passes the booking rules.
    ///
    /// Returns the requested date, the date that will be booked, and whether
    /// the closed-weekday substitute was accepted.
    fn ask_event_date(
        &mut self,
        today: NaiveDate,
    ) -> Result<Option<(NaiveDate, NaiveDate, bool)>, CliError> {
        loop {
            let Some(date) = self.prompter.ask("Event date (MM-DD-YYYY)", parse_date_answer)?
            else {
                return Ok(None);
            };

            match self.policy.check_event_date(date, today) {
                Ok(DateDecision::Accepted(date)) => return Ok(Some((date, date, false))),
                Ok(DateDecision::Substitute {
                    requested,
                    proposed,
                }) => {
                    writeln!(
                        self.out(),
                        "There are no reservations on {}s. The next day, {}, is available.",
                        requested.format("%A"),
                        format_date(proposed)
                    )?;
                    match self.prompter.confirm("Book that day instead?")? {
                        Some(true) => return Ok(Some((requested, proposed, true))),
                        Some(false) => writeln!(self.out(), "Enter another date.")?,
                        None => return Ok(None),
                    }
                }
                Err(e @ Error::InsufficientNotice { .. }) => writeln!(self.out(), "{e}")?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Shows the free shifts of `room` on `date` and asks for one of them.
    fn ask_free_shift(&mut self, room: RoomId, date: NaiveDate) -> Result<Option<Shift>, CliError> {
        let slots: Vec<Slot> = Shift::ALL
            .into_iter()
            .map(|shift| Slot::new(room, date, shift))
            .collect();
        let free = self
            .store
            .with_database(|db| StoreAvailability::new(db.connection()).free_slots(&slots))?;
        if free.is_empty() {
            writeln!(
                self.out(),
                "Room {room} has no free shift on {}.",
                format_date(date)
            )?;
            return Ok(None);
        }
        let free_shifts: Vec<Shift> = free.iter().map(|slot| slot.shift).collect();
        write_shifts(self.out(), &free_shifts)?;

        loop {
            let Some(shift) = self.prompter.ask("Shift", parse_shift_answer)? else {
                return Ok(None);
            };
            let slot = Slot::new(room, date, shift);
            let occupied = self
                .store
                .with_database(|db| StoreAvailability::new(db.connection()).is_occupied(&slot))?;
            if !occupied {
                return Ok(Some(shift));
            }
            writeln!(self.out(), "{slot} is already booked; choose another shift.")?;
        }
    }

    fn ask_range(&mut self) -> io::Result<Option<DateRange>> {
        let Some(start) = self.prompter.ask("Start date (MM-DD-YYYY)", parse_date_answer)? else {
            return Ok(None);
        };
        self.prompter.ask("End date (MM-DD-YYYY)", |s| {
            let end = parse_date_answer(s)?;
            DateRange::new(start, end).map_err(|e| e.to_string())
        })
    }

    /// Asks for a range and shows its Active reservations.
    ///
    /// Returns `None` if the operator gave up or nothing was found.
    fn select_range(
        &mut self,
        title: &str,
    ) -> Result<Option<(DateRange, Vec<ReservationView>)>, CliError> {
        let Some(range) = self.ask_range()? else {
            return Ok(None);
        };
        let query = ReservationQuery::new(range);
        let rows = self.store.with_database(|db| query.run(db.connection()))?;
        if rows.is_empty() {
            writeln!(self.out(), "No reservations found from {range}.")?;
            return Ok(None);
        }
        write_reservations(self.out(), title, &rows)?;
        Ok(Some((range, rows)))
    }

    fn rename_reservation(&mut self) -> Result<(), CliError> {
        let Some((range, rows)) = self.select_range("RESERVATIONS FOUND")? else {
            return Ok(());
        };
        let ids: Vec<ReservationId> = rows.iter().map(|r| r.id).collect();
        let Some(id) = self.prompter.ask("Reservation ID", |s| known_id(s, &ids))? else {
            return Ok(());
        };
        let Some(name) = self.prompter.ask("New event name", parse_event_name)? else {
            return Ok(());
        };

        let planner = RenamePlan::new(RenameOptions::new(range, id, name));
        run_plan(&self.store, false, |db| planner.build_plan(db.connection()))?;
        writeln!(self.out(), "Event name of reservation {id} updated.")?;
        Ok(())
    }

    fn query_reservations(&mut self) -> Result<(), CliError> {
        let Some((_, rows)) = self.select_range("RESERVATIONS FOUND")? else {
            return Ok(());
        };
        if self.prompter.confirm("Export these reservations?")? != Some(true) {
            return Ok(());
        }
        let Some(formats) = self
            .prompter
            .ask("Format (table/spreadsheet/json/all)", parse_export_choice)?
        else {
            return Ok(());
        };

        for format in formats {
            let path = export_rows(format, &rows, &self.export)?;
            writeln!(self.out(), "Exported {format} to {}", path.display())?;
        }
        Ok(())
    }

    fn register_client(&mut self) -> Result<(), CliError> {
        let Some(first) = self
            .prompter
            .ask("First name", |s| letters("first name", s))?
        else {
            return Ok(());
        };
        let Some(last) = self.prompter.ask("Last name", |s| letters("last name", s))? else {
            return Ok(());
        };

        let plan = RegisterPlan::client(RegisterClientOptions::new(first, last));
        let result = run_plan(&self.store, false, |_| plan.build_plan())?;
        if let Some(id) = result.client_id() {
            writeln!(self.out(), "Client {id} registered.")?;
        }
        Ok(())
    }

    fn register_room(&mut self) -> Result<(), CliError> {
        let Some(name) = self.prompter.ask("Room name", |s| letters("name", s))? else {
            return Ok(());
        };
        let Some(capacity) = self
            .prompter
            .ask("Capacity", |s| parse_capacity(s).map_err(|e| e.to_string()))?
        else {
            return Ok(());
        };

        let plan = RegisterPlan::room(RegisterRoomOptions::new(name, i64::from(capacity)));
        let result = run_plan(&self.store, false, |_| plan.build_plan())?;
        if let Some(id) = result.room_id() {
            writeln!(self.out(), "Room {id} registered.")?;
        }
        Ok(())
    }

    fn cancel_reservation(&mut self) -> Result<(), CliError> {
        let Some((range, rows)) = self.select_range("RESERVATIONS THAT CAN BE CANCELLED")? else {
            return Ok(());
        };
        let ids: Vec<ReservationId> = rows.iter().map(|r| r.id).collect();
        let Some(id) = self.prompter.ask("Reservation ID", |s| known_id(s, &ids))? else {
            return Ok(());
        };
        let Some(date) = rows.iter().find(|r| r.id == id).map(|r| r.date) else {
            return Ok(());
        };

        let today = Local::now().date_naive();
        if let Err(e) = self.policy.check_cancellation(id, date, today) {
            writeln!(self.out(), "{e}")?;
            return Ok(());
        }

        let question = format!(
            "Cancel reservation {id} on {}? This cannot be undone.",
            format_date(date)
        );
        if self.prompter.confirm(&question)? != Some(true) {
            writeln!(self.out(), "Cancellation aborted.")?;
            return Ok(());
        }

        let options = CancelOptions::new(range, id)
            .with_confirmed(true)
            .with_today(today);
        let planner = CancelPlan::new(options, self.policy);
        run_plan(&self.store, false, |db| planner.build_plan(db.connection()))?;
        writeln!(self.out(), "Reservation {id} cancelled; its slot is free again.")?;
        Ok(())
    }
}

/// Parses an identifier and requires it to be one of `known`.
fn known_id<T>(s: &str, known: &[T]) -> Result<T, String>
where
    T: FromStr<Err = ValidationError> + PartialEq + Copy,
{
    let id = s.parse::<T>().map_err(|e| e.to_string())?;
    if known.contains(&id) {
        Ok(id)
    } else {
        Err(format!("{} is not in the list above.", s.trim()))
    }
}

fn letters(field: &str, s: &str) -> Result<String, String> {
    validate_letters(field, s).map_err(|e| e.to_string())
}

fn parse_date_answer(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn parse_shift_answer(s: &str) -> Result<Shift, String> {
    s.parse::<Shift>().map_err(|e| e.to_string())
}

fn parse_event_name(s: &str) -> Result<String, String> {
    EventName::new(s)
        .map(|name| name.as_str().to_string())
        .map_err(|e| e.to_string())
}

fn parse_export_choice(s: &str) -> Result<Vec<ExportFormat>, String> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(ExportFormat::ALL.to_vec());
    }
    s.parse::<ExportFormat>()
        .map(|format| vec![format])
        .map_err(|e| e.to_string())
}
