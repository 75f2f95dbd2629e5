//! Console tables for clients, rooms, shifts and reservations.

use std::io::{self, Write};

use cowork::schedule::format_date;
use cowork::{Client, ExecutionResult, ReservationView, Room, Shift};

fn rule<W: Write>(w: &mut W, width: usize) -> io::Result<()> {
    writeln!(w, "{}", "*".repeat(width))
}

fn banner<W: Write>(w: &mut W, title: &str, width: usize) -> io::Result<()> {
    rule(w, width)?;
    writeln!(w, "**{title:^inner$}**", inner = width - 4)?;
    rule(w, width)
}

/// Writes the registered clients.
pub fn write_clients<W: Write>(w: &mut W, clients: &[Client]) -> io::Result<()> {
    const WIDTH: usize = 77;
    banner(w, "REGISTERED CLIENTS", WIDTH)?;
    writeln!(w, "{:<15} {:<30} {:<30}", "Client ID", "First name", "Last name")?;
    rule(w, WIDTH)?;
    for client in clients {
        writeln!(
            w,
            "{:<15} {:<30} {:<30}",
            client.id, client.first_name, client.last_name
        )?;
    }
    rule(w, WIDTH)
}

/// Writes the registered rooms.
pub fn write_rooms<W: Write>(w: &mut W, rooms: &[Room]) -> io::Result<()> {
    const WIDTH: usize = 67;
    banner(w, "REGISTERED ROOMS", WIDTH)?;
    writeln!(w, "{:<15} {:<30} {:<20}", "Room ID", "Name", "Capacity")?;
    rule(w, WIDTH)?;
    for room in rooms {
        writeln!(w, "{:<15} {:<30} {:<20}", room.id, room.name, room.capacity)?;
    }
    rule(w, WIDTH)
}

/// Writes the shifts of the day.
pub fn write_shifts<W: Write>(w: &mut W, shifts: &[Shift]) -> io::Result<()> {
    for shift in shifts {
        writeln!(w, "{}\t{}", shift.id(), shift.label())?;
    }
    Ok(())
}

/// Writes reservations under `title`.
pub fn write_reservations<W: Write>(
    w: &mut W,
    title: &str,
    rows: &[ReservationView],
) -> io::Result<()> {
    const WIDTH: usize = 98;
    banner(w, title, WIDTH)?;
    writeln!(
        w,
        "{:<8} {:<25} {:<18} {:<12} {:<10} {:<20}",
        "ID", "Client", "Room", "Date", "Shift", "Event"
    )?;
    rule(w, WIDTH)?;
    for row in rows {
        writeln!(
            w,
            "{:<8} {:<25} {:<18} {:<12} {:<10} {:<20}",
            row.id,
            row.client_name,
            row.room_name,
            format_date(row.date),
            row.shift.label(),
            row.event_name
        )?;
    }
    rule(w, WIDTH)
}

/// Reports a dry run: the actions that would have been taken.
pub fn write_dry_run<W: Write>(w: &mut W, result: &ExecutionResult) -> io::Result<()> {
    writeln!(w, "Dry run: no changes were made")?;
    for action in &result.actions_taken {
        writeln!(w, "  - {action}")?;
    }
    Ok(())
}

/// Writes plan warnings to stderr unless `quiet`.
pub fn warn_all(result: &ExecutionResult, quiet: bool) {
    if quiet {
        return;
    }
    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }
}
