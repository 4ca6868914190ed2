use booking_core::model::Booking;
use booking_core::status::status_of;
use chrono::{DateTime, Utc};
use std::fmt::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
pub struct BookingRow {
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Controller")]
    controller: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BookingRow {
    fn new(booking: &Booking, now: DateTime<Utc>) -> Self {
        Self {
            position: booking.position.clone(),
            controller: booking.vid.clone(),
            from: format_instant(booking.from_date),
            to: format_instant(booking.to_date),
            duration: format_duration(booking.duration_minutes()),
            status: status_of(booking, now).to_string(),
        }
    }
}

pub fn booking_table(bookings: &[&Booking], now: DateTime<Utc>) -> String {
    let rows: Vec<BookingRow> = bookings.iter().map(|b| BookingRow::new(b, now)).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

pub fn booking_details(booking: &Booking, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Booking {}", booking.id);
    let _ = writeln!(out, "  Position: {}", booking.position);
    let _ = writeln!(out, "  Controller: {}", booking.vid);
    let _ = writeln!(out, "  From:     {}", format_instant(booking.from_date));
    let _ = writeln!(out, "  To:       {}", format_instant(booking.to_date));
    let _ = writeln!(
        out,
        "  Duration: {}",
        format_duration(booking.duration_minutes())
    );
    let _ = writeln!(out, "  Kind:     {}", booking.kind);
    let _ = writeln!(out, "  Status:   {}", status_of(booking, now));
    if let Some(created_at) = booking.created_at {
        let _ = writeln!(out, "  Created:  {}", format_instant(created_at));
    }
    if let Some(notes) = &booking.notes {
        let _ = writeln!(out, "  Notes:    {notes}");
    }
    out
}

pub fn format_instant(t: DateTime<Utc>) -> String {
    t.format("%d/%m/%Y %H:%M").to_string()
}

pub fn format_duration(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
