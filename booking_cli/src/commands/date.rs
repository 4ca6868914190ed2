use crate::app::App;
use crate::error::CliError;
use crate::render;
use booking_core::store::BookingStore;
use chrono::{NaiveDate, Utc};
use clap::Args;

/// Show the bookings of one calendar day, past days included.
#[derive(Args)]
pub struct DateCommand {
    /// Calendar date to search (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: NaiveDate,
}

impl DateCommand {
    pub async fn execute(self, app: &App) -> Result<(), CliError> {
        let now = Utc::now();
        let mut store = BookingStore::new();
        store.set_loading(true);
        match app.client.list_by_date(self.date).await {
            Ok(bookings) => store.set_bookings(bookings, now),
            Err(e) => {
                store.set_error(e.clone());
                return Err(CliError::remote(e, format!("date {}", self.date)));
            }
        }

        let today = if self.date == now.date_naive() {
            " (today)"
        } else {
            ""
        };
        println!("Bookings for {}{}", self.date, today);

        let matches = store.on_date(Some(self.date));
        if matches.is_empty() {
            println!("No bookings found for this date.");
            return Ok(());
        }
        println!("{}", render::booking_table(&matches, now));
        println!("{} booking(s) found", matches.len());
        Ok(())
    }
}
