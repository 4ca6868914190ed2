use crate::app::App;
use crate::error::CliError;
use crate::render;
use booking_core::store::BookingStore;
use chrono::Utc;
use clap::Args;

/// Fetch every upcoming booking on the network and show it.
#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub async fn execute(self, app: &App) -> Result<(), CliError> {
        let now = Utc::now();
        let mut store = BookingStore::new();
        store.set_loading(true);
        match app.client.list_all().await {
            Ok(bookings) => store.set_bookings(bookings, now),
            Err(e) => {
                store.set_error(e.clone());
                return Err(CliError::remote(e, "list"));
            }
        }

        let upcoming = store.upcoming(now);
        if upcoming.is_empty() {
            println!("No future bookings found.");
            return Ok(());
        }
        println!("{}", render::booking_table(&upcoming, now));
        println!("{} booking(s)", upcoming.len());
        Ok(())
    }
}
