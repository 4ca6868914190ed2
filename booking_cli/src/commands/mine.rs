use crate::app::App;
use crate::error::CliError;
use crate::render;
use booking_core::model::Booking;
use booking_core::store::BookingStore;
use chrono::Utc;
use clap::Args;

/// Maximum number of past bookings shown before summarizing.
const PAST_SHOWN: usize = 10;

/// Show the current user's bookings, upcoming first, recent past after.
#[derive(Args)]
pub struct MineCommand {}

impl MineCommand {
    pub async fn execute(self, app: &App) -> Result<(), CliError> {
        let vid = app.require_vid()?;
        let now = Utc::now();
        let mut store = BookingStore::new();
        store.set_loading(true);
        match app.client.list_by_user(&vid).await {
            Ok(bookings) => store.set_bookings(bookings, now),
            Err(e) => {
                store.set_error(e.clone());
                return Err(CliError::remote(e, "mine"));
            }
        }

        println!("My bookings (VID: {vid})");
        if store.bookings().is_empty() {
            println!("No bookings yet. Create your first with `atc-booking create`.");
            return Ok(());
        }

        let upcoming = store.owned_by(&vid, now);
        if !upcoming.is_empty() {
            println!("\nUpcoming bookings ({})", upcoming.len());
            println!("{}", render::booking_table(&upcoming, now));
        }

        let mut past: Vec<&Booking> = store
            .bookings()
            .iter()
            .filter(|b| b.vid == vid && b.from_date < now)
            .collect();
        past.sort_by(|a, b| b.from_date.cmp(&a.from_date));
        if !past.is_empty() {
            let shown = past.len().min(PAST_SHOWN);
            println!("\nRecent past bookings ({shown})");
            println!("{}", render::booking_table(&past[..shown], now));
            if past.len() > PAST_SHOWN {
                println!(
                    "Showing the last {PAST_SHOWN} past bookings. Total past bookings: {}",
                    past.len()
                );
            }
        }

        println!(
            "\n{} upcoming, {} past, {} total",
            upcoming.len(),
            past.len(),
            store.bookings().len()
        );
        Ok(())
    }
}
