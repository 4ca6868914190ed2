use crate::app::App;
use crate::commands::KindArg;
use crate::error::CliError;
use crate::render;
use booking_core::client::verify_ownership;
use booking_core::form::BookingForm;
use booking_core::status::is_future;
use chrono::Utc;
use clap::Args;

/// Edit one of your upcoming bookings. Omitted fields keep their current
/// values.
#[derive(Args)]
pub struct UpdateCommand {
    #[arg(value_name = "ID")]
    pub id: String,

    /// Position identifier (ICAO_TYPE, e.g. SBGR_APP)
    #[arg(long)]
    pub position: Option<String>,

    /// Start date (YYYY-MM-DD, UTC)
    #[arg(long, value_name = "DATE")]
    pub from_date: Option<String>,

    /// Start time (HH:MM, UTC)
    #[arg(long, value_name = "TIME")]
    pub from_time: Option<String>,

    /// End date (YYYY-MM-DD, UTC)
    #[arg(long, value_name = "DATE")]
    pub to_date: Option<String>,

    /// End time (HH:MM, UTC)
    #[arg(long, value_name = "TIME")]
    pub to_time: Option<String>,

    /// Booking kind
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

impl UpdateCommand {
    pub async fn execute(self, app: &App) -> Result<(), CliError> {
        let now = Utc::now();
        let vid = app.require_vid()?;
        let existing = app
            .client
            .get(&self.id)
            .await
            .map_err(|e| CliError::remote(e, format!("update {}", self.id)))?;
        verify_ownership(&existing, Some(&vid))?;
        if !is_future(&existing, now) {
            return Err(CliError::NotEditable);
        }

        let mut form = BookingForm::for_booking(&existing);
        if let Some(position) = self.position {
            form.position = position;
        }
        if let Some(from_date) = self.from_date {
            form.from_date = from_date;
        }
        if let Some(from_time) = self.from_time {
            form.from_time = from_time;
        }
        if let Some(to_date) = self.to_date {
            form.to_date = to_date;
        }
        if let Some(to_time) = self.to_time {
            form.to_time = to_time;
        }

        let mut draft = form.validate(Some(&vid), now, true)?;
        draft.kind = self.kind.map_or(existing.kind, Into::into);

        let updated = app
            .client
            .update(&self.id, &draft)
            .await
            .map_err(|e| CliError::remote(e, format!("update {}", self.id)))?;

        println!("Booking updated successfully!");
        print!("{}", render::booking_details(&updated, now));
        Ok(())
    }
}
