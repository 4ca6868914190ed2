use crate::app::App;
use crate::commands::KindArg;
use crate::error::CliError;
use crate::render;
use booking_core::form::BookingForm;
use chrono::Utc;
use clap::Args;

/// Create a new booking. All fields are validated locally before anything
/// is sent to the server.
#[derive(Args)]
pub struct CreateCommand {
    /// Position identifier (ICAO_TYPE, e.g. SBGR_APP)
    #[arg(long)]
    pub position: String,

    /// Start date (YYYY-MM-DD, UTC)
    #[arg(long, value_name = "DATE")]
    pub from_date: String,

    /// Start time (HH:MM, UTC)
    #[arg(long, value_name = "TIME")]
    pub from_time: String,

    /// End date (YYYY-MM-DD, UTC)
    #[arg(long, value_name = "DATE")]
    pub to_date: String,

    /// End time (HH:MM, UTC)
    #[arg(long, value_name = "TIME")]
    pub to_time: String,

    /// Booking kind
    #[arg(long, value_enum, default_value = "normal")]
    pub kind: KindArg,
}

impl CreateCommand {
    pub async fn execute(self, app: &App) -> Result<(), CliError> {
        let now = Utc::now();
        let vid = app.session.vid();
        let form = BookingForm {
            position: self.position,
            from_date: self.from_date,
            from_time: self.from_time,
            to_date: self.to_date,
            to_time: self.to_time,
        };
        let mut draft = form.validate(vid.as_deref(), now, false)?;
        draft.kind = self.kind.into();

        let retry = format!(
            "create --position {} --from-date {} --from-time {} --to-date {} --to-time {}",
            draft.position, form.from_date, form.from_time, form.to_date, form.to_time
        );
        let created = app
            .client
            .create(&draft)
            .await
            .map_err(|e| CliError::remote(e, retry))?;

        println!("Booking created successfully!");
        print!("{}", render::booking_details(&created, now));
        Ok(())
    }
}
