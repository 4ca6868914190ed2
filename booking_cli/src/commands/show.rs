use crate::app::App;
use crate::error::CliError;
use crate::render;
use chrono::Utc;
use clap::Args;

/// Show one booking in detail.
#[derive(Args)]
pub struct ShowCommand {
    #[arg(value_name = "ID")]
    pub id: String,
}

impl ShowCommand {
    pub async fn execute(self, app: &App) -> Result<(), CliError> {
        let now = Utc::now();
        let booking = app
            .client
            .get(&self.id)
            .await
            .map_err(|e| CliError::remote(e, format!("show {}", self.id)))?;
        print!("{}", render::booking_details(&booking, now));
        Ok(())
    }
}
