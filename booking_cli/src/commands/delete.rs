use crate::app::App;
use crate::error::CliError;
use booking_core::client::verify_ownership;
use clap::Args;
use std::io;
use std::io::Write;

/// Delete one of your bookings after confirmation.
#[derive(Args)]
pub struct DeleteCommand {
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

impl DeleteCommand {
    pub async fn execute(self, app: &App) -> Result<(), CliError> {
        let vid = app.require_vid()?;
        let existing = app
            .client
            .get(&self.id)
            .await
            .map_err(|e| CliError::remote(e, format!("delete {}", self.id)))?;
        verify_ownership(&existing, Some(&vid))?;

        if !self.yes {
            let question = format!(
                "Are you sure you want to delete the booking for {}?",
                existing.position
            );
            if !confirm(&question)? {
                println!("Aborted.");
                return Ok(());
            }
        }

        app.client
            .delete(&self.id)
            .await
            .map_err(|e| CliError::remote(e, format!("delete {} --yes", self.id)))?;
        println!("Booking deleted.");
        Ok(())
    }
}

fn confirm(question: &str) -> Result<bool, CliError> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
