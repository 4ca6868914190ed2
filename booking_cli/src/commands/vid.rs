use crate::app::App;
use crate::error::CliError;
use clap::Subcommand;

/// Manage the VID attached to every request and used to claim ownership of
/// bookings.
#[derive(Subcommand)]
pub enum VidCommand {
    /// Set and persist your VID
    Set {
        #[arg(value_name = "VID")]
        vid: String,
    },

    /// Show the current VID
    Show,

    /// Forget the persisted VID
    Clear,
}

impl VidCommand {
    pub async fn execute(self, app: &App) -> Result<(), CliError> {
        match self {
            VidCommand::Set { vid } => {
                app.session.set_vid(&vid)?;
                println!("VID set to {}", vid.trim());
            }
            VidCommand::Show => match app.session.vid() {
                Some(vid) => println!("Current VID: {vid}"),
                None => println!("No VID set."),
            },
            VidCommand::Clear => {
                app.session.clear_vid()?;
                println!("VID cleared.");
            }
        }
        Ok(())
    }
}
