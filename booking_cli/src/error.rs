use booking_core::client::ApiError;
use booking_core::error::ConfigError;
use booking_core::form::FormError;
use booking_core::session::SessionError;
use thiserror::Error;
use tracing::dispatcher::SetGlobalDefaultError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tracing(#[from] SetGlobalDefaultError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A remote call failed; the message names the exact command to re-run.
    #[error("{source}\nRetry with: atc-booking {retry}")]
    Remote { source: ApiError, retry: String },
    #[error("no VID set. Run `atc-booking vid set <VID>` first")]
    VidRequired,
    #[error("could not determine a home directory for persisted state")]
    NoDataDir,
    #[error("only upcoming bookings can be changed")]
    NotEditable,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn remote(source: ApiError, retry: impl Into<String>) -> Self {
        Self::Remote {
            source,
            retry: retry.into(),
        }
    }
}
