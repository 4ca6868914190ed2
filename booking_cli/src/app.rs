use crate::error::CliError;
use booking_core::client::BookingApiClient;
use booking_core::session::{FileVidStore, Session};
use booking_core::{default_data_dir, load_config};
use std::path::PathBuf;
use std::sync::Arc;

/// Per-invocation wiring: configuration, the restored session, and the API
/// client bound to it.
pub struct App {
    pub session: Arc<Session>,
    pub client: BookingApiClient,
}

impl App {
    pub fn new(data_dir_override: Option<PathBuf>) -> Result<Self, CliError> {
        let config = load_config()?;
        let data_dir = data_dir_override
            .or_else(|| config.data_dir.clone())
            .or_else(default_data_dir)
            .ok_or(CliError::NoDataDir)?;
        let session = Arc::new(Session::new(Box::new(FileVidStore::new(data_dir)))?);
        let client = BookingApiClient::from_config(&config.api, Arc::clone(&session))?;
        Ok(Self { session, client })
    }

    pub fn require_vid(&self) -> Result<String, CliError> {
        self.session.vid().ok_or(CliError::VidRequired)
    }
}
