use crate::ApiConfig;
use crate::model::{Booking, BookingDraft};
use crate::session::Session;
use chrono::NaiveDate;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Header carrying the requesting user's identifier; the server enforces
/// ownership from it.
pub const VID_HEADER: &str = "X-User-VID";

const GENERIC_SERVER_ERROR: &str = "Server error occurred";

/// Uniform error shape every remote failure is normalized into. All
/// variants carry owned data so the store can hold the last error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error - please check your connection")]
    Network,
    #[error("{0}")]
    Server(String),
    #[error("{0}")]
    Validation(String),
    #[error("Booking not found")]
    NotFound,
    #[error("You can only modify your own bookings")]
    Ownership,
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() || e.is_builder() {
            warn!(error = ?e, "unexpected booking API client error");
            ApiError::Unexpected
        } else {
            warn!(error = ?e, "booking API request did not complete");
            ApiError::Network
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: Option<String>,
    message: Option<String>,
}

/// Server-supplied error text, if the body carries the structured payload.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|p| p.error.or(p.message))
}

fn normalize_status(status: StatusCode, body: &str) -> ApiError {
    let message = server_message(body);
    warn!(status = %status, message = ?message, "booking API returned an error status");
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::Validation(message.unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()))
        }
        _ => ApiError::Server(message.unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())),
    }
}

/// Local fail-fast check before a mutation is attempted; the server remains
/// the authority.
pub fn verify_ownership(booking: &Booking, vid: Option<&str>) -> Result<(), ApiError> {
    match vid {
        Some(vid) if booking.vid == vid => Ok(()),
        _ => {
            warn!(id = %booking.id, "refusing to mutate a booking owned by another user");
            Err(ApiError::Ownership)
        }
    }
}

/// Gateway to the remote booking API. Attaches the session's VID to every
/// request and normalizes all failures into [`ApiError`].
#[derive(Clone)]
pub struct BookingApiClient {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl BookingApiClient {
    pub fn from_config(config: &ApiConfig, session: Arc<Session>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::new_with_client(client, config.base_url.clone(), session))
    }

    pub fn new_with_client(client: Client, base_url: String, session: Arc<Session>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Booking>, ApiError> {
        let url = format!("{}/bookings", self.base_url);
        read_json(self.request(Method::GET, url).send().await?).await
    }

    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Booking>, ApiError> {
        let url = format!("{}/bookings/date/{date}", self.base_url);
        read_json(self.request(Method::GET, url).send().await?).await
    }

    pub async fn list_by_user(&self, vid: &str) -> Result<Vec<Booking>, ApiError> {
        let url = format!("{}/bookings/user/{vid}", self.base_url);
        read_json(self.request(Method::GET, url).send().await?).await
    }

    pub async fn get(&self, id: &str) -> Result<Booking, ApiError> {
        let url = format!("{}/bookings/{id}", self.base_url);
        read_json(self.request(Method::GET, url).send().await?).await
    }

    pub async fn create(&self, draft: &BookingDraft) -> Result<Booking, ApiError> {
        let url = format!("{}/bookings", self.base_url);
        read_json(self.request(Method::POST, url).json(draft).send().await?).await
    }

    pub async fn update(&self, id: &str, draft: &BookingDraft) -> Result<Booking, ApiError> {
        self.check_ownership(id).await?;
        let url = format!("{}/bookings/{id}", self.base_url);
        read_json(self.request(Method::PUT, url).json(draft).send().await?).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.check_ownership(id).await?;
        let url = format!("{}/bookings/{id}", self.base_url);
        check_status(self.request(Method::DELETE, url).send().await?).await?;
        Ok(())
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let mut req = self.client.request(method, url);
        if let Some(vid) = self.session.vid() {
            req = req.header(VID_HEADER, vid);
        }
        req
    }

    async fn check_ownership(&self, id: &str) -> Result<(), ApiError> {
        let existing = self.get(id).await?;
        verify_ownership(&existing, self.session.vid().as_deref())
    }
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(normalize_status(status, &body))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    Ok(resp.json::<T>().await?)
}
