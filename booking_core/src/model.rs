use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A confirmed position booking as returned by the remote API. The `id` is
/// assigned by the server and opaque to this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub position: String,
    pub vid: String,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    #[serde(default)]
    pub kind: BookingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    #[default]
    Normal,
    Training,
    Event,
    Exam,
}

impl Display for BookingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingKind::Normal => write!(f, "Normal"),
            BookingKind::Training => write!(f, "Training"),
            BookingKind::Event => write!(f, "Event"),
            BookingKind::Exam => write!(f, "Exam"),
        }
    }
}

/// Payload for create and update calls; the server assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub position: String,
    pub vid: String,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    #[serde(default)]
    pub kind: BookingKind,
}

impl Booking {
    pub fn duration_minutes(&self) -> i64 {
        (self.to_date - self.from_date).num_minutes()
    }
}
