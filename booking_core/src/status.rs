use crate::model::Booking;
use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};

/// Lifecycle classification of a booking relative to an instant. Never
/// stored on the booking itself; always derived from the injected `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Scheduled,
    Active,
    Completed,
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Scheduled => write!(f, "Scheduled"),
            BookingStatus::Active => write!(f, "Active"),
            BookingStatus::Completed => write!(f, "Completed"),
        }
    }
}

pub fn status_of(booking: &Booking, now: DateTime<Utc>) -> BookingStatus {
    if booking.from_date <= now && now < booking.to_date {
        BookingStatus::Active
    } else if booking.from_date > now {
        BookingStatus::Scheduled
    } else {
        BookingStatus::Completed
    }
}

/// Whether the booking has not started yet. Editing and deletion gates key
/// off this, not off the three-way status.
pub fn is_future(booking: &Booking, now: DateTime<Utc>) -> bool {
    booking.from_date > now
}
