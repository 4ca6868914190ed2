use crate::client::ApiError;
use crate::model::Booking;
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// Client-side cache of the booking list. Mutated only in response to
/// confirmed API results; the list is kept sorted by `(position, from_date)`
/// across all mutations.
#[derive(Debug, Default, Clone)]
pub struct BookingStore {
    bookings: Vec<Booking>,
    loading: bool,
    error: Option<ApiError>,
    last_updated: Option<DateTime<Utc>>,
}

fn booking_order(a: &Booking, b: &Booking) -> Ordering {
    a.position
        .cmp(&b.position)
        .then_with(|| a.from_date.cmp(&b.from_date))
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
        self.loading = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replaces the whole list from a successful fetch.
    pub fn set_bookings(&mut self, bookings: Vec<Booking>, now: DateTime<Utc>) {
        self.bookings = bookings;
        self.bookings.sort_by(booking_order);
        self.loading = false;
        self.error = None;
        self.last_updated = Some(now);
    }

    pub fn add(&mut self, booking: Booking) {
        self.error = None;
        self.bookings.push(booking);
        self.bookings.sort_by(booking_order);
    }

    /// Replaces the entry with a matching id. Returns false (and leaves the
    /// list untouched) when the id is unknown.
    pub fn update(&mut self, booking: Booking) -> bool {
        self.error = None;
        let Some(slot) = self.bookings.iter_mut().find(|b| b.id == booking.id) else {
            return false;
        };
        *slot = booking;
        self.bookings.sort_by(booking_order);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.error = None;
        let before = self.bookings.len();
        self.bookings.retain(|b| b.id != id);
        self.bookings.len() != before
    }

    /// Bookings starting on or after the current UTC calendar day, in store
    /// order.
    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<&Booking> {
        let today = now.date_naive();
        self.bookings
            .iter()
            .filter(|b| b.from_date.date_naive() >= today)
            .collect()
    }

    /// Bookings on an exact calendar day; empty when no day is selected.
    pub fn on_date(&self, date: Option<NaiveDate>) -> Vec<&Booking> {
        let Some(date) = date else {
            return Vec::new();
        };
        self.bookings
            .iter()
            .filter(|b| b.from_date.date_naive() == date)
            .collect()
    }

    /// The given user's bookings that have not started yet, chronologically.
    pub fn owned_by(&self, vid: &str, now: DateTime<Utc>) -> Vec<&Booking> {
        let mut owned: Vec<&Booking> = self
            .bookings
            .iter()
            .filter(|b| b.vid == vid && b.from_date >= now)
            .collect();
        owned.sort_by_key(|b| b.from_date);
        owned
    }
}
