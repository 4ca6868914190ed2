use crate::model::{Booking, BookingDraft, BookingKind};
use crate::time::{
    TimeRangeError, combine_date_time, date_for_input, time_for_input, validate_time_range,
};
use crate::validate::normalize_position;
use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Local validation failures. These block submission entirely; nothing is
/// sent to the server while one is present.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your VID first")]
    MissingVid,
    #[error("Position is required")]
    MissingPosition,
    #[error("Invalid position format. Use format like: SBGR_APP, SBBR_TWR")]
    InvalidPosition,
    #[error("From date and time are required")]
    MissingFrom,
    #[error("To date and time are required")]
    MissingTo,
    #[error("Invalid date or time value")]
    Unparseable,
    #[error(transparent)]
    TimeRange(#[from] TimeRangeError),
    #[error("Booking must be in the future")]
    NotInFuture,
}

/// Raw form fields as the user typed them; `validate` turns them into a
/// draft ready for the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub position: String,
    pub from_date: String,
    pub from_time: String,
    pub to_date: String,
    pub to_time: String,
}

impl BookingForm {
    /// Pre-filled defaults for a new booking: tomorrow, 00:00-02:00.
    pub fn default_for_new(now: DateTime<Utc>) -> Self {
        let tomorrow = now + TimeDelta::days(1);
        Self {
            position: String::new(),
            from_date: date_for_input(tomorrow),
            from_time: "00:00".to_string(),
            to_date: date_for_input(tomorrow),
            to_time: "02:00".to_string(),
        }
    }

    /// Fields of an existing booking, for editing.
    pub fn for_booking(booking: &Booking) -> Self {
        Self {
            position: booking.position.clone(),
            from_date: date_for_input(booking.from_date),
            from_time: time_for_input(booking.from_date),
            to_date: date_for_input(booking.to_date),
            to_time: time_for_input(booking.to_date),
        }
    }

    /// Checks run in the same order the form applies them: identity,
    /// position, field presence, range, and (for new bookings) futurity.
    pub fn validate(
        &self,
        vid: Option<&str>,
        now: DateTime<Utc>,
        editing: bool,
    ) -> Result<BookingDraft, FormError> {
        let Some(vid) = vid else {
            return Err(FormError::MissingVid);
        };
        if self.position.trim().is_empty() {
            return Err(FormError::MissingPosition);
        }
        let position = normalize_position(&self.position).ok_or(FormError::InvalidPosition)?;
        if self.from_date.trim().is_empty() || self.from_time.trim().is_empty() {
            return Err(FormError::MissingFrom);
        }
        if self.to_date.trim().is_empty() || self.to_time.trim().is_empty() {
            return Err(FormError::MissingTo);
        }
        let from_date =
            combine_date_time(&self.from_date, &self.from_time).map_err(|_| FormError::Unparseable)?;
        let to_date =
            combine_date_time(&self.to_date, &self.to_time).map_err(|_| FormError::Unparseable)?;
        validate_time_range(from_date, to_date)?;
        if !editing && from_date <= now {
            return Err(FormError::NotInFuture);
        }
        Ok(BookingDraft {
            position,
            vid: vid.to_string(),
            from_date,
            to_date,
            kind: BookingKind::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn form() -> BookingForm {
        BookingForm {
            position: "sbgr_app".into(),
            from_date: "2026-08-07".into(),
            from_time: "00:00".into(),
            to_date: "2026-08-07".into(),
            to_time: "02:00".into(),
        }
    }

    const NOW: &str = "2026-08-06T12:00:00Z";

    #[test]
    fn valid_form_produces_an_upper_cased_draft() {
        let draft = form().validate(Some("123456"), at(NOW), false).unwrap();
        assert_eq!(draft.position, "SBGR_APP");
        assert_eq!(draft.vid, "123456");
        assert_eq!(draft.from_date, at("2026-08-07T00:00:00Z"));
        assert_eq!(draft.to_date, at("2026-08-07T02:00:00Z"));
        assert_eq!(draft.kind, BookingKind::Normal);
    }

    #[test]
    fn missing_vid_blocks_before_anything_else() {
        assert_eq!(
            form().validate(None, at(NOW), false),
            Err(FormError::MissingVid)
        );
    }

    #[test]
    fn position_is_checked_for_presence_then_shape() {
        let mut f = form();
        f.position = "  ".into();
        assert_eq!(
            f.validate(Some("123456"), at(NOW), false),
            Err(FormError::MissingPosition)
        );
        f.position = "SBGR-APP".into();
        assert_eq!(
            f.validate(Some("123456"), at(NOW), false),
            Err(FormError::InvalidPosition)
        );
    }

    #[test]
    fn empty_date_or_time_fields_are_reported_per_side() {
        let mut f = form();
        f.from_time = String::new();
        assert_eq!(
            f.validate(Some("123456"), at(NOW), false),
            Err(FormError::MissingFrom)
        );
        let mut f = form();
        f.to_date = String::new();
        assert_eq!(
            f.validate(Some("123456"), at(NOW), false),
            Err(FormError::MissingTo)
        );
    }

    #[test]
    fn ten_minute_booking_is_rejected_locally() {
        let mut f = form();
        f.to_time = "00:10".into();
        assert_eq!(
            f.validate(Some("123456"), at(NOW), false),
            Err(FormError::TimeRange(TimeRangeError::TooShort))
        );
    }

    #[test]
    fn past_start_is_rejected_for_new_but_allowed_when_editing() {
        let mut f = form();
        f.from_date = "2026-08-05".into();
        f.to_date = "2026-08-05".into();
        assert_eq!(
            f.validate(Some("123456"), at(NOW), false),
            Err(FormError::NotInFuture)
        );
        assert!(f.validate(Some("123456"), at(NOW), true).is_ok());
    }

    #[test]
    fn defaults_cover_tomorrow_morning() {
        let f = BookingForm::default_for_new(at(NOW));
        assert_eq!(f.from_date, "2026-08-07");
        assert_eq!(f.from_time, "00:00");
        assert_eq!(f.to_time, "02:00");
        // the defaults themselves validate
        let mut f = f;
        f.position = "SBGR_APP".into();
        assert!(f.validate(Some("123456"), at(NOW), false).is_ok());
    }

    #[test]
    fn edit_prefill_round_trips_through_the_form() {
        let draft = form().validate(Some("123456"), at(NOW), false).unwrap();
        let booking = Booking {
            id: "9".into(),
            position: draft.position.clone(),
            vid: draft.vid.clone(),
            from_date: draft.from_date,
            to_date: draft.to_date,
            kind: draft.kind,
            created_at: None,
            notes: None,
        };
        let prefilled = BookingForm::for_booking(&booking);
        let again = prefilled.validate(Some("123456"), at(NOW), true).unwrap();
        assert_eq!(again, draft);
    }
}
