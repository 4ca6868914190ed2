use booking_core::form::BookingForm;
use booking_core::model::Booking;
use booking_core::status::{BookingStatus, status_of};
use booking_core::store::BookingStore;
use chrono::{DateTime, TimeDelta, Utc};

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

/// The server would assign the id; simulate its confirmation response.
fn confirmed(id: &str, draft: booking_core::model::BookingDraft) -> Booking {
    Booking {
        id: id.into(),
        position: draft.position,
        vid: draft.vid,
        from_date: draft.from_date,
        to_date: draft.to_date,
        kind: draft.kind,
        created_at: None,
        notes: None,
    }
}

#[test]
fn created_booking_moves_through_all_three_statuses() {
    let now = at("2026-08-06T12:00:00Z");
    let form = BookingForm {
        position: "SBGR_APP".into(),
        from_date: "2026-08-07".into(),
        from_time: "00:00".into(),
        to_date: "2026-08-07".into(),
        to_time: "02:00".into(),
    };
    let draft = form.validate(Some("123456"), now, false).unwrap();

    let mut store = BookingStore::new();
    store.set_loading(true);
    store.add(confirmed("1", draft));
    store.set_loading(false);

    assert_eq!(store.bookings().len(), 1);
    let booking = &store.bookings()[0];
    assert_eq!(status_of(booking, now), BookingStatus::Scheduled);
    assert_eq!(
        status_of(booking, at("2026-08-07T01:00:00Z")),
        BookingStatus::Active
    );
    assert_eq!(
        status_of(booking, at("2026-08-07T02:00:00Z")),
        BookingStatus::Completed
    );
}

#[test]
fn update_flow_keeps_the_cache_consistent() {
    let now = at("2026-08-06T12:00:00Z");
    let form = BookingForm {
        position: "SBBR_TWR".into(),
        from_date: "2026-08-08".into(),
        from_time: "10:00".into(),
        to_date: "2026-08-08".into(),
        to_time: "12:00".into(),
    };
    let draft = form.validate(Some("485573"), now, false).unwrap();

    let mut store = BookingStore::new();
    store.add(confirmed("7", draft.clone()));

    // the owner shifts the booking two hours later through the edit form
    let mut edit = BookingForm::for_booking(&store.bookings()[0]);
    edit.from_time = "12:00".into();
    edit.to_time = "14:00".into();
    let edited = edit.validate(Some("485573"), now, true).unwrap();
    assert!(store.update(confirmed("7", edited)));

    let booking = &store.bookings()[0];
    assert_eq!(booking.from_date, at("2026-08-08T12:00:00Z"));
    assert_eq!(booking.duration_minutes(), 120);

    assert!(store.remove("7"));
    assert!(store.bookings().is_empty());
}

#[test]
fn views_agree_on_a_mixed_list() {
    let now = at("2026-08-06T12:00:00Z");
    let mut store = BookingStore::new();

    let mine_future = Booking {
        id: "a".into(),
        position: "SBGR_APP".into(),
        vid: "123456".into(),
        from_date: now + TimeDelta::days(1),
        to_date: now + TimeDelta::days(1) + TimeDelta::hours(2),
        kind: Default::default(),
        created_at: None,
        notes: None,
    };
    let mine_past = Booking {
        id: "b".into(),
        from_date: now - TimeDelta::days(2),
        to_date: now - TimeDelta::days(2) + TimeDelta::hours(2),
        ..mine_future.clone()
    };
    let theirs = Booking {
        id: "c".into(),
        vid: "654321".into(),
        ..mine_future.clone()
    };
    store.set_bookings(vec![mine_future, mine_past, theirs], now);

    let upcoming: Vec<&str> = store.upcoming(now).iter().map(|b| b.id.as_str()).collect();
    assert_eq!(upcoming, vec!["a", "c"]);

    let mine: Vec<&str> = store
        .owned_by("123456", now)
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(mine, vec!["a"]);

    let on_day = store.on_date(Some((now + TimeDelta::days(1)).date_naive()));
    assert_eq!(on_day.len(), 2);
}
