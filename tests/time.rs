use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::time::Duration;
use ts2_utils::{ParseError, Time};

#[test]
fn midnight_is_distinct_from_unset() {
    let afternoon = Time::parse("13:45:30");
    let midnight = Time::parse("00:00:00");

    assert!(afternoon.is_set());
    assert!(midnight.is_set());
    assert_ne!(afternoon, midnight);
    assert_ne!(afternoon, Time::Unset);
    assert_ne!(midnight, Time::Unset);
    assert_eq!(midnight.time_of_day(), NaiveTime::from_hms_opt(0, 0, 0));
}

#[test]
fn malformed_strings_become_unset() {
    for data in [
        "not-a-time",
        "",
        "25:00:00",
        "12:60:00",
        "12:30",
        "12:30:00 ",
        "1:2:3",
        "12:5:00",
        "12:05:7",
        " 13:45:30",
        "23:59:60",
        "+1:05:00",
        "12-30-00",
    ] {
        assert_eq!(Time::parse(data), Time::Unset, "{data:?}");
    }
}

#[test]
fn accepts_day_boundaries() {
    assert_eq!(Time::parse("00:00:00"), Time::from_hms(0, 0, 0).unwrap());
    assert_eq!(Time::parse("23:59:59"), Time::from_hms(23, 59, 59).unwrap());
    assert_eq!(Time::parse("23:59:59").to_string(), "23:59:59");
}

#[test]
fn decodes_json_strings() {
    let t: Time = serde_json::from_str("\"13:45:30\"").unwrap();
    assert_eq!(t, Time::from_hms(13, 45, 30).unwrap());

    let unset: Time = serde_json::from_str("\"half past nine\"").unwrap();
    assert_eq!(unset, Time::Unset);
}

#[test]
fn non_string_payload_is_an_error() {
    let value = serde_json::json!(42);
    assert_eq!(
        Time::from_value(&value),
        Err(ParseError::Time {
            raw: "42".to_string()
        })
    );

    let err = serde_json::from_str::<Time>("42").unwrap_err();
    assert!(err.to_string().contains("HH:MM:SS"));
}

#[test]
fn bad_time_does_not_abort_surrounding_decode() {
    #[derive(Deserialize)]
    struct Stop {
        place: String,
        arrival: Time,
        departure: Time,
    }

    let stop: Stop = serde_json::from_str(
        r#"{"place": "STN", "arrival": "bogus", "departure": "08:15:00"}"#,
    )
    .unwrap();
    assert_eq!(stop.place, "STN");
    assert_eq!(stop.arrival, Time::Unset);
    assert_eq!(stop.departure, Time::from_hms(8, 15, 0).unwrap());
}

#[test]
fn unset_orders_first() {
    let mut times = vec![
        Time::parse("13:45:30"),
        Time::Unset,
        Time::parse("00:00:00"),
        Time::parse("09:00:00"),
    ];
    times.sort();
    assert_eq!(
        times,
        vec![
            Time::Unset,
            Time::parse("00:00:00"),
            Time::parse("09:00:00"),
            Time::parse("13:45:30"),
        ]
    );
}

#[test]
fn datetime_is_anchored_on_reference_day() {
    let day = NaiveDate::from_ymd_opt(0, 1, 2).unwrap();
    assert_eq!(
        Time::parse("00:00:00").to_datetime(),
        day.and_hms_opt(0, 0, 0)
    );
    assert_eq!(
        Time::parse("23:59:59").to_datetime(),
        day.and_hms_opt(23, 59, 59)
    );
    assert_eq!(Time::Unset.to_datetime(), None);
}

#[test]
fn formats_as_hh_mm_ss() {
    let t = Time::from_hms(6, 5, 0).unwrap();
    assert_eq!(t.to_string(), "06:05:00");
    assert_eq!(serde_json::to_string(&t).unwrap(), "\"06:05:00\"");
    assert_eq!(Time::Unset.to_string(), "");

    let back: Time = serde_json::from_str(&serde_json::to_string(&Time::Unset).unwrap()).unwrap();
    assert_eq!(back, Time::Unset);
}

#[test]
fn adding_delay_wraps_past_midnight() {
    let t = Time::parse("23:30:00") + Duration::from_secs(3600);
    assert_eq!(t, Time::from_hms(0, 30, 0).unwrap());

    let t = Time::parse("10:00:00") + Duration::from_secs(2 * 86_400 + 90);
    assert_eq!(t, Time::from_hms(10, 1, 30).unwrap());

    assert_eq!(Time::Unset + Duration::from_secs(60), Time::Unset);
}
