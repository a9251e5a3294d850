//! Golden-value and invariant tests for moonrise/moonset search.

use chrono::{FixedOffset, TimeZone, Utc};
use solun_base::GeoLocation;
use solun_search::{MoonTimes, moon_times};
use solun_time::{DayFrame, Epoch};

fn utc_date(year: i32, month: u32, day: u32) -> Epoch {
    Epoch::from_datetime(&Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap())
}

fn assert_close_ms(got: Option<Epoch>, expected_ms: i64, what: &str) {
    let got = got.unwrap_or_else(|| panic!("{what} missing")).as_unix_ms();
    assert!(
        (got - expected_ms).abs() <= 1,
        "{what}: got {got}, expected {expected_ms}"
    );
}

#[test]
fn hefei_utc_day() {
    let loc = GeoLocation::new(31.87, 117.24, 0.0);
    let t = moon_times(utc_date(2024, 3, 20), &loc, DayFrame::Utc).unwrap();
    assert!(matches!(t, MoonTimes::RiseAndSet { .. }), "{t:?}");
    assert_close_ms(t.rise(), 1_710_913_748_516, "rise");
    assert_close_ms(t.set(), 1_710_966_021_120, "set");
}

#[test]
fn hefei_local_day_utc_plus_8() {
    let loc = GeoLocation::new(31.87, 117.24, 0.0);
    let cst = FixedOffset::east_opt(8 * 3600).unwrap();
    // Any instant on 2024-03-20 China Standard Time
    let noon = Epoch::from_datetime(&cst.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap());
    let t = moon_times(noon, &loc, DayFrame::Fixed(cst)).unwrap();
    assert_close_ms(t.set(), 1_710_877_385_412, "set");
    assert_close_ms(t.rise(), 1_710_913_748_516, "rise");
}

#[test]
fn time_of_day_does_not_matter() {
    let loc = GeoLocation::new(50.5, 30.5, 0.0);
    let midnight = utc_date(2013, 3, 4);
    let evening = midnight.hours_later(21.75).unwrap();
    assert_eq!(
        moon_times(midnight, &loc, DayFrame::Utc),
        moon_times(evening, &loc, DayFrame::Utc)
    );
}

#[test]
fn polar_winter_always_down() {
    let loc = GeoLocation::new(89.0, 0.0, 0.0);
    let t = moon_times(utc_date(2023, 12, 17), &loc, DayFrame::Utc).unwrap();
    assert_eq!(t, MoonTimes::AlwaysDown);
}

#[test]
fn polar_winter_always_up() {
    let loc = GeoLocation::new(89.0, 0.0, 0.0);
    let t = moon_times(utc_date(2023, 12, 22), &loc, DayFrame::Utc).unwrap();
    assert_eq!(t, MoonTimes::AlwaysUp);
}

#[test]
fn polar_rise_only() {
    let loc = GeoLocation::new(89.0, 0.0, 0.0);
    let t = moon_times(utc_date(2023, 12, 20), &loc, DayFrame::Utc).unwrap();
    assert!(matches!(t, MoonTimes::Rise(_)), "{t:?}");
    assert_close_ms(t.rise(), 1_703_060_980_147, "rise");
}

#[test]
fn polar_set_only() {
    let loc = GeoLocation::new(89.0, 0.0, 0.0);
    let t = moon_times(utc_date(2024, 1, 3), &loc, DayFrame::Utc).unwrap();
    assert!(matches!(t, MoonTimes::Set(_)), "{t:?}");
    assert_close_ms(t.set(), 1_704_274_761_433, "set");
}

#[test]
fn crossings_fall_inside_the_day() {
    let lats = [-60.0, -33.9, 0.0, 31.87, 50.5, 64.8];
    for lat in lats {
        let loc = GeoLocation::new(lat, 117.24, 0.0);
        for day in 1..=29 {
            let midnight = utc_date(2024, 2, day);
            let end = midnight.hours_later(24.0).unwrap();
            let t = moon_times(midnight, &loc, DayFrame::Utc).unwrap();
            for e in [t.rise(), t.set()].into_iter().flatten() {
                assert!(midnight <= e && e <= end, "lat {lat}, day {day}: {t:?}");
            }
        }
    }
}

#[test]
fn mid_latitudes_see_rise_or_set_every_day() {
    // Away from the poles the Moon never stays up or down a whole day.
    let loc = GeoLocation::new(31.87, 117.24, 0.0);
    for day in 1..=31 {
        let t = moon_times(utc_date(2024, 1, day), &loc, DayFrame::Utc).unwrap();
        assert!(t.rise().is_some() || t.set().is_some(), "day {day}: {t:?}");
    }
}
