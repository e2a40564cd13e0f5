use chrono::{
    Datelike,
    Days,
    NaiveDate,
    NaiveDateTime,
    Weekday
};
use proptest::prelude::*;

use workdaycalendar::calendarerror::CalendarError;
use workdaycalendar::time::monthday::MonthDay;
use workdaycalendar::time::workdaycalendar::WorkdayCalendar;

const PATTERN: &str = "%d-%m-%Y %H:%M";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn eight_hour_calendar() -> WorkdayCalendar {
    let mut calendar = WorkdayCalendar::new();
    calendar.set_workday_start_and_stop(at(2020, 2, 3, 8, 0), at(2020, 2, 3, 16, 0)).unwrap();
    assert_eq!(calendar.workday_hours(), 8.0);
    calendar
}

fn formatted(calendar: &WorkdayCalendar, start: NaiveDateTime, amount: f64) -> String {
    calendar.compute_increment(start, amount).unwrap().format(PATTERN).to_string()
}

#[test]
fn increment_excludes_weekends() {
    let calendar = eight_hour_calendar();
    assert_eq!(formatted(&calendar, at(2020, 1, 23, 8, 0), 3.75), "28-01-2020 14:00");
}

#[test]
fn negative_increment_walks_back_over_weekdays() {
    let calendar = eight_hour_calendar();
    assert_eq!(formatted(&calendar, at(2020, 1, 23, 8, 0), -3.75), "20-01-2020 02:00");
    assert_eq!(formatted(&calendar, at(2020, 1, 28, 14, 0), -3.75), "23-01-2020 08:00");
}

#[test]
fn increment_excludes_holidays() {
    let mut calendar = eight_hour_calendar();
    for d in [date(2020, 4, 3), date(2020, 4, 12), date(2020, 12, 25)] {
        calendar.add_fixed_holiday(d);
    }
    assert_eq!(formatted(&calendar, at(2020, 12, 23, 8, 0), 2.75), "28-12-2020 14:00");
}

#[test]
fn increment_excludes_materialized_recurring_holidays() {
    let mut calendar = eight_hour_calendar();
    calendar.add_recurring_holiday(MonthDay::new(12, 25).unwrap());
    assert_eq!(formatted(&calendar, at(2020, 12, 23, 8, 0), 2.0), "25-12-2020 08:00");

    calendar.materialize_recurring_holidays_for_year(2020);
    assert_eq!(formatted(&calendar, at(2020, 12, 23, 8, 0), 2.0), "28-12-2020 08:00");
}

#[test]
fn increment_with_large_number_of_days() {
    let calendar = eight_hour_calendar();
    assert_eq!(formatted(&calendar, at(2020, 1, 23, 8, 0), 3333.7545), "02-11-2032 14:02");
}

#[test]
fn fraction_follows_configured_workday_length() {
    let mut calendar = WorkdayCalendar::new();
    calendar.set_workday_start_and_stop(at(2020, 2, 3, 9, 0), at(2020, 2, 3, 15, 0)).unwrap();
    // half of a six hour day
    assert_eq!(formatted(&calendar, at(2020, 1, 23, 9, 0), 0.5), "23-01-2020 12:00");
}

#[test]
fn demo_scenario_starts_on_a_sunday() {
    let mut calendar = eight_hour_calendar();
    calendar.add_recurring_holiday(MonthDay::new(5, 17).unwrap());
    calendar.materialize_recurring_holidays_for_year(2020);
    calendar.add_fixed_holiday(date(2020, 5, 27));
    assert_eq!(formatted(&calendar, at(2020, 5, 24, 8, 5), 1.5), "25-05-2020 12:05");
}

#[test]
fn invalid_inputs_are_typed_failures() {
    let calendar = eight_hour_calendar();
    let start = at(2020, 1, 23, 8, 0);
    assert!(matches!(calendar.compute_increment(start, f64::NAN), Err(CalendarError::InvalidAmount(_))));
    assert!(matches!(
        WorkdayCalendar::new().compute_increment(start, 1.0),
        Err(CalendarError::InvalidConfiguration(_))
    ));
}

fn weekday_start() -> impl Strategy<Value = NaiveDateTime> {
    (0u64..20_000, 0u32..8, 0u32..60).prop_filter_map("weekend start", |(offset, h, m)| {
        let d = date(2000, 1, 1).checked_add_days(Days::new(offset))?;
        if matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            None
        } else {
            d.and_hms_opt(h, m, 0)
        }
    })
}

proptest! {
    #[test]
    fn weekend_is_saturday_or_sunday(offset in 0u64..200_000) {
        let d = date(1900, 1, 1).checked_add_days(Days::new(offset)).unwrap();
        let calendar = WorkdayCalendar::new();
        prop_assert_eq!(calendar.is_weekend(d), matches!(d.weekday(), Weekday::Sat | Weekday::Sun));
    }

    #[test]
    fn holiday_is_weekend_or_registered(
        offsets in proptest::collection::vec(0u64..3_000, 0..20),
        probe in 0u64..3_000
    ) {
        let origin = date(2020, 1, 1);
        let mut calendar = WorkdayCalendar::new();
        for offset in offsets.iter() {
            calendar.add_fixed_holiday(origin + Days::new(*offset));
        }
        let d = origin + Days::new(probe);
        let registered = offsets.contains(&probe);
        prop_assert_eq!(calendar.is_holiday(d), calendar.is_weekend(d) || registered);
    }

    #[test]
    fn registering_twice_keeps_size(offsets in proptest::collection::vec(0u64..3_000, 0..20)) {
        let origin = date(2020, 1, 1);
        let mut calendar = WorkdayCalendar::new();
        for offset in offsets.iter() {
            calendar.add_fixed_holiday(origin + Days::new(*offset));
        }
        let size = calendar.registry().fixed_holidays().len();
        for offset in offsets.iter() {
            prop_assert!(!calendar.add_fixed_holiday(origin + Days::new(*offset)));
        }
        prop_assert_eq!(calendar.registry().fixed_holidays().len(), size);
    }

    #[test]
    fn zero_increment_is_identity(offset in 0u64..20_000, h in 0u32..24, m in 0u32..60) {
        let calendar = eight_hour_calendar();
        let start = (date(2000, 1, 1) + Days::new(offset)).and_hms_opt(h, m, 0).unwrap();
        prop_assert_eq!(calendar.compute_increment(start, 0.0).unwrap(), start);
    }

    #[test]
    fn whole_days_round_trip(start in weekday_start(), n in 0u32..2_000) {
        let calendar = eight_hour_calendar();
        let forward = calendar.compute_increment(start, n as f64).unwrap();
        prop_assert_eq!(calendar.compute_increment(forward, -(n as f64)).unwrap(), start);
    }

    #[test]
    fn fractional_round_trip_within_a_day(start in weekday_start(), n in 0u32..500, quarter in 0u32..4) {
        let calendar = eight_hour_calendar();
        let amount = n as f64 + quarter as f64 * 0.25;
        let forward = calendar.compute_increment(start, amount).unwrap();
        prop_assert_eq!(calendar.compute_increment(forward, -amount).unwrap(), start);
    }
}
