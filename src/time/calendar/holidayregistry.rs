use std::collections::HashSet;

use chrono::NaiveDate;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::monthday::MonthDay;

/// Owns the excluded dates: explicit fixed holidays and year-independent
/// recurring ones. Recurring holidays only take effect once materialized
/// into fixed holidays for a given year.
#[derive(Clone, Default, Debug)]
pub struct HolidayRegistry {
    fixed_holidays: HashSet<NaiveDate>,
    recurring_holidays: HashSet<MonthDay>
}

impl HolidayRegistry {
    pub fn new() -> HolidayRegistry {
        HolidayRegistry::default()
    }

    /// Returns `false` when the date was already registered.
    pub fn add_fixed_holiday(&mut self, d: NaiveDate) -> bool {
        self.fixed_holidays.insert(d)
    }

    pub fn remove_fixed_holiday(&mut self, d: NaiveDate) -> bool {
        self.fixed_holidays.remove(&d)
    }

    pub fn add_recurring_holiday(&mut self, month_day: MonthDay) -> bool {
        self.recurring_holidays.insert(month_day)
    }

    pub fn remove_recurring_holiday(&mut self, month_day: MonthDay) -> bool {
        self.recurring_holidays.remove(&month_day)
    }

    pub fn fixed_holidays(&self) -> &HashSet<NaiveDate> {
        &self.fixed_holidays
    }

    pub fn recurring_holidays(&self) -> &HashSet<MonthDay> {
        &self.recurring_holidays
    }

    #[inline]
    pub fn is_fixed_holiday(&self, d: NaiveDate) -> bool {
        self.fixed_holidays.contains(&d)
    }

    /// Adds every recurring holiday that exists in `year` to the fixed set.
    /// A pattern missing from `year` (29 February outside leap years) is
    /// logged and skipped. Returns how many dates were materialized.
    pub fn materialize_recurring_holidays_for_year(&mut self, year: i32) -> usize {
        let dates: Vec<NaiveDate> = self.recurring_holidays
            .iter()
            .filter_map(|month_day| match month_day.at_year(year) {
                Ok(d) => Some(d),
                Err(error) => {
                    log::warn!("skipping recurring holiday {}: {}", month_day, error);
                    None
                }
            })
            .collect();

        let materialized = dates.len();
        for d in dates {
            self.add_fixed_holiday(d);
        }
        log::debug!("materialized {} recurring holidays for {}", materialized, year);
        materialized
    }
}

impl HolidayCalendar for HolidayRegistry {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.is_weekend(d) || self.is_fixed_holiday(d)
    }
}
