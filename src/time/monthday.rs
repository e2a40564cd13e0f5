use std::fmt;

use chrono::{
    Datelike,
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};

use crate::calendarerror::CalendarError;
use crate::time::utility::max_days_of_month;

#[derive(Deserialize)]
pub struct MonthDayJsonProp {
    month: u32,
    day: u32
}

/// A month/day pattern independent of the year, e.g. 25 December.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "MonthDayJsonProp")]
pub struct MonthDay {
    month: u32,
    day: u32
}

impl MonthDay {
    /// Fails when no year contains the pattern. 29 February is accepted.
    pub fn new(month: u32, day: u32) -> Result<MonthDay, CalendarError> {
        if month == 0 || day == 0 || day > max_days_of_month(month) {
            // year 0 marks a pattern that is invalid in every year
            return Err(CalendarError::invalid_date(0, month, day));
        }
        Ok(MonthDay { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn at_year(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or(CalendarError::invalid_date(year, self.month, self.day))
    }
}

impl From<NaiveDate> for MonthDay {
    fn from(d: NaiveDate) -> Self {
        MonthDay { month: d.month(), day: d.day() }
    }
}

impl TryFrom<MonthDayJsonProp> for MonthDay {
    type Error = CalendarError;

    fn try_from(prop: MonthDayJsonProp) -> Result<Self, Self::Error> {
        MonthDay::new(prop.month, prop.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}
