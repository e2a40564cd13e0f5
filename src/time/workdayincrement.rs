use chrono::{
    NaiveDateTime,
    TimeDelta
};

use crate::calendarerror::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::workdayhours::WorkdayHours;

const MINUTES_PER_HOUR: f64 = 60.0;
// absorbs binary representation error, e.g. 0.7545 * 480 landing just under 362.16
const MINUTE_EPSILON: f64 = 1e-6;
const MAX_WHOLE_DAYS: u64 = i32::MAX as u64;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Forward = 1,
    Backward = -1
}

/// A signed fractional number of workdays to move `start` by.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct IncrementRequest {
    start: NaiveDateTime,
    amount: f64
}

/// `amount` decomposed into a direction, whole workdays and the remaining
/// fraction of one workday.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct WorkdaySplit {
    direction: Direction,
    whole_days: u64,
    fraction: f64
}

impl IncrementRequest {
    pub fn new(start: NaiveDateTime, amount: f64) -> Result<IncrementRequest, CalendarError> {
        if !amount.is_finite() {
            return Err(CalendarError::InvalidAmount(amount));
        }
        Ok(IncrementRequest { start, amount })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn split(&self) -> WorkdaySplit {
        let direction = if self.amount < 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        let magnitude = self.amount.abs();
        let whole = magnitude.trunc();
        WorkdaySplit {
            direction,
            // saturates for magnitudes beyond u64, which are rejected later anyway
            whole_days: whole as u64,
            fraction: magnitude - whole
        }
    }
}

impl WorkdaySplit {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn whole_days(&self) -> u64 {
        self.whole_days
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Whole days signed by direction, as taken by the business day walk.
    pub fn signed_whole_days(&self) -> i64 {
        self.whole_days as i64 * self.direction as i64
    }

    /// The fraction of a workday as a signed time offset, truncated to
    /// whole minutes.
    pub fn offset(&self, hours_per_workday: f64) -> TimeDelta {
        let minutes = self.fraction * hours_per_workday * MINUTES_PER_HOUR;
        let whole_minutes = (minutes + MINUTE_EPSILON).floor() as i64;
        let hours = whole_minutes / 60;
        let minutes = whole_minutes % 60;
        (TimeDelta::hours(hours) + TimeDelta::minutes(minutes)) * self.direction as i32
    }
}

/// Moves `request.start` by `request.amount` workdays.
///
/// Walks whole days first, counting only dates `calendar` does not exclude,
/// then keeps the start's time of day and adds the fractional offset. The
/// offset may cross midnight; the date it lands on is not checked again.
pub fn compute_increment<C>(hours: Option<&WorkdayHours>,
                            calendar: &C,
                            request: &IncrementRequest) -> Result<NaiveDateTime, CalendarError>
    where C: HolidayCalendar + ?Sized {
    let hours = hours.ok_or_else(|| CalendarError::InvalidConfiguration("workday hours are not set".to_owned()))?;
    let hours_per_workday = hours.hours_per_workday();
    if !(hours_per_workday > 0.0) {
        return Err(CalendarError::InvalidConfiguration(
            format!("workday must last a positive number of hours, got {}", hours_per_workday)
        ));
    }

    let split = request.split();
    if split.whole_days() > MAX_WHOLE_DAYS {
        return Err(CalendarError::InvalidAmount(request.amount()));
    }

    let start = request.start();
    let end_date = calendar
        .shift_n_business_day(start.date(), split.signed_whole_days())
        .ok_or(CalendarError::InvalidAmount(request.amount()))?;
    let result = end_date
        .and_time(start.time())
        .checked_add_signed(split.offset(hours_per_workday))
        .ok_or(CalendarError::InvalidAmount(request.amount()))?;

    log::debug!("{} + {} workdays of {} hours = {}", start, request.amount(), hours_per_workday, result);
    Ok(result)
}
