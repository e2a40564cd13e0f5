use chrono::{
    NaiveDateTime,
    NaiveTime,
    TimeDelta
};
use serde::Deserialize;

use crate::calendarerror::CalendarError;

const MINUTES_PER_HOUR: f64 = 60.0;
const MAX_WORKDAY_MINUTES: i64 = 24 * 60;

fn parse_time(s: &str) -> Result<NaiveTime, CalendarError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|error| CalendarError::InvalidConfiguration(format!("cannot parse time '{}': {}", s, error)))
}

#[derive(Deserialize)]
pub struct WorkdayHoursJsonProp {
    start: String,
    stop: String
}

/// The span of a working day. Its length in hours is the unit of
/// fractional workday increments.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct WorkdayHours {
    start: NaiveTime,
    stop: NaiveTime,
    hours_per_workday: f64
}

impl WorkdayHours {
    pub fn new(start: NaiveTime, stop: NaiveTime) -> Result<WorkdayHours, CalendarError> {
        if stop <= start {
            return Err(CalendarError::InvalidConfiguration(
                format!("workday stop {} is not after start {}", stop, start)
            ));
        }
        Ok(WorkdayHours::from_span(start, stop, stop - start))
    }

    /// Builds the workday from two date-times; the span may reach a full 24 hours.
    pub fn between(start: NaiveDateTime, stop: NaiveDateTime) -> Result<WorkdayHours, CalendarError> {
        let span = stop - start;
        let minutes = span.num_minutes();
        if minutes <= 0 || minutes > MAX_WORKDAY_MINUTES {
            return Err(CalendarError::InvalidConfiguration(
                format!("workday from {} to {} must last more than 0 and at most 24 hours", start, stop)
            ));
        }
        Ok(WorkdayHours::from_span(start.time(), stop.time(), span))
    }

    pub fn from_json_prop(prop: &WorkdayHoursJsonProp) -> Result<WorkdayHours, CalendarError> {
        WorkdayHours::new(parse_time(&prop.start)?, parse_time(&prop.stop)?)
    }

    fn from_span(start: NaiveTime, stop: NaiveTime, span: TimeDelta) -> WorkdayHours {
        WorkdayHours {
            start,
            stop,
            hours_per_workday: span.num_minutes() as f64 / MINUTES_PER_HOUR
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn stop(&self) -> NaiveTime {
        self.stop
    }

    #[inline]
    pub fn hours_per_workday(&self) -> f64 {
        self.hours_per_workday
    }
}
