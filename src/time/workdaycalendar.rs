use chrono::{
    NaiveDate,
    NaiveDateTime,
    NaiveTime
};
use serde::Deserialize;

use crate::calendarerror::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayregistry::HolidayRegistry;
use crate::time::monthday::MonthDay;
use crate::time::workdayhours::{
    WorkdayHours,
    WorkdayHoursJsonProp
};
use crate::time::workdayincrement::{
    compute_increment,
    IncrementRequest
};

#[derive(Deserialize)]
pub struct WorkdayCalendarJsonProp {
    workday: Option<WorkdayHoursJsonProp>,
    #[serde(default)]
    holidays: Vec<NaiveDate>,
    #[serde(default)]
    recurring_holidays: Vec<MonthDay>,
    #[serde(default)]
    materialize_years: Vec<i32>
}

/// A workday length together with the holidays it skips.
#[derive(Clone, Default, Debug)]
pub struct WorkdayCalendar {
    workday_hours: Option<WorkdayHours>,
    registry: HolidayRegistry
}

impl WorkdayCalendar {
    pub fn new() -> WorkdayCalendar {
        WorkdayCalendar::default()
    }

    pub fn from_json_prop(prop: WorkdayCalendarJsonProp) -> Result<WorkdayCalendar, CalendarError> {
        let mut calendar = WorkdayCalendar::new();
        if let Some(workday) = prop.workday.as_ref() {
            calendar.workday_hours = Some(WorkdayHours::from_json_prop(workday)?);
        }
        for d in prop.holidays {
            calendar.add_fixed_holiday(d);
        }
        for month_day in prop.recurring_holidays {
            calendar.add_recurring_holiday(month_day);
        }
        for year in prop.materialize_years {
            calendar.materialize_recurring_holidays_for_year(year);
        }
        Ok(calendar)
    }

    pub fn set_workday_hours(&mut self, start: NaiveTime, stop: NaiveTime) -> Result<(), CalendarError> {
        self.workday_hours = Some(WorkdayHours::new(start, stop)?);
        Ok(())
    }

    pub fn set_workday_start_and_stop(&mut self, start: NaiveDateTime, stop: NaiveDateTime) -> Result<(), CalendarError> {
        self.workday_hours = Some(WorkdayHours::between(start, stop)?);
        Ok(())
    }

    /// Hours per workday, 0.0 while unset.
    pub fn workday_hours(&self) -> f64 {
        self.workday_hours.map_or(0.0, |hours| hours.hours_per_workday())
    }

    pub fn workday(&self) -> Option<&WorkdayHours> {
        self.workday_hours.as_ref()
    }

    pub fn registry(&self) -> &HolidayRegistry {
        &self.registry
    }

    pub fn add_fixed_holiday(&mut self, d: NaiveDate) -> bool {
        self.registry.add_fixed_holiday(d)
    }

    pub fn remove_fixed_holiday(&mut self, d: NaiveDate) -> bool {
        self.registry.remove_fixed_holiday(d)
    }

    pub fn add_recurring_holiday(&mut self, month_day: MonthDay) -> bool {
        self.registry.add_recurring_holiday(month_day)
    }

    pub fn remove_recurring_holiday(&mut self, month_day: MonthDay) -> bool {
        self.registry.remove_recurring_holiday(month_day)
    }

    pub fn materialize_recurring_holidays_for_year(&mut self, year: i32) -> usize {
        self.registry.materialize_recurring_holidays_for_year(year)
    }

    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.registry.is_weekend(d)
    }

    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.registry.is_holiday(d)
    }

    pub fn compute_increment(&self, start: NaiveDateTime, amount: f64) -> Result<NaiveDateTime, CalendarError> {
        let request = IncrementRequest::new(start, amount)?;
        compute_increment(self.workday_hours.as_ref(), &self.registry, &request)
    }
}
