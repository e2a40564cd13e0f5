use chrono::NaiveDate;

use workdaycalendar::calendarerror::CalendarError;
use workdaycalendar::time::monthday::MonthDay;
use workdaycalendar::time::workdaycalendar::WorkdayCalendar;

const DATE_PATTERN: &str = "%d-%m-%Y %H:%M";

fn main() -> Result<(), CalendarError> {
    let mut workday_calendar = WorkdayCalendar::new();
    let first_of_january = NaiveDate::from_ymd_opt(2020, 1, 1)
        .ok_or(CalendarError::invalid_date(2020, 1, 1))?;
    let workday_start = first_of_january.and_hms_opt(8, 0, 0)
        .ok_or(CalendarError::InvalidConfiguration("08:00".to_owned()))?;
    let workday_stop = first_of_january.and_hms_opt(16, 0, 0)
        .ok_or(CalendarError::InvalidConfiguration("16:00".to_owned()))?;
    workday_calendar.set_workday_start_and_stop(workday_start, workday_stop)?;

    workday_calendar.add_recurring_holiday(MonthDay::new(5, 17)?);
    workday_calendar.materialize_recurring_holidays_for_year(2020);
    workday_calendar.add_fixed_holiday(
        NaiveDate::from_ymd_opt(2020, 5, 27).ok_or(CalendarError::invalid_date(2020, 5, 27))?
    );

    let start = NaiveDate::from_ymd_opt(2020, 5, 24)
        .and_then(|d| d.and_hms_opt(8, 5, 0))
        .ok_or(CalendarError::invalid_date(2020, 5, 24))?;
    let increment = 1.5;
    let end = workday_calendar.compute_increment(start, increment)?;

    println!("{} with the addition of {} working days is {}",
             start.format(DATE_PATTERN),
             increment,
             end.format(DATE_PATTERN));
    Ok(())
}
