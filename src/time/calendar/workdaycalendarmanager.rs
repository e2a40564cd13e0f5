
use crate::calendarerror::{
    CalendarError,
    parse_json_value
};
use crate::manager::manager::Manager;
use crate::time::workdaycalendar::{
    WorkdayCalendar,
    WorkdayCalendarJsonProp
};

fn get_workday_calendar_from_json(json_value: serde_json::Value) -> Result<WorkdayCalendar, CalendarError> {
    let prop: WorkdayCalendarJsonProp = parse_json_value(json_value)?;
    WorkdayCalendar::from_json_prop(prop)
}

pub struct WorkdayCalendarManager;


impl WorkdayCalendarManager {
    pub fn new() -> Manager<WorkdayCalendar> {
        Manager::new(get_workday_calendar_from_json)
    }
}
