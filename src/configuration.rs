use std::cell::{
    RefCell, 
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;


use crate::calendarerror::CalendarError;
use crate::manager::manager::{
    IManager, 
    Manager
};
use crate::time::calendar::workdaycalendarmanager::WorkdayCalendarManager;
use crate::time::workdaycalendar::WorkdayCalendar;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    calendars: Vec<serde_json::Value>
}

pub struct Configuration {
    workday_calendar_manager_cell: RefCell<Manager<WorkdayCalendar>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            workday_calendar_manager_cell: RefCell::new(WorkdayCalendarManager::new())
        }
    }

    pub fn workday_calendar_manager(&self) -> RefMut<'_, Manager<WorkdayCalendar>> {
        self.workday_calendar_manager_cell.borrow_mut()
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), CalendarError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), CalendarError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), CalendarError> {
        let workday_calendar_manager = self.workday_calendar_manager_cell.borrow_mut();
        workday_calendar_manager.insert_obj_from_json_vec(&json_prop.calendars)?;
        log::debug!("configuration holds {} calendars", json_prop.calendars.len());
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
