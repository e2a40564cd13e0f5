pub mod calendarerror;

pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod monthday;
    pub mod workdayhours;
    pub mod workdayincrement;
    pub mod workdaycalendar;

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod holidayregistry;
        pub mod workdaycalendarmanager;
    }
}
