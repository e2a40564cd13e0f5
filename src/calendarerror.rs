use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid workday configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid workday increment {0}: amount must be finite")]
    InvalidAmount(f64),
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    },
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String)
}

impl CalendarError {
    pub fn invalid_date(year: i32, month: u32, day: u32) -> CalendarError {
        CalendarError::InvalidDate { year, month, day }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, CalendarError>
    where T: for<'a> Deserialize<'a> {
    serde_json::from_value(json_value).map_err(CalendarError::JsonParseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_is_zero_padded() {
        let error = CalendarError::invalid_date(2021, 2, 29);
        assert_eq!(error.to_string(), "invalid date 2021-02-29");
    }

    #[test]
    fn missing_name_reports_key() {
        let error = CalendarError::NameNotFoundError("Oslo".to_owned());
        assert_eq!(error.to_string(), "key 'Oslo' not found");
    }

    #[test]
    fn parse_json_value_wraps_serde_error() {
        let result: Result<u32, CalendarError> = parse_json_value(serde_json::json!("eight"));
        assert!(matches!(result, Err(CalendarError::JsonParseError(_))));
    }
}
