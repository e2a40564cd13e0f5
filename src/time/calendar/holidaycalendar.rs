use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

const ONE_DAY: Days = Days::new(1);

/// Decides which calendar dates are excluded from workday counting.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_holiday(d)
    }

    /// Steps one calendar day at a time until `n` business days have been
    /// passed; excluded dates do not count. `None` when the walk leaves the
    /// representable date range.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i64) -> Option<NaiveDate> {
        let shift_one_day = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d)?;
            if self.is_business_day(d) {
                m -= 1;
            } else {
                log::trace!("skipping excluded date {}", d);
            }
        }
        Some(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, -1)
    }
}
