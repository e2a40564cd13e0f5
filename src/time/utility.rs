#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}

/// Number of days in `month` of `year`; zero for a month outside 1..=12.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30, 
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30, 
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month > 12 {
        return 0;
    }
    
    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Longest a month can be in any year, i.e. its length in a leap year.
#[inline]
pub const fn max_days_of_month (month: u32) -> u32 {
    days_of_month(2000, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_follow_gregorian_rule() {
        assert!(is_leap(2020));
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(!is_leap(2021));
    }

    #[test]
    fn february_length_depends_on_year() {
        assert_eq!(days_of_month(2020, 2), 29);
        assert_eq!(days_of_month(2021, 2), 28);
        assert_eq!(max_days_of_month(2), 29);
    }

    #[test]
    fn out_of_range_month_has_no_days() {
        assert_eq!(days_of_month(2020, 0), 0);
        assert_eq!(days_of_month(2020, 13), 0);
    }
}
