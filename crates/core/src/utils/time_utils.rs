use chrono::{Datelike, NaiveDate};

use crate::constants::MONTHS_PER_YEAR;

/// Returns the last calendar day of the given month.
///
/// Returns `None` when the year is outside the range chrono can represent or
/// `month` is not in `1..=12`.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return None;
    }
    let first_of_next = if month == MONTHS_PER_YEAR {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match first_of_next {
        Some(next) => next.pred_opt(),
        // December of the last representable year
        None => NaiveDate::from_ymd_opt(year, month, 31),
    }
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> Option<NaiveDate> {
    last_day_of_month(date.year(), date.month())
}

/// December 31 of the year containing `date`.
pub fn end_of_calendar_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 12, 31)
}

/// Last day of the 12-month fiscal year containing `date`.
///
/// A fiscal year starting in `start_month` runs from day 1 of that month to
/// the last day of the preceding month one year later. A start month of
/// January yields the calendar year.
///
/// # Arguments
/// * `date` - Any date within the fiscal year
/// * `start_month` - First month of the fiscal year, in `1..=12`
pub fn end_of_fiscal_year(date: NaiveDate, start_month: u32) -> Option<NaiveDate> {
    if !(1..=MONTHS_PER_YEAR).contains(&start_month) {
        return None;
    }
    if start_month == 1 {
        return end_of_calendar_year(date);
    }

    let end_month = start_month - 1;
    let end_year = if date.month() >= start_month {
        date.year().checked_add(1)?
    } else {
        date.year()
    };
    last_day_of_month(end_year, end_month)
}
