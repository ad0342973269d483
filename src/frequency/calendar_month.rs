use chrono::{Datelike, Months, NaiveDate};

use crate::error::ScheduleError;
use crate::frequency::Recurrence;

pub struct CalendarMonthRecurrence {}

fn last_day_of_month(date: &NaiveDate) -> Option<u32> {
    if date.month() == 12 {
        return Some(31);
    }
    let next_month = date.with_day(1)?.checked_add_months(Months::new(1))?;
    Some(next_month.pred_opt()?.day())
}

impl Recurrence for CalendarMonthRecurrence {
    /// Moves to the next calendar month and lands on `anchor_day`, or on the
    /// last day of that month when it is shorter. The clamp never feeds back
    /// into the anchor, so a lease started on the 31st is back on the 31st in
    /// the first month long enough to hold it.
    fn next_occurrence(
        &self,
        current: &NaiveDate,
        anchor_day: u32,
    ) -> Result<NaiveDate, ScheduleError> {
        (|| {
            let next_month = current.with_day(1)?.checked_add_months(Months::new(1))?;
            let max_day = last_day_of_month(&next_month)?;
            next_month.with_day(anchor_day.min(max_day))
        })()
        .ok_or(ScheduleError::DateOutOfRange(*current))
    }
}
