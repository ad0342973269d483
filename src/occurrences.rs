use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ScheduleError;
use crate::frequency::Recurrence;

/// How the end date and the occurrence cap bound a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// An end date, when present, is the only bound and the cap is ignored.
    /// Without an end date, exactly `max_occurrences` dates are produced.
    #[default]
    EndDateOverridesCount,
    /// Both bounds apply, whichever is reached first stops the schedule.
    FirstBoundReached,
}

impl Termination {
    fn keeps_going(
        &self,
        current: &NaiveDate,
        count: u32,
        end_date: Option<&NaiveDate>,
        max_occurrences: u32,
    ) -> bool {
        // The end date is exclusive.
        let before_end = end_date.map_or(true, |end_date| current < end_date);
        before_end && self.has_room(count, end_date.is_some(), max_occurrences)
    }

    fn has_room(&self, count: u32, has_end_date: bool, max_occurrences: u32) -> bool {
        match self {
            Termination::EndDateOverridesCount => count < max_occurrences || has_end_date,
            Termination::FirstBoundReached => count < max_occurrences,
        }
    }
}

/// Occurrence dates of a lease, in increasing order, starting at `start_date`.
pub fn generate_dates<R: Recurrence + ?Sized>(
    start_date: NaiveDate,
    recurrence: &R,
    anchor_day: u32,
    end_date: Option<NaiveDate>,
    max_occurrences: u32,
    termination: Termination,
) -> Result<Vec<NaiveDate>, ScheduleError> {
    let mut dates = Vec::new();
    let mut current = start_date;
    let mut count: u32 = 0;

    while termination.keeps_going(&current, count, end_date.as_ref(), max_occurrences) {
        dates.push(current);
        count += 1;
        if !termination.has_room(count, end_date.is_some(), max_occurrences) {
            break;
        }
        current = match recurrence.next_occurrence(&current, anchor_day) {
            // Past the last representable date is past any end date too.
            Err(ScheduleError::DateOutOfRange(_)) if end_date.is_some() => break,
            next => next?,
        };
    }

    Ok(dates)
}
