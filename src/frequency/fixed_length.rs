use chrono::{Days, NaiveDate};

use crate::error::ScheduleError;
use crate::frequency::Recurrence;

pub struct FixedLengthRecurrence {
    pub(super) days: u64,
}

impl Recurrence for FixedLengthRecurrence {
    fn next_occurrence(
        &self,
        current: &NaiveDate,
        _anchor_day: u32,
    ) -> Result<NaiveDate, ScheduleError> {
        current
            .checked_add_days(Days::new(self.days))
            .ok_or(ScheduleError::DateOutOfRange(*current))
    }
}
