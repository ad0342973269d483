use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;

use crate::error::ScheduleError;
use crate::frequency::calendar_month::CalendarMonthRecurrence;
use crate::frequency::fixed_length::FixedLengthRecurrence;

static WEEKLY: FixedLengthRecurrence = FixedLengthRecurrence { days: 7 };
static FORTNIGHTLY: FixedLengthRecurrence = FixedLengthRecurrence { days: 14 };
static CALENDAR_MONTH: CalendarMonthRecurrence = CalendarMonthRecurrence {};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
    Fortnightly,
    Monthly,
}

impl Frequency {
    fn unpack(&self) -> &'static dyn Recurrence {
        match self {
            Frequency::Weekly => &WEEKLY,
            Frequency::Fortnightly => &FORTNIGHTLY,
            Frequency::Monthly => &CALENDAR_MONTH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Fortnightly => "fortnightly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl Recurrence for Frequency {
    fn next_occurrence(
        &self,
        current: &NaiveDate,
        anchor_day: u32,
    ) -> Result<NaiveDate, ScheduleError> {
        self.unpack().next_occurrence(current, anchor_day)
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Frequency::Weekly),
            "fortnightly" => Ok(Frequency::Fortnightly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(ScheduleError::InvalidFrequency(other.to_string())),
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Steps from one occurrence date to the next.
///
/// `anchor_day` is the day of month the lease started on. Implementations that
/// work in whole days ignore it.
#[cfg_attr(test, automock)]
pub trait Recurrence {
    fn next_occurrence(&self, current: &NaiveDate, anchor_day: u32)
        -> Result<NaiveDate, ScheduleError>;
}
