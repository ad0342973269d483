mod calendar_month;
mod fixed_length;
mod interface;

pub use interface::{Frequency, Recurrence};

#[cfg(test)]
pub use interface::MockRecurrence;
