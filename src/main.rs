mod amounts;
mod cli;
mod error;
mod frequency;
mod lease;
mod occurrences;
mod payment_method;
mod rent_changes;
mod schedule;
mod vault;

use crate::cli::rent_schedule;
fn main() {
    rent_schedule()
}
