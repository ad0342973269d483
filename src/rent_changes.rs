use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{from_value, Value};

use crate::amounts::Figure;
use crate::error::ScheduleError;
use crate::lease::parse_date;

/// New rent amount, due from `effective_date` until a later change replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentChange {
    pub effective_date: NaiveDate,
    pub amount: Figure,
}

#[derive(Deserialize)]
struct RawRentChange {
    effective_date: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    amount: Figure,
}

impl RawRentChange {
    fn into_rent_change(self) -> Result<RentChange, ScheduleError> {
        let effective_date = parse_date("effective_date", &self.effective_date)?;
        if self.amount.is_sign_negative() {
            return Err(ScheduleError::NegativeRentChange {
                effective_date,
                amount: self.amount,
            });
        }
        Ok(RentChange {
            effective_date,
            amount: self.amount,
        })
    }
}

fn read_raw_rent_change(value: &Value) -> Result<RawRentChange, ScheduleError> {
    from_value(value.clone()).map_err(|why| ScheduleError::InvalidRentChange(why.to_string()))
}

/// Reads rent changes given either as a single object or as a list of them.
pub fn parse_rent_changes(raw: Option<&Value>) -> Result<Vec<RentChange>, ScheduleError> {
    let raw_changes: Vec<RawRentChange> = match raw {
        None | Some(Value::Null) => vec![],
        Some(object @ Value::Object(_)) => vec![read_raw_rent_change(object)?],
        Some(Value::Array(items)) => items
            .iter()
            .map(read_raw_rent_change)
            .collect::<Result<Vec<RawRentChange>, ScheduleError>>()?,
        Some(other) => {
            return Err(ScheduleError::InvalidRentChange(format!(
                "expected an object or a list of objects, got {}",
                other
            )))
        }
    };

    raw_changes
        .into_iter()
        .map(RawRentChange::into_rent_change)
        .collect()
}

/// Rent due on `occurrence_date`.
///
/// The latest change effective on or before the date wins. When two changes
/// share that effective date, the one listed last wins.
pub fn resolve_amount(
    occurrence_date: &NaiveDate,
    base_amount: Figure,
    rent_changes: &[RentChange],
) -> Figure {
    rent_changes
        .iter()
        .filter(|change| change.effective_date <= *occurrence_date)
        .max_by_key(|change| change.effective_date)
        .map(|change| change.amount)
        .unwrap_or(base_amount)
}
