use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Everything that can stop a rent schedule from being produced.
///
/// All variants are raised while the lease is being built or while stepping
/// through the calendar; a schedule is either complete or not returned at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Rent start date is required")]
    MissingStartDate,
    #[error("Rent frequency should be weekly, monthly or fortnightly")]
    InvalidFrequency(String),
    #[error("Payment method should be instant, credit_card or bank_transfer, got {0:?}")]
    InvalidPaymentMethod(String),
    #[error("Could not parse {field} {value:?}, expected a YYYY-MM-DD date")]
    InvalidDate { field: &'static str, value: String },
    #[error("Rent amount cannot be negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("Rent change effective {effective_date} cannot have a negative amount, got {amount}")]
    NegativeRentChange {
        effective_date: NaiveDate,
        amount: Decimal,
    },
    #[error("Could not read rent change: {0}")]
    InvalidRentChange(String),
    #[error("Date computation from {0} went past the supported calendar range")]
    DateOutOfRange(NaiveDate),
    #[error("Could not read vault: {0}")]
    Vault(String),
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::ScheduleError;

    #[test]
    fn messages__construction_errors() {
        assert_eq!(
            ScheduleError::MissingStartDate.to_string(),
            "Rent start date is required"
        );
        assert_eq!(
            ScheduleError::InvalidFrequency("yearly".into()).to_string(),
            "Rent frequency should be weekly, monthly or fortnightly"
        );
    }
}
