use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::ScheduleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Instant,
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    /// Days between initiating a payment and the money landing.
    pub fn processing_days(&self) -> u64 {
        match self {
            PaymentMethod::Instant => 0,
            PaymentMethod::CreditCard => 2,
            PaymentMethod::BankTransfer => 3,
        }
    }

    /// Latest date a payment can be initiated to settle on `due_date`.
    pub fn payment_date_for(&self, due_date: &NaiveDate) -> Result<NaiveDate, ScheduleError> {
        due_date
            .checked_sub_days(Days::new(self.processing_days()))
            .ok_or(ScheduleError::DateOutOfRange(*due_date))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Instant => "instant",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instant" => Ok(PaymentMethod::Instant),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            other => Err(ScheduleError::InvalidPaymentMethod(other.to_string())),
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
