use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::amounts::Figure;
use crate::error::ScheduleError;
use crate::frequency::Frequency;
use crate::occurrences::Termination;
use crate::payment_method::PaymentMethod;
use crate::rent_changes::{parse_rent_changes, RentChange};
use crate::vault::VaultReadable;

pub const DEFAULT_MAX_OCCURRENCES: u32 = 12;
const DEFAULT_FREQUENCY: &str = "monthly";
const DEFAULT_PAYMENT_METHOD: &str = "instant";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ScheduleError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// The `rent` section of the vault, as written by the user.
///
/// Missing fields fall back to: amount 0, monthly, instant payment, 12
/// occurrences. Defaults are substituted before validation so a default and
/// an explicit value go through the same checks.
#[derive(Deserialize, Debug, Clone)]
pub struct RentInput {
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Figure,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    /// A single change object or a list of them.
    #[serde(default)]
    pub rent_changes: Option<Value>,
    #[serde(default)]
    pub max_occurrences: Option<u32>,
    #[serde(default)]
    pub termination: Termination,
}

impl VaultReadable for RentInput {
    const KEY: &'static str = "rent";
}

impl RentInput {
    pub fn lease_terms(&self) -> Result<LeaseTerms, ScheduleError> {
        let raw_start_date = self
            .start_date
            .as_deref()
            .ok_or(ScheduleError::MissingStartDate)?;
        let frequency: Frequency = self
            .frequency
            .as_deref()
            .unwrap_or(DEFAULT_FREQUENCY)
            .parse()?;
        let start_date = parse_date("start_date", raw_start_date)?;
        let end_date = self
            .end_date
            .as_deref()
            .map(|raw_end_date| parse_date("end_date", raw_end_date))
            .transpose()?;
        let payment_method: PaymentMethod = self
            .payment_method
            .as_deref()
            .unwrap_or(DEFAULT_PAYMENT_METHOD)
            .parse()?;

        if end_date.is_some()
            && self.max_occurrences.is_some()
            && self.termination == Termination::EndDateOverridesCount
        {
            warn!("max_occurrences is ignored because an end_date is set");
        }

        let terms = LeaseTerms::new(self.amount, frequency, start_date, payment_method)?
            .with_end_date(end_date)
            .with_max_occurrences(self.max_occurrences.unwrap_or(DEFAULT_MAX_OCCURRENCES))
            .with_termination(self.termination);

        debug!(
            %frequency,
            %start_date,
            %payment_method,
            anchor_day = terms.anchor_day(),
            "lease terms validated"
        );
        Ok(terms)
    }

    pub fn rent_changes(&self) -> Result<Vec<RentChange>, ScheduleError> {
        parse_rent_changes(self.rent_changes.as_ref())
    }
}

/// Validated lease. The anchor day is taken from the start date once and
/// never moves afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseTerms {
    base_amount: Figure,
    frequency: Frequency,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    payment_method: PaymentMethod,
    max_occurrences: u32,
    termination: Termination,
    anchor_day: u32,
}

impl LeaseTerms {
    pub fn new(
        base_amount: Figure,
        frequency: Frequency,
        start_date: NaiveDate,
        payment_method: PaymentMethod,
    ) -> Result<LeaseTerms, ScheduleError> {
        if base_amount.is_sign_negative() {
            return Err(ScheduleError::NegativeAmount(base_amount));
        }
        Ok(LeaseTerms {
            base_amount,
            frequency,
            start_date,
            end_date: None,
            payment_method,
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
            termination: Termination::default(),
            anchor_day: start_date.day(),
        })
    }

    pub fn with_end_date(self, end_date: Option<NaiveDate>) -> LeaseTerms {
        LeaseTerms { end_date, ..self }
    }

    pub fn with_max_occurrences(self, max_occurrences: u32) -> LeaseTerms {
        LeaseTerms {
            max_occurrences,
            ..self
        }
    }

    pub fn with_termination(self, termination: Termination) -> LeaseTerms {
        LeaseTerms {
            termination,
            ..self
        }
    }

    pub fn base_amount(&self) -> Figure {
        self.base_amount
    }
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
    pub fn max_occurrences(&self) -> u32 {
        self.max_occurrences
    }
    pub fn termination(&self) -> Termination {
        self.termination
    }
    pub fn anchor_day(&self) -> u32 {
        self.anchor_day
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::{from_value, json};

    use super::{LeaseTerms, RentInput, DEFAULT_MAX_OCCURRENCES};
    use crate::error::ScheduleError;
    use crate::frequency::Frequency;
    use crate::occurrences::Termination;
    use crate::payment_method::PaymentMethod;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn input(value: serde_json::Value) -> RentInput {
        from_value(value).expect("Can deserialize rent input")
    }

    #[test]
    fn lease_terms__defaults() {
        let terms = input(json!({"start_date": "2024-01-31"}))
            .lease_terms()
            .unwrap();

        assert_eq!(terms.base_amount(), dec!(0));
        assert_eq!(terms.frequency(), Frequency::Monthly);
        assert_eq!(terms.payment_method(), PaymentMethod::Instant);
        assert_eq!(terms.max_occurrences(), DEFAULT_MAX_OCCURRENCES);
        assert_eq!(terms.end_date(), None);
        assert_eq!(terms.termination(), Termination::EndDateOverridesCount);
        assert_eq!(terms.anchor_day(), 31);
    }

    #[test]
    fn lease_terms__all_fields() {
        let terms = input(json!({
            "amount": "950.75",
            "frequency": "fortnightly",
            "start_date": "2024-03-04",
            "end_date": "2024-09-01",
            "payment_method": "bank_transfer",
            "max_occurrences": 4,
            "termination": "first_bound_reached"
        }))
        .lease_terms()
        .unwrap();

        let expected = LeaseTerms::new(
            dec!(950.75),
            Frequency::Fortnightly,
            date(2024, 3, 4),
            PaymentMethod::BankTransfer,
        )
        .unwrap()
        .with_end_date(Some(date(2024, 9, 1)))
        .with_max_occurrences(4)
        .with_termination(Termination::FirstBoundReached);

        assert_eq!(terms, expected);
    }

    #[test]
    fn lease_terms__missing_start_date() {
        let error = input(json!({
            "amount": 1000,
            "frequency": "monthly",
            "end_date": "2024-04-01"
        }))
        .lease_terms()
        .unwrap_err();

        assert_eq!(error, ScheduleError::MissingStartDate);
        assert_eq!(error.to_string(), "Rent start date is required");
    }

    #[test]
    fn lease_terms__missing_start_date_reported_before_bad_frequency() {
        assert_eq!(
            input(json!({"frequency": "yearly"})).lease_terms(),
            Err(ScheduleError::MissingStartDate)
        )
    }

    #[test]
    fn lease_terms__unknown_frequency() {
        let error = input(json!({"start_date": "2024-01-01", "frequency": "yearly"}))
            .lease_terms()
            .unwrap_err();

        assert_eq!(error, ScheduleError::InvalidFrequency("yearly".into()));
        assert_eq!(
            error.to_string(),
            "Rent frequency should be weekly, monthly or fortnightly"
        );
    }

    #[test]
    fn lease_terms__unknown_payment_method() {
        assert_eq!(
            input(json!({"start_date": "2024-01-01", "payment_method": "cash"})).lease_terms(),
            Err(ScheduleError::InvalidPaymentMethod("cash".into()))
        )
    }

    #[test]
    fn lease_terms__unparseable_start_date() {
        assert_eq!(
            input(json!({"start_date": "January 1st"})).lease_terms(),
            Err(ScheduleError::InvalidDate {
                field: "start_date",
                value: "January 1st".into()
            })
        )
    }

    #[test]
    fn lease_terms__unparseable_end_date() {
        assert_eq!(
            input(json!({"start_date": "2024-01-01", "end_date": "2024-13-01"})).lease_terms(),
            Err(ScheduleError::InvalidDate {
                field: "end_date",
                value: "2024-13-01".into()
            })
        )
    }

    #[test]
    fn lease_terms__negative_amount() {
        assert_eq!(
            input(json!({"start_date": "2024-01-01", "amount": -1})).lease_terms(),
            Err(ScheduleError::NegativeAmount(dec!(-1)))
        )
    }

    #[test]
    fn rent_changes__single_object_normalized() {
        let rent_input = input(json!({
            "start_date": "2024-01-01",
            "rent_changes": {"effective_date": "2024-02-15", "amount": 1200}
        }));

        let changes = rent_input.rent_changes().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].effective_date, date(2024, 2, 15));
        assert_eq!(changes[0].amount, dec!(1200));
    }

    #[test]
    fn anchor_day__fixed_at_construction() {
        let terms = LeaseTerms::new(
            dec!(1000),
            Frequency::Monthly,
            date(2024, 1, 31),
            PaymentMethod::Instant,
        )
        .unwrap()
        .with_max_occurrences(3);

        assert_eq!(terms.anchor_day(), 31);
    }
}
