use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::amounts::Figure;
use crate::error::ScheduleError;
use crate::lease::{LeaseTerms, RentInput};
use crate::occurrences::generate_dates;
use crate::payment_method::PaymentMethod;
use crate::rent_changes::{parse_rent_changes, resolve_amount, RentChange};
use crate::vault::{RentChangesVaultValue, Vault, VaultReadable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub payment_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Figure,
    pub method: PaymentMethod,
}

/* Entrypoint */
pub struct RentScheduler {
    terms: LeaseTerms,
    rent_changes: Vec<RentChange>,
}

impl RentScheduler {
    /// Accepts a list of changes, or a single one through `Some(change)`.
    pub fn new<C: IntoIterator<Item = RentChange>>(
        terms: LeaseTerms,
        rent_changes: C,
    ) -> RentScheduler {
        RentScheduler {
            terms,
            rent_changes: rent_changes.into_iter().collect(),
        }
    }

    pub fn from_input(input: &RentInput) -> Result<RentScheduler, ScheduleError> {
        let terms = input.lease_terms()?;
        Ok(RentScheduler::new(terms, input.rent_changes()?))
    }

    /// Reads the `rent` section and the optional top-level `rent_changes`
    /// section. Changes from the latter are listed after the inline ones.
    pub fn from_vault_values<V: Vault>(
        vault: &V,
        max_occurrences: Option<u32>,
    ) -> Result<RentScheduler, ScheduleError> {
        let mut input = RentInput::from_vault(vault)?;
        if max_occurrences.is_some() {
            input.max_occurrences = max_occurrences;
        }

        let mut scheduler = RentScheduler::from_input(&input)?;
        let extra_rent_changes = RentChangesVaultValue::from_vault(vault)?;
        scheduler
            .rent_changes
            .extend(parse_rent_changes(extra_rent_changes.as_ref())?);
        Ok(scheduler)
    }

    pub fn terms(&self) -> &LeaseTerms {
        &self.terms
    }

    /// One entry per occurrence, in occurrence order.
    pub fn generate(&self) -> Result<Vec<ScheduleEntry>, ScheduleError> {
        let terms = &self.terms;
        let method = terms.payment_method();

        let schedule = generate_dates(
            terms.start_date(),
            &terms.frequency(),
            terms.anchor_day(),
            terms.end_date(),
            terms.max_occurrences(),
            terms.termination(),
        )?
        .iter()
        .map(|occurrence_date| -> Result<ScheduleEntry, ScheduleError> {
            Ok(ScheduleEntry {
                payment_date: method.payment_date_for(occurrence_date)?,
                amount: resolve_amount(occurrence_date, terms.base_amount(), &self.rent_changes),
                method,
            })
        })
        .collect::<Result<Vec<ScheduleEntry>, ScheduleError>>()?;

        debug!(
            entries = schedule.len(),
            frequency = %terms.frequency(),
            rent_changes = self.rent_changes.len(),
            "rent schedule generated"
        );
        Ok(schedule)
    }
}
