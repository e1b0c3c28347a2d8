//! Change-making: subtracting one cash amount from another.
//!
//! Two algorithms live here:
//!
//! - [`MoneyAmount::minus`] treats the deduction as a single value and pays it
//!   out with one greedy sweep, largest denomination first. It is fast but
//!   incomplete: it never backs off a large note to try smaller ones.
//! - [`MoneyAmount::minus_complex`] treats the deduction as an exact set of
//!   notes and, when a requested denomination is not held, searches the
//!   drawer for other notes worth exactly the same. It is slower and kept
//!   for compatibility.
//!
//! Neither returns a partial result. On failure the caller gets
//! [`DomainError::InsufficientChange`] and both inputs are untouched.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use tillkit_core::{DomainError, DomainResult};

use crate::amount::{MoneyAmount, checked_total_of};

impl MoneyAmount {
    /// Deduct `other`'s total value from this breakdown.
    ///
    /// Only `other.total()` matters; its breakdown is ignored. Walks the held
    /// denominations from largest to smallest, taking as many notes of each as
    /// fit in what is still owed. The result keeps every denomination key of
    /// `self`.
    ///
    /// Fails with [`DomainError::InsufficientChange`] when the sweep cannot
    /// reach the exact value, including cases a smaller combination could
    /// have covered (e.g. `0.25 + 3 x 0.10` minus `0.30`).
    pub fn minus(&self, other: &MoneyAmount) -> DomainResult<MoneyAmount> {
        let mut result = self.breakdown().clone();
        let mut remaining = other.total();

        for (&value, &held) in self.breakdown().iter().rev() {
            // A zero note never pays anything off and would divide by zero.
            if value.is_zero() {
                continue;
            }

            let taken = whole_multiples(remaining, value).min(held);
            result.insert(value, held - taken);
            remaining -= value_of(value, taken)?;
        }

        if !remaining.is_zero() {
            tracing::debug!(
                available = %self.total(),
                requested = %other.total(),
                %remaining,
                "greedy change sweep left a remainder"
            );
            return Err(DomainError::insufficient_change(format!(
                "{remaining} of {} could not be paid out",
                other.total()
            )));
        }

        Ok(MoneyAmount::from_mapping(result))
    }

    /// Remove `other`'s notes from this breakdown, substituting notes that
    /// are not held.
    ///
    /// Counts are deducted per denomination. For each denomination that ends
    /// up owed, the original breakdown is swept from largest to smallest for
    /// other notes worth exactly the owed value; those notes are consumed in
    /// its place.
    ///
    /// Fails with [`DomainError::InsufficientChange`] when no exact substitute
    /// exists, when a candidate note does not divide the owed value evenly,
    /// or when substitutes would consume notes that were already paid out.
    #[deprecated(note = "use `MoneyAmount::minus`, which deducts by value and is much cheaper")]
    pub fn minus_complex(&self, other: &MoneyAmount) -> DomainResult<MoneyAmount> {
        let mut working: BTreeMap<Decimal, i128> = self
            .breakdown()
            .iter()
            .map(|(value, count)| (*value, i128::from(*count)))
            .collect();

        for (value, count) in other.breakdown() {
            *working.entry(*value).or_insert(0) -= i128::from(*count);
        }

        let owed: Vec<(Decimal, u64)> = working
            .iter()
            .filter(|(_, count)| **count < 0)
            .map(|(value, count)| {
                let notes = u64::try_from(count.unsigned_abs()).unwrap_or(u64::MAX);
                (*value, notes)
            })
            .collect();

        for (value, notes) in owed {
            let owed_amount = value_of(value, notes)?;
            let substitute = self.substitute_for(value, owed_amount)?;

            if checked_total_of(&substitute) != Some(owed_amount) {
                tracing::debug!(
                    denomination = %value,
                    notes,
                    %owed_amount,
                    "no exact substitute held"
                );
                return Err(DomainError::insufficient_change(format!(
                    "no combination of held notes is worth {notes} x {value}"
                )));
            }

            tracing::trace!(denomination = %value, ?substitute, "substituting owed notes");

            working.insert(value, 0);
            for (sub_value, sub_count) in substitute {
                *working.entry(sub_value).or_insert(0) -= i128::from(sub_count);
            }
        }

        let mut result = BTreeMap::new();
        for (value, count) in working {
            let count = u64::try_from(count).map_err(|_| {
                tracing::debug!(denomination = %value, %count, "substitution overdrew a denomination");
                DomainError::insufficient_change(format!(
                    "not enough {value} notes left to substitute"
                ))
            })?;
            result.insert(value, count);
        }

        Ok(MoneyAmount::from_mapping(result))
    }

    /// Greedy pick of held notes (other than `owed_value`) worth at most
    /// `owed_amount`, largest first.
    fn substitute_for(
        &self,
        owed_value: Decimal,
        owed_amount: Decimal,
    ) -> DomainResult<BTreeMap<Decimal, u64>> {
        let mut substitute = BTreeMap::new();
        let mut still_owed = owed_amount;

        for (&value, &held) in self.breakdown().iter().rev() {
            if value.is_zero() || value == owed_value || value > still_owed {
                continue;
            }

            if !(still_owed % value).is_zero() {
                tracing::debug!(
                    candidate = %value,
                    %still_owed,
                    "candidate note does not divide the owed value"
                );
                return Err(DomainError::insufficient_change(format!(
                    "{still_owed} is not a whole number of {value} notes"
                )));
            }

            let taken = whole_multiples(still_owed, value).min(held);
            substitute.insert(value, taken);
            still_owed -= value_of(value, taken)?;
        }

        Ok(substitute)
    }
}

/// Value of `count` notes of `value`, failing instead of overflowing.
fn value_of(value: Decimal, count: u64) -> DomainResult<Decimal> {
    value.checked_mul(Decimal::from(count)).ok_or_else(|| {
        DomainError::insufficient_change(format!(
            "{count} x {value} exceeds the representable decimal range"
        ))
    })
}

/// How many whole `value` notes fit in `amount` (`value` must be non-zero).
fn whole_multiples(amount: Decimal, value: Decimal) -> u64 {
    ((amount - amount % value) / value)
        .to_u64()
        .unwrap_or(u64::MAX)
}
