use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use rust_decimal::{Decimal, RoundingStrategy};

use tillkit_core::{DomainError, DomainResult, ValueObject};

use crate::denomination::ZERO;

/// An immutable amount of cash held as a breakdown of denominations.
///
/// The breakdown maps each denomination value (an exact decimal, e.g. `0.25`)
/// to the number of notes or coins held. Keys are ordered by value, so the
/// change-making algorithms can walk them from the largest note down.
///
/// Equality and hashing use the total value only: one 5.00 note equals five
/// 1.00 notes.
///
/// Every constructor checks that the total fits in a `Decimal`, so reading
/// the total back never overflows.
#[derive(Clone)]
pub struct MoneyAmount {
    denominations: BTreeMap<Decimal, u64>,
}

impl MoneyAmount {
    /// Create an amount holding `count` notes of a single denomination.
    ///
    /// Fails with [`DomainError::InvalidArgument`] if `value` or `count` is
    /// negative.
    pub fn from_single_denomination(value: Decimal, count: i64) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_argument(format!(
                "denomination value must be non-negative, got {value}"
            )));
        }

        let count = u64::try_from(count).map_err(|_| {
            DomainError::invalid_argument(format!(
                "denomination count must be non-negative, got {count}"
            ))
        })?;

        let amount = Self::single(value, count);
        amount.ensure_representable()?;
        Ok(amount)
    }

    /// Infallible constructor for values already known to be valid.
    pub(crate) fn single(value: Decimal, count: u64) -> Self {
        let mut denominations = BTreeMap::new();
        denominations.insert(value, count);
        Self { denominations }
    }

    /// Trusted constructor: takes the breakdown as-is.
    pub(crate) fn from_mapping(denominations: BTreeMap<Decimal, u64>) -> Self {
        Self { denominations }
    }

    pub(crate) fn breakdown(&self) -> &BTreeMap<Decimal, u64> {
        &self.denominations
    }

    fn ensure_representable(&self) -> DomainResult<()> {
        match checked_total_of(&self.denominations) {
            Some(_) => Ok(()),
            None => Err(DomainError::invalid_argument(
                "total value exceeds the representable decimal range",
            )),
        }
    }

    /// Exact total value of the breakdown.
    pub fn total(&self) -> Decimal {
        // Constructors reject breakdowns whose total would overflow.
        checked_total_of(&self.denominations).unwrap_or(Decimal::MAX)
    }

    /// Total value as a float, for display and query convenience only.
    ///
    /// Goes through the decimal's string form so the float is the correctly
    /// rounded nearest value (`0.76` stays `0.76`).
    pub fn amount(&self) -> f64 {
        self.total()
            .normalize()
            .to_string()
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Number of notes held for `value` (0 when absent).
    pub fn count_of(&self, value: Decimal) -> u64 {
        self.denominations.get(&value).copied().unwrap_or(0)
    }

    /// Iterate the breakdown in ascending denomination order.
    pub fn denominations(&self) -> impl DoubleEndedIterator<Item = (Decimal, u64)> + '_ {
        self.denominations
            .iter()
            .map(|(value, count)| (*value, *count))
    }

    pub fn is_zero(&self) -> bool {
        self.total().is_zero()
    }

    /// Multiply every count by `count`.
    ///
    /// `times(0)` keeps the denomination keys with zero counts.
    pub fn times(&self, count: i64) -> DomainResult<Self> {
        let factor = u64::try_from(count).map_err(|_| {
            DomainError::invalid_argument(format!("multiplier must be non-negative, got {count}"))
        })?;

        let mut result = self.denominations.clone();
        for (value, held) in result.iter_mut() {
            let scaled = held.checked_mul(factor).ok_or_else(|| {
                DomainError::invalid_argument(format!(
                    "count overflow multiplying {held} x {value} by {factor}"
                ))
            })?;
            *held = scaled;
        }

        let scaled = Self::from_mapping(result);
        scaled.ensure_representable()?;
        Ok(scaled)
    }

    /// Union of both breakdowns, counts added per denomination.
    ///
    /// Fails with [`DomainError::InvalidArgument`] if a count or the total
    /// overflows.
    pub fn plus(&self, other: &MoneyAmount) -> DomainResult<MoneyAmount> {
        let mut result = self.denominations.clone();
        for (value, count) in &other.denominations {
            let held = result.entry(*value).or_insert(0);
            *held = held.checked_add(*count).ok_or_else(|| {
                DomainError::invalid_argument(format!("count overflow adding {count} x {value}"))
            })?;
        }

        let merged = Self::from_mapping(result);
        merged.ensure_representable()?;
        Ok(merged)
    }

    /// Sum any number of amounts. An empty input yields [`ZERO`].
    pub fn sum<'a, I>(items: I) -> DomainResult<MoneyAmount>
    where
        I: IntoIterator<Item = &'a MoneyAmount>,
    {
        items
            .into_iter()
            .try_fold(ZERO.clone(), |acc, item| acc.plus(item))
    }
}

/// Σ(value x count), or `None` if any step overflows.
pub(crate) fn checked_total_of(denominations: &BTreeMap<Decimal, u64>) -> Option<Decimal> {
    denominations
        .iter()
        .try_fold(Decimal::ZERO, |acc, (value, count)| {
            value
                .checked_mul(Decimal::from(*count))
                .and_then(|part| acc.checked_add(part))
        })
}

impl ValueObject for MoneyAmount {}

impl PartialEq for MoneyAmount {
    fn eq(&self, other: &Self) -> bool {
        self.total() == other.total()
    }
}

impl Eq for MoneyAmount {}

impl Hash for MoneyAmount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Decimal hashes its normalized form, so 5 and 5.00 collide as required.
        self.total().hash(state);
    }
}

impl core::fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut rounded = self
            .total()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        core::fmt::Display::fmt(&rounded, f)
    }
}

impl core::fmt::Debug for MoneyAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MoneyAmount")
            .field("total", &self.total())
            .field("denominations", &self.denominations)
            .finish()
    }
}
