use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::seat::{SeatCategory, SeatId};

/// Sub-units per whole currency unit. Backend prices such as `8.333` are
/// kept exactly; only presentation rounds to cents.
const UNITS_PER_DOLLAR: u64 = 1_000_000;
const UNITS_PER_CENT: u64 = UNITS_PER_DOLLAR / 100;

/// An amount of money in millionths of a currency unit; integer arithmetic
/// keeps totals exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents.saturating_mul(UNITS_PER_CENT))
    }

    /// Converts a decimal amount such as `12.5` without rounding it to
    /// cents. Negative, NaN and infinite amounts are rejected.
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let units = (amount * UNITS_PER_DOLLAR as f64).round();
        if units > u64::MAX as f64 {
            return None;
        }
        Some(Self(units as u64))
    }

    /// Nearest whole cent, halves rounded up.
    pub const fn cents(&self) -> u64 {
        self.0.saturating_add(UNITS_PER_CENT / 2) / UNITS_PER_CENT
    }

    /// Amount without the currency sign, rounded to two decimals.
    pub fn to_decimal_string(&self) -> String {
        let cents = self.cents();
        format!("{}.{:02}", cents / 100, cents % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_decimal_string())
    }
}

/// Per-auditorium unit prices, one per seat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    pub premium_price: Money,
    pub normal_price: Money,
}

impl PricingTable {
    pub fn new(premium_price: Money, normal_price: Money) -> Self {
        Self { premium_price, normal_price }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatPrice {
    pub seat_id: SeatId,
    pub category: SeatCategory,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub per_seat: Vec<SeatPrice>,
    pub total: Money,
}

impl PriceBreakdown {
    /// `$12.50 + $8.00`
    pub fn summary(&self) -> String {
        self.per_seat
            .iter()
            .map(|p| p.price.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
