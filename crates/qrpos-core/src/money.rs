//! # Money Module
//!
//! Provides the `Money` type for handling Thai Baht amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer satang (1/100 THB)                               │
//! │    ฿45.00 × 2 + ฿35.00 = 4500 × 2 + 3500 = 12500 satang = ฿125.00       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use qrpos_core::money::Money;
//!
//! let coffee = Money::from_major(45);        // ฿45.00
//! let line = coffee * 2;                     // ฿90.00
//! let total = line + Money::from_minor(3500); // ฿125.00
//! assert_eq!(total.to_string(), "฿125.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Minor units per major unit (satang per baht).
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in satang, the smallest THB unit.
///
/// Serializes as a bare integer so the persisted blob and QR payloads stay
/// plain JSON numbers.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem.price ──► CartItem::line_total ──► cart total
///                                                                  │
/// OrderItem.price × quantity ──► Order.total ◄─────────────────────┘
///                                   │
///                                   └──► Dashboard revenue / profit
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from satang.
    ///
    /// ## Example
    /// ```rust
    /// use qrpos_core::money::Money;
    ///
    /// let price = Money::from_minor(4550); // ฿45.50
    /// assert_eq!(price.minor(), 4550);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole baht.
    ///
    /// ## Example
    /// ```rust
    /// use qrpos_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(450).minor(), 45_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the value in satang.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-baht portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the satang portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use qrpos_core::money::Money;
    ///
    /// let unit_price = Money::from_major(280);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_major(840));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns the given share of this amount, in basis points
    /// (3000 = 30%), rounding half up on satang.
    ///
    /// ## Example
    /// ```rust
    /// use qrpos_core::money::Money;
    ///
    /// let revenue = Money::from_major(1820);
    /// assert_eq!(revenue.percentage(3000), Money::from_major(546));
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        let share = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money(share as i64)
    }
}

/// Inserts `,` between every group of three digits.
///
/// ```rust
/// use qrpos_core::money::group_thousands;
///
/// assert_eq!(group_thousands(1_234_567), "1,234,567");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Baht with grouped thousands, e.g. `฿1,180.00`.
///
/// For debugging and logs. The front-ends format through the configured
/// currency settings.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}฿{}.{:02}",
            sign,
            group_thousands(self.major().unsigned_abs()),
            self.minor_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_and_minor() {
        let money = Money::from_minor(4550);
        assert_eq!(money.minor(), 4550);
        assert_eq!(money.major(), 45);
        assert_eq!(money.minor_part(), 50);

        assert_eq!(Money::from_major(45), Money::from_minor(4500));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(125).to_string(), "฿125.00");
        assert_eq!(Money::from_major(1180).to_string(), "฿1,180.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-฿5.50");
        assert_eq!(Money::from_minor(-50).to_string(), "-฿0.50");
        assert_eq!(Money::zero().to_string(), "฿0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((a * 3).minor(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_major(1);
        assert_eq!(c, Money::from_major(14));
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_major(90), Money::from_major(35)];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref, Money::from_major(125));
        assert_eq!(by_value, by_ref);
        assert_eq!(std::iter::empty::<Money>().sum::<Money>(), Money::zero());
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(Money::from_minor(100).percentage(3000).minor(), 30);
        // 5 × 30% = 1.5 → 2
        assert_eq!(Money::from_minor(5).percentage(3000).minor(), 2);
        assert_eq!(Money::zero().percentage(3000), Money::zero());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Money::from_major(45)).unwrap();
        assert_eq!(json, "4500");
        let back: Money = serde_json::from_str("12500").unwrap();
        assert_eq!(back, Money::from_major(125));
    }

    #[test]
    fn test_zero_and_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_minor(1).is_positive());
        assert!(Money::from_minor(-1).is_negative());
    }
}
