//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation; the catalog's decimal price
//! strings are parsed straight into minor units without going through
//! floating point.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    KES,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "KES").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KES => "KES",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol as shown on the storefront.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::KES => "KShs",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Number of minor units in one major unit.
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "KES" | "KSHS" => Some(Currency::KES),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from whole currency units.
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a price as it appears in product data or on a price tag.
    ///
    /// Accepts `"1200"`, `"1200.50"`, `"1,200"` and labelled forms such as
    /// `"KShs 1,200"`. The first numeric run is used; anything after it is
    /// ignored. A leading `.` starts the fractional part. Negative amounts are
    /// rejected.
    ///
    /// ```
    /// use eco_commerce::money::{Currency, Money};
    /// let price = Money::parse("KShs 1,250.5", Currency::KES).unwrap();
    /// assert_eq!(price.amount_cents, 125_050);
    /// ```
    pub fn parse(input: &str, currency: Currency) -> Result<Self, CommerceError> {
        let invalid = || CommerceError::InvalidPrice(input.to_string());

        let bytes = input.as_bytes();
        let start = (0..bytes.len())
            .find(|&i| {
                bytes[i].is_ascii_digit()
                    || (bytes[i] == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
            })
            .ok_or_else(invalid)?;
        if input[..start].trim_end().ends_with('-') {
            return Err(invalid());
        }
        let run: String = input[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .filter(|c| *c != ',')
            .collect();
        let run = run.trim_end_matches('.');

        let (whole, frac) = match run.split_once('.') {
            Some((w, f)) => (w, f),
            None => (run, ""),
        };

        let places = currency.decimal_places() as usize;
        if frac.contains('.') || frac.len() > places {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac_cents: i64 = if frac.is_empty() {
            0
        } else {
            format!("{:0<places$}", frac).parse().map_err(|_| invalid())?
        };

        let cents = whole
            .checked_mul(currency.minor_per_major())
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(invalid)?;

        Ok(Self::new(cents, currency))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Whole currency units, truncated.
    pub fn major(&self) -> i64 {
        self.amount_cents / self.currency.minor_per_major()
    }

    /// Format the amount without symbol (e.g., "1200.00").
    pub fn display_amount(&self) -> String {
        let per = self.currency.minor_per_major();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let places = self.currency.decimal_places() as usize;
        format!(
            "{sign}{}.{:0places$}",
            abs / per as u64,
            abs % per as u64
        )
    }

    /// Format with the currency symbol (e.g., "KShs 1200.00", "$12.50").
    pub fn display(&self) -> String {
        let symbol = self.currency.symbol();
        if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
            format!("{} {}", symbol, self.display_amount())
        } else {
            format!("{}{}", symbol, self.display_amount())
        }
    }

    /// Like [`Money::display`], but drops a zero fractional part
    /// ("KShs 1200" rather than "KShs 1200.00").
    pub fn display_compact(&self) -> String {
        let full = self.display();
        let zeros = format!(".{}", "0".repeat(self.currency.decimal_places() as usize));
        match full.strip_suffix(&zeros) {
            Some(trimmed) => trimmed.to_string(),
            None => full,
        }
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by a scalar, saturating at the `i64` bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }
}

impl Add for Money {
    type Output = Money;

    /// Saturating addition. The right-hand currency is ignored; callers keep
    /// a single currency per cart.
    fn add(self, other: Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(1200, Currency::KES);
        assert_eq!(m.amount_cents, 120_000);
        assert_eq!(m.major(), 1200);
    }

    #[test]
    fn test_parse_plain_and_decimal() {
        assert_eq!(
            Money::parse("1200", Currency::KES).unwrap().amount_cents,
            120_000
        );
        assert_eq!(
            Money::parse("1200.00", Currency::KES).unwrap().amount_cents,
            120_000
        );
        assert_eq!(
            Money::parse("49.9", Currency::USD).unwrap().amount_cents,
            4990
        );
    }

    #[test]
    fn test_parse_labelled_price() {
        let m = Money::parse("KShs 1,250", Currency::KES).unwrap();
        assert_eq!(m.amount_cents, 125_000);
    }

    #[test]
    fn test_parse_leading_decimal_point() {
        assert_eq!(Money::parse(".5", Currency::KES).unwrap().amount_cents, 50);
        assert_eq!(Money::parse("KShs .75", Currency::KES).unwrap().amount_cents, 75);
        assert_eq!(Money::parse("Ksh. 300", Currency::KES).unwrap().amount_cents, 30_000);
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            Money::parse("-200", Currency::KES),
            Err(CommerceError::InvalidPrice(_))
        ));
        assert!(Money::parse("KShs -1,200", Currency::KES).is_err());
        assert!(Money::parse("- 5", Currency::KES).is_err());
        assert!(Money::parse("-.5", Currency::KES).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("free", Currency::KES).is_err());
        assert!(Money::parse("", Currency::KES).is_err());
        assert!(Money::parse("1.234", Currency::KES).is_err());
        assert!(Money::parse("1.2.3", Currency::KES).is_err());
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(120_050, Currency::KES);
        assert_eq!(m.display(), "KShs 1200.50");

        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(-150, Currency::USD);
        assert_eq!(m.display_amount(), "-1.50");
    }

    #[test]
    fn test_money_display_compact() {
        assert_eq!(
            Money::from_major(1200, Currency::KES).display_compact(),
            "KShs 1200"
        );
        assert_eq!(
            Money::new(120_050, Currency::KES).display_compact(),
            "KShs 1200.50"
        );
    }

    #[test]
    fn test_money_addition_saturates() {
        let a = Money::new(i64::MAX, Currency::KES);
        let b = Money::new(1, Currency::KES);
        assert_eq!((a + b).amount_cents, i64::MAX);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let kes = Money::new(1000, Currency::KES);
        let usd = Money::new(1000, Currency::USD);
        assert!(kes.try_add(&usd).is_none());
        assert_eq!(kes.try_add(&kes).unwrap().amount_cents, 2000);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000, Currency::KES);
        assert_eq!((m * 3).amount_cents, 3000);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("kes"), Some(Currency::KES));
        assert_eq!(Currency::from_code("KShs"), Some(Currency::KES));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
