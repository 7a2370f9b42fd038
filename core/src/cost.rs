// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use serde::de;

/// A non-negative amount of money, stored in minor units (cents).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u64);

impl Cost {
    /// Zero cost.
    pub const ZERO: Cost = Cost(0);

    /// Creates a cost from minor units.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a cost from whole major units, saturating on overflow.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// The amount in minor units.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Interprets the digit content of `raw` as a number of cents, ignoring every other
    /// character. Returns `None` if the digits do not fit.
    ///
    /// This is how a cents-entry keypad reads its text: `"$12.34"` and `"1234"` are both
    /// `12.34`, and `"R$ 0,05"` is `0.05`.
    pub fn from_digits(raw: &str) -> Option<Self> {
        raw.chars()
            .filter_map(|c| c.to_digit(10))
            .try_fold(0u64, |acc, d| acc.checked_mul(10)?.checked_add(u64::from(d)))
            .map(Self)
    }

    /// Shifts a digit in at the low end, as typing on a cents keypad does.
    #[must_use]
    pub fn push_digit(self, digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        self.0
            .checked_mul(10)
            .and_then(|a| a.checked_add(u64::from(digit)))
            .map(Self)
    }

    /// Drops the lowest digit.
    #[must_use]
    pub const fn pop_digit(self) -> Self {
        Self(self.0 / 10)
    }

    pub(crate) const fn units(self) -> u64 {
        self.0 / 100
    }

    pub(crate) const fn fraction(self) -> u64 {
        self.0 % 100
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.units(), self.fraction())
    }
}

/// Errors from parsing a decimal cost such as `5.50`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    /// The input is empty.
    #[error("cost is empty")]
    Empty,

    /// The input is not a non-negative decimal with at most two fraction digits.
    #[error("invalid cost '{0}', expected a non-negative amount like 5.50")]
    Invalid(String),

    /// The amount does not fit.
    #[error("cost '{0}' is too large")]
    Overflow(String),
}

impl FromStr for Cost {
    type Err = CostError;

    /// Parses a decimal amount, accepting either `.` or `,` as the decimal separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CostError::Empty);
        }

        let (int, frac) = match s.rfind(['.', ',']) {
            Some(i) => (&s[..i], &s[i + 1..]),
            None => (s, ""),
        };

        let all_digits = |a: &str| a.chars().all(|c| c.is_ascii_digit());
        if (int.is_empty() && frac.is_empty())
            || !all_digits(int)
            || !all_digits(frac)
            || frac.len() > 2
        {
            return Err(CostError::Invalid(s.to_string()));
        }

        let overflow = || CostError::Overflow(s.to_string());
        let units: u64 = match int {
            "" => 0,
            _ => int.parse().map_err(|_| overflow())?,
        };
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| overflow())? * 10,
            _ => frac.parse().map_err(|_| overflow())?,
        };

        units
            .checked_mul(100)
            .and_then(|a| a.checked_add(cents))
            .map(Self)
            .ok_or_else(overflow)
    }
}

impl serde::Serialize for Cost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Cost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CostVisitor;

        impl de::Visitor<'_> for CostVisitor {
            type Value = Cost;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a non-negative amount like "1000.00" or 1000"#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .checked_mul(100)
                    .map(Cost)
                    .ok_or_else(|| de::Error::custom(format!("cost '{value}' is too large")))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match u64::try_from(value) {
                    Ok(v) => self.visit_u64(v),
                    Err(_) => Err(de::Error::custom(format!("cost '{value}' is negative"))),
                }
            }
        }

        deserializer.deserialize_any(CostVisitor)
    }
}
