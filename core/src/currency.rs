// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::Cost;

/// Locale used to format costs as currency text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Locale {
    /// US dollars, `$1,234.56`.
    #[cfg_attr(feature = "clap", clap(name = "en-US"))]
    #[serde(rename = "en-US")]
    EnUs,

    /// Brazilian real, `R$ 1.234,56`.
    #[default]
    #[cfg_attr(feature = "clap", clap(name = "pt-BR"))]
    #[serde(rename = "pt-BR")]
    PtBr,

    /// Euro with German separators, `1.234,56 €`.
    #[cfg_attr(feature = "clap", clap(name = "de-DE"))]
    #[serde(rename = "de-DE")]
    DeDe,

    /// Euro with French separators, `1 234,56 €`.
    #[cfg_attr(feature = "clap", clap(name = "fr-FR"))]
    #[serde(rename = "fr-FR")]
    FrFr,
}

struct CurrencyStyle {
    symbol: &'static str,
    symbol_first: bool,
    spacing: &'static str,
    group: &'static str,
    decimal: char,
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

impl Locale {
    /// Formats a cost as currency text.
    pub fn format(self, cost: Cost) -> String {
        let style = self.style();
        let units = group_thousands(cost.units(), style.group);
        let amount = format!("{units}{}{:02}", style.decimal, cost.fraction());
        match style.symbol_first {
            true => format!("{}{}{amount}", style.symbol, style.spacing),
            false => format!("{amount}{}{}", style.spacing, style.symbol),
        }
    }

    /// The BCP 47 tag of the locale.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PtBr => "pt-BR",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
        }
    }

    fn style(self) -> CurrencyStyle {
        match self {
            Locale::EnUs => CurrencyStyle {
                symbol: "$",
                symbol_first: true,
                spacing: "",
                group: ",",
                decimal: '.',
            },
            Locale::PtBr => CurrencyStyle {
                symbol: "R$",
                symbol_first: true,
                spacing: NBSP,
                group: ".",
                decimal: ',',
            },
            Locale::DeDe => CurrencyStyle {
                symbol: "€",
                symbol_first: false,
                spacing: NBSP,
                group: ".",
                decimal: ',',
            },
            Locale::FrFr => CurrencyStyle {
                symbol: "€",
                symbol_first: false,
                spacing: NBSP,
                group: NARROW_NBSP,
                decimal: ',',
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Locale::EnUs, Locale::PtBr, Locale::DeDe, Locale::FrFr]
            .into_iter()
            .find(|a| a.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown locale: {s}"))
    }
}

fn group_thousands(units: u64, sep: &str) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}

/// A cents-entry currency field.
///
/// The displayed text is always the canonical formatting of the current amount, never
/// the raw keystrokes. Digits typed are shifted in at the low end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInput {
    locale: Locale,
    value: Option<Cost>,
}

impl CurrencyInput {
    /// An empty field.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            value: None,
        }
    }

    /// A field pre-filled with the given amount.
    pub fn with_value(locale: Locale, value: Cost) -> Self {
        Self {
            locale,
            value: Some(value),
        }
    }

    /// The current amount, `None` if nothing has been entered.
    pub fn value(&self) -> Option<Cost> {
        self.value
    }

    /// The locale the field formats with.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The text to display.
    pub fn text(&self) -> String {
        self.value.map(|a| self.locale.format(a)).unwrap_or_default()
    }

    /// Replaces the field content with raw text, keeping only its digits.
    ///
    /// Blank text clears the field. Returns false if the digits overflow, in which case
    /// the field is unchanged.
    pub fn set_text(&mut self, raw: &str) -> bool {
        if raw.trim().is_empty() {
            self.value = None;
            return true;
        }

        match Cost::from_digits(raw) {
            Some(v) => {
                self.value = Some(v);
                true
            }
            None => {
                tracing::debug!(raw, "currency input overflow, ignored");
                false
            }
        }
    }

    /// Types one character. Non-digits are ignored.
    pub fn push(&mut self, c: char) -> bool {
        let Some(digit) = c.to_digit(10).and_then(|d| u8::try_from(d).ok()) else {
            return false;
        };

        match self.value.unwrap_or_default().push_digit(digit) {
            Some(v) => {
                self.value = Some(v);
                true
            }
            None => false,
        }
    }

    /// Deletes the lowest digit. An amount of zero clears the field.
    pub fn pop(&mut self) {
        self.value = match self.value {
            Some(v) if v == Cost::ZERO => None,
            Some(v) => Some(v.pop_digit()),
            None => None,
        };
    }
}
