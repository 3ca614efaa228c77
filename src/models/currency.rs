//! Supported display currencies
//!
//! The currency only affects how amounts are shown; no conversion happens
//! when it changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::BudgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Pln,
    Mad,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Pln, Currency::Mad];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Pln => "PLN",
            Self::Mad => "MAD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Pln => "zł",
            Self::Mad => "DH",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Pln => "Polish Złoty",
            Self::Mad => "Moroccan Dirham",
        }
    }

    /// en-US style formatting, e.g. `$1,234.56`, `-€3.00`, `PLN 12.50`
    ///
    /// Currencies without a narrow en-US symbol are prefixed with their code.
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let digits = amount.format_grouped_abs();
        match self {
            Self::Usd | Self::Eur => format!("{}{}{}", sign, self.symbol(), digits),
            Self::Pln | Self::Mad => format!("{}{}\u{a0}{}", sign, self.code(), digits),
        }
    }

    /// Fallback formatting: symbol followed by a fixed two-decimal amount
    pub fn format_plain(&self, amount: Money) -> String {
        amount.format_with_symbol(self.symbol())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| BudgetError::UnknownCurrency(code.to_string()))
    }
}

/// Formats amounts for one currency, honouring the locale preference
#[derive(Debug, Clone, Copy)]
pub struct CurrencyFormatter {
    pub currency: Currency,
    pub localized: bool,
}

impl CurrencyFormatter {
    pub fn new(currency: Currency, localized: bool) -> Self {
        Self { currency, localized }
    }

    pub fn format(&self, amount: Money) -> String {
        if self.localized {
            self.currency.format(amount)
        } else {
            self.currency.format_plain(amount)
        }
    }
}
