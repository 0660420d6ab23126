use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO 4217 code of one of the currencies the ledger keeps a balance in.
///
/// The set is closed: every balance, debt entry and transaction is
/// denominated in one of these, and unknown codes are rejected at the
/// boundary by [`FromStr`].
///
/// # Examples
///
/// ```
/// use budget_ledger::core::currency::CurrencyCode;
///
/// let usd: CurrencyCode = "USD".parse().unwrap();
/// assert_eq!(usd, CurrencyCode::Usd);
/// assert_eq!(usd.symbol(), "$");
/// assert!("GBP".parse::<CurrencyCode>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Rub,
    Krw,
}

impl CurrencyCode {
    /// Every supported currency, in display order.
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Rub,
        CurrencyCode::Krw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Rub => "RUB",
            CurrencyCode::Krw => "KRW",
        }
    }

    /// Display symbol placed in front of amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Rub => "₽",
            CurrencyCode::Krw => "₩",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| LedgerError::UnknownCurrency(s.to_string()))
    }
}
