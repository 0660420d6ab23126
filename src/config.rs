use crate::core::currency::CurrencyCode;
use serde::{Deserialize, Serialize};

/// Keys under which each part of the ledger is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub balances: String,
    pub default_currency: String,
    pub debts: String,
    pub counterparties: String,
    pub transactions: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            balances: "budget_balances_v2".to_string(),
            default_currency: "budget_default_currency".to_string(),
            debts: "budget_debts".to_string(),
            counterparties: "budget_counterparties".to_string(),
            transactions: "budget_transactions".to_string(),
        }
    }
}

/// Settings for opening a [`Budget`](crate::budget::Budget).
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use budget_ledger::config::BudgetConfig;
/// use budget_ledger::core::currency::CurrencyCode;
///
/// let config: BudgetConfig = serde_json::from_str(r#"{ "fallback_currency": "EUR" }"#).unwrap();
/// assert_eq!(config.fallback_currency, CurrencyCode::Eur);
/// assert_eq!(config.keys.debts, "budget_debts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Default currency used until the user picks one.
    pub fallback_currency: CurrencyCode,
    pub keys: StorageKeys,
}
