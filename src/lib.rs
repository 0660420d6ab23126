//! # budget-ledger
//!
//! Multi-currency personal budget ledger with peer-to-peer debt tracking.
//!
//! Keeps the user's cash per currency, what each counterparty owes (or is
//! owed), and a flat log of every accepted transaction. Aggregate
//! "owed to me / owed by me" figures are derived on demand.
//!
//! ## Architecture
//!
//! - **core** — Currencies, counterparties, amounts, transaction records, the ledger store
//! - **processing** — Transaction processor and entry-form state
//! - **storage** — Key-value persistence of the ledger
//! - **budget** — Ledger bound to a store, saved after every change
//! - **summary** — Derived display figures

pub mod budget;
pub mod config;
pub mod core;
pub mod error;
pub mod processing;
pub mod storage;
pub mod summary;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::budget::Budget;
    pub use crate::config::BudgetConfig;
    pub use crate::core::counterparty::Counterparty;
    pub use crate::core::currency::CurrencyCode;
    pub use crate::core::ledger::{DebtTotals, LedgerStore};
    pub use crate::core::transaction::{DebtDirection, TransactionKind, TransactionRecord};
    pub use crate::error::{LedgerError, Result};
    pub use crate::processing::form::{EntryForm, FormEvent};
    pub use crate::processing::processor::{TransactionIntent, TransactionProcessor};
    pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
    pub use crate::summary::LedgerSummary;
}
