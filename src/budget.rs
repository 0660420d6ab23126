use crate::config::BudgetConfig;
use crate::core::currency::CurrencyCode;
use crate::core::ledger::LedgerStore;
use crate::core::transaction::TransactionRecord;
use crate::error::Result;
use crate::processing::processor::{TransactionIntent, TransactionProcessor};
use crate::storage::snapshot::{load_default_currency, save_default_currency};
use crate::storage::{load_ledger, save_ledger, KeyValueStore};
use crate::summary::LedgerSummary;
use log::info;

/// A ledger bound to its storage.
///
/// `Budget` loads the ledger and the default currency when opened and
/// writes them back after every successful mutation, so the store always
/// reflects the last accepted change.
///
/// # Examples
///
/// ```
/// use budget_ledger::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let mut budget = Budget::open(MemoryStore::new(), BudgetConfig::default()).unwrap();
/// budget.submit(&TransactionIntent::lend(dec!(100), CurrencyCode::Usd, "Alex")).unwrap();
///
/// assert_eq!(budget.ledger().balance(CurrencyCode::Usd), dec!(-100));
/// assert_eq!(budget.ledger().debt_totals(CurrencyCode::Usd).owed_to_me, dec!(100));
/// ```
#[derive(Debug)]
pub struct Budget<S: KeyValueStore> {
    store: S,
    config: BudgetConfig,
    ledger: LedgerStore,
    default_currency: CurrencyCode,
}

impl<S: KeyValueStore> Budget<S> {
    /// Load state from `store`; absent keys fall back to an empty ledger
    /// and `config.fallback_currency`.
    pub fn open(store: S, config: BudgetConfig) -> Result<Self> {
        let ledger = load_ledger(&store, &config.keys)?;
        let default_currency =
            load_default_currency(&store, &config.keys, config.fallback_currency)?;
        info!(
            "loaded ledger: {} counterparties, {} transactions, default {}",
            ledger.counterparties().len(),
            ledger.transactions().len(),
            default_currency
        );
        Ok(Self {
            store,
            config,
            ledger,
            default_currency,
        })
    }

    /// Apply `intent` and persist the result.
    ///
    /// A rejected intent leaves both the ledger and the store untouched.
    pub fn submit(&mut self, intent: &TransactionIntent) -> Result<TransactionRecord> {
        let record = TransactionProcessor::apply(&mut self.ledger, intent)?;
        self.flush()?;
        Ok(record)
    }

    pub fn set_default_currency(&mut self, currency: CurrencyCode) -> Result<()> {
        info!("default currency {} -> {}", self.default_currency, currency);
        self.default_currency = currency;
        save_default_currency(&mut self.store, &self.config.keys, currency)
    }

    /// Erase balances, debts, counterparties and history.
    ///
    /// Cannot be undone; confirming with the user is the caller's job.
    /// The default currency is kept.
    pub fn reset(&mut self) -> Result<()> {
        info!("resetting ledger");
        self.ledger.reset();
        self.flush()
    }

    /// Write the whole state to the store.
    pub fn flush(&mut self) -> Result<()> {
        save_ledger(&mut self.store, &self.config.keys, &self.ledger)?;
        save_default_currency(&mut self.store, &self.config.keys, self.default_currency)
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn default_currency(&self) -> CurrencyCode {
        self.default_currency
    }

    /// Display figures for the current state.
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from_ledger(&self.ledger, self.default_currency)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
