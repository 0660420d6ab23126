use crate::core::amount::is_settled;
use crate::core::counterparty::Counterparty;
use crate::core::currency::CurrencyCode;
use crate::core::transaction::TransactionRecord;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Cash balance per currency.
pub type Balances = BTreeMap<CurrencyCode, Decimal>;

/// Per-counterparty debt positions.
///
/// Positive = the counterparty owes me, negative = I owe the counterparty.
pub type DebtBook = HashMap<Counterparty, BTreeMap<CurrencyCode, Decimal>>;

/// Aggregate debt figures for one currency, derived on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtTotals {
    /// Sum of unsettled positive positions.
    pub owed_to_me: Decimal,
    /// Sum of unsettled negative positions, as a positive number.
    pub owed_by_me: Decimal,
}

/// The user's financial state: own cash per currency, debts per
/// counterparty, the counterparty registry and the transaction log.
///
/// Debt entries are created lazily and are never removed when they come
/// back to zero; entries with |amount| <= 0.01 are simply ignored by the
/// totals and listing queries.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerStore {
    balances: Balances,
    debts: DebtBook,
    /// Insertion ordered, no duplicates.
    counterparties: Vec<Counterparty>,
    transactions: Vec<TransactionRecord>,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self {
            balances: zero_balances(),
            debts: DebtBook::new(),
            counterparties: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

fn zero_balances() -> Balances {
    CurrencyCode::ALL
        .into_iter()
        .map(|c| (c, Decimal::ZERO))
        .collect()
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted parts.
    ///
    /// Nothing is validated; the only fix-up is that currencies missing
    /// from `balances` start at zero.
    pub fn from_parts(
        balances: Balances,
        debts: DebtBook,
        counterparties: Vec<Counterparty>,
        transactions: Vec<TransactionRecord>,
    ) -> Self {
        let mut full = zero_balances();
        full.extend(balances);
        Self {
            balances: full,
            debts,
            counterparties,
            transactions,
        }
    }

    /// Add `delta` to my cash in `currency`. Balances may go negative.
    ///
    /// # Panics
    ///
    /// Panics if the sum leaves the `Decimal` range; the processor checks
    /// the range before calling this.
    pub fn adjust_balance(&mut self, currency: CurrencyCode, delta: Decimal) {
        let balance = self.balances.entry(currency).or_insert(Decimal::ZERO);
        *balance += delta;
        debug!("balance {currency} by {delta} -> {balance}");
    }

    /// Add `delta` to the debt position with `counterparty` in `currency`,
    /// creating the entry (and registering the counterparty) on first use.
    ///
    /// # Panics
    ///
    /// Panics if the sum leaves the `Decimal` range, as `adjust_balance`.
    pub fn adjust_debt(
        &mut self,
        counterparty: &Counterparty,
        currency: CurrencyCode,
        delta: Decimal,
    ) {
        if !self.is_registered(counterparty.as_str()) {
            debug!("registering counterparty {counterparty}");
            self.counterparties.push(counterparty.clone());
        }
        let position = self
            .debts
            .entry(counterparty.clone())
            .or_default()
            .entry(currency)
            .or_insert(Decimal::ZERO);
        *position += delta;
        debug!("debt {counterparty}/{currency} by {delta} -> {position}");
    }

    /// Owed-to-me and owed-by-me sums in `currency`, skipping settled entries.
    /// Sums saturate at the `Decimal` bounds.
    pub fn debt_totals(&self, currency: CurrencyCode) -> DebtTotals {
        let mut totals = DebtTotals::default();
        for amount in self.debts.values().filter_map(|per| per.get(&currency)) {
            if is_settled(*amount) {
                continue;
            }
            if *amount > Decimal::ZERO {
                totals.owed_to_me = totals.owed_to_me.saturating_add(*amount);
            } else {
                totals.owed_by_me = totals.owed_by_me.saturating_add(amount.abs());
            }
        }
        totals
    }

    /// Unsettled positions with one counterparty, by currency.
    pub fn outstanding_debts_for(&self, counterparty: &str) -> BTreeMap<CurrencyCode, Decimal> {
        self.debts
            .get(counterparty)
            .map(|per| {
                per.iter()
                    .filter(|(_, amount)| !is_settled(**amount))
                    .map(|(c, a)| (*c, *a))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Wipe everything: zero balances, no debts, no counterparties, no history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Append an accepted transaction to the log.
    pub(crate) fn record(&mut self, transaction: TransactionRecord) {
        self.transactions.push(transaction);
    }

    // --- Queries ---

    pub fn balance(&self, currency: CurrencyCode) -> Decimal {
        self.balances.get(&currency).copied().unwrap_or(Decimal::ZERO)
    }

    /// Raw stored debt position, settled or not.
    pub fn debt(&self, counterparty: &str, currency: CurrencyCode) -> Decimal {
        self.debts
            .get(counterparty)
            .and_then(|per| per.get(&currency))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn balances(&self) -> &Balances {
        &self.balances
    }

    pub fn debts(&self) -> &DebtBook {
        &self.debts
    }

    pub fn counterparties(&self) -> &[Counterparty] {
        &self.counterparties
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn is_registered(&self, counterparty: &str) -> bool {
        self.counterparties.iter().any(|c| c.as_str() == counterparty)
    }

    /// Counterparties with an unsettled position in any currency, in
    /// registry order. Only these may be named in a repayment.
    pub fn repayment_candidates(&self) -> Vec<&Counterparty> {
        self.counterparties
            .iter()
            .filter(|c| {
                self.debts
                    .get(*c)
                    .is_some_and(|per| per.values().any(|a| !is_settled(*a)))
            })
            .collect()
    }

    /// Names to suggest in the counterparty field.
    pub fn counterparty_options(&self, repayment_mode: bool) -> Vec<&Counterparty> {
        if repayment_mode {
            self.repayment_candidates()
        } else {
            self.counterparties.iter().collect()
        }
    }

    /// Transactions involving `counterparty`, newest first.
    pub fn history_for(&self, counterparty: &str) -> Vec<&TransactionRecord> {
        let mut history: Vec<&TransactionRecord> = self
            .transactions
            .iter()
            .filter(|t| t.counterparty().is_some_and(|c| c.as_str() == counterparty))
            .collect();
        history.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        history
    }

    /// Every counterparty with an unsettled position in `currency`, with
    /// its signed amount, in registry order.
    pub fn debtors_in(&self, currency: CurrencyCode) -> Vec<(&Counterparty, Decimal)> {
        self.counterparties
            .iter()
            .filter_map(|c| {
                let amount = self.debts.get(c)?.get(&currency).copied()?;
                (!is_settled(amount)).then_some((c, amount))
            })
            .collect()
    }
}
