use crate::core::amount::require_positive;
use crate::core::counterparty::Counterparty;
use crate::core::currency::CurrencyCode;
use crate::core::ledger::LedgerStore;
use crate::core::transaction::{DebtDirection, TransactionKind, TransactionRecord};
use crate::error::{LedgerError, Result};
use log::{info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Counterparty details of a lend/borrow transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtTerms {
    /// Free text as typed; trimmed before use.
    pub counterparty: String,
    pub direction: DebtDirection,
    /// Restricts `counterparty` to names with an outstanding debt.
    #[serde(default)]
    pub is_repayment: bool,
}

/// What the user asked to record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIntent {
    pub amount: Decimal,
    pub currency: CurrencyCode,
    /// Label only for debt transactions; `DebtTerms::direction` decides the sign.
    pub kind: TransactionKind,
    /// `Some` for a debt transaction.
    pub debt: Option<DebtTerms>,
}

impl TransactionIntent {
    pub fn income(amount: Decimal, currency: CurrencyCode) -> Self {
        Self {
            amount,
            currency,
            kind: TransactionKind::Income,
            debt: None,
        }
    }

    pub fn expense(amount: Decimal, currency: CurrencyCode) -> Self {
        Self {
            amount,
            currency,
            kind: TransactionKind::Expense,
            debt: None,
        }
    }

    /// I give `amount` to `counterparty`.
    pub fn lend(amount: Decimal, currency: CurrencyCode, counterparty: impl Into<String>) -> Self {
        Self::debt(amount, currency, counterparty, DebtDirection::Lend)
    }

    /// I take `amount` from `counterparty`.
    pub fn borrow(
        amount: Decimal,
        currency: CurrencyCode,
        counterparty: impl Into<String>,
    ) -> Self {
        Self::debt(amount, currency, counterparty, DebtDirection::Borrow)
    }

    fn debt(
        amount: Decimal,
        currency: CurrencyCode,
        counterparty: impl Into<String>,
        direction: DebtDirection,
    ) -> Self {
        Self {
            amount,
            currency,
            kind: direction.kind(),
            debt: Some(DebtTerms {
                counterparty: counterparty.into(),
                direction,
                is_repayment: false,
            }),
        }
    }

    /// Mark a debt intent as a repayment. No effect on plain intents.
    pub fn as_repayment(mut self) -> Self {
        if let Some(terms) = self.debt.as_mut() {
            terms.is_repayment = true;
        }
        self
    }

    pub fn is_debt(&self) -> bool {
        self.debt.is_some()
    }
}

/// Applies transaction intents to a [`LedgerStore`].
///
/// Every intent is validated in full before the ledger is touched, so a
/// rejected intent leaves balances, debts, the registry and the log
/// exactly as they were.
pub struct TransactionProcessor;

impl TransactionProcessor {
    /// Validate `intent`, apply it to `ledger` and append it to the log.
    ///
    /// # Rules
    ///
    /// - income: balance += amount; expense: balance -= amount
    /// - lend: balance -= amount, debt(counterparty) += amount
    /// - borrow: balance += amount, debt(counterparty) -= amount
    /// - repayment: the counterparty must have an unsettled position in
    ///   some currency, not necessarily the one being repaid
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidAmount`], [`LedgerError::AmountOutOfRange`]
    /// (a resulting balance or debt would not fit in a `Decimal`),
    /// [`LedgerError::MissingCounterparty`] or
    /// [`LedgerError::UnknownRepaymentTarget`]; no state changes in any of
    /// those cases.
    pub fn apply(
        ledger: &mut LedgerStore,
        intent: &TransactionIntent,
    ) -> Result<TransactionRecord> {
        let amount = require_positive(intent.amount).inspect_err(|_| {
            warn!("rejected transaction: invalid amount {}", intent.amount);
        })?;
        let currency = intent.currency;

        let record = match &intent.debt {
            None => {
                let delta = match intent.kind {
                    TransactionKind::Income => amount,
                    TransactionKind::Expense => -amount,
                };
                Self::check_range(ledger.balance(currency), delta)?;
                ledger.adjust_balance(currency, delta);
                TransactionRecord::plain(amount, currency, intent.kind)
            }
            Some(terms) => {
                let counterparty = Self::check_counterparty(ledger, terms)?;
                let delta = match terms.direction {
                    DebtDirection::Lend => amount,
                    DebtDirection::Borrow => -amount,
                };
                Self::check_range(ledger.balance(currency), -delta)?;
                Self::check_range(ledger.debt(counterparty.as_str(), currency), delta)?;
                ledger.adjust_balance(currency, -delta);
                ledger.adjust_debt(&counterparty, currency, delta);
                TransactionRecord::debt(
                    amount,
                    currency,
                    intent.kind,
                    counterparty,
                    terms.direction,
                    terms.is_repayment,
                )
            }
        };

        info!(
            "recorded {:?} {} {}{}",
            record.kind(),
            currency,
            amount,
            record
                .counterparty()
                .map(|c| format!(" ({} {})", record.debt_direction().unwrap_or_default(), c))
                .unwrap_or_default()
        );
        ledger.record(record.clone());
        Ok(record)
    }

    fn check_range(current: Decimal, delta: Decimal) -> Result<()> {
        match current.checked_add(delta) {
            Some(_) => Ok(()),
            None => {
                warn!("rejected transaction: {current} + {delta} overflows");
                Err(LedgerError::AmountOutOfRange)
            }
        }
    }

    fn check_counterparty(ledger: &LedgerStore, terms: &DebtTerms) -> Result<Counterparty> {
        let counterparty = Counterparty::new(&terms.counterparty);
        if counterparty.is_empty() {
            warn!("rejected debt transaction: empty counterparty");
            return Err(LedgerError::MissingCounterparty);
        }
        if terms.is_repayment
            && !ledger
                .repayment_candidates()
                .iter()
                .any(|c| **c == counterparty)
        {
            warn!("rejected repayment: {counterparty} has no outstanding debt");
            return Err(LedgerError::UnknownRepaymentTarget {
                name: counterparty.to_string(),
            });
        }
        Ok(counterparty)
    }
}
