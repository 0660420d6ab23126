//! State of the "new transaction" entry form.
//!
//! The form has four coupled flags: the income/expense kind, debt mode,
//! repayment mode and the lend/borrow direction. [`EntryForm::apply`] is
//! the only way to change them and keeps them consistent after every
//! event.

use crate::core::amount::parse_amount;
use crate::core::currency::CurrencyCode;
use crate::core::transaction::{DebtDirection, TransactionKind};
use crate::error::Result;
use crate::processing::processor::{DebtTerms, TransactionIntent};

/// One user action on the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    SelectKind(TransactionKind),
    SetDebtMode(bool),
    SetRepaymentMode(bool),
    SelectDirection(DebtDirection),
}

/// Flags of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryForm {
    kind: TransactionKind,
    debt_mode: bool,
    repayment_mode: bool,
    direction: DebtDirection,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `event` and derive the dependent flags.
    ///
    /// Returns true when the counterparty field should be cleared, which
    /// happens whenever repayment mode changes. In debt mode the kind
    /// follows the direction, so `SelectKind` is ignored there.
    pub fn apply(&mut self, event: FormEvent) -> bool {
        let was_repayment = self.repayment_mode;
        match event {
            FormEvent::SelectKind(kind) => {
                if !self.debt_mode {
                    self.kind = kind;
                }
            }
            FormEvent::SetDebtMode(on) => {
                self.debt_mode = on;
                if on {
                    self.kind = self.direction.kind();
                } else {
                    self.repayment_mode = false;
                }
            }
            FormEvent::SetRepaymentMode(on) => {
                self.repayment_mode = on && self.debt_mode;
            }
            FormEvent::SelectDirection(direction) => {
                self.direction = direction;
                self.kind = direction.kind();
            }
        }
        was_repayment != self.repayment_mode
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn debt_mode(&self) -> bool {
        self.debt_mode
    }

    pub fn repayment_mode(&self) -> bool {
        self.repayment_mode
    }

    pub fn direction(&self) -> DebtDirection {
        self.direction
    }

    /// Build an intent from the raw field values.
    ///
    /// Fails on an unparseable or non-positive amount or an unknown
    /// currency code. The counterparty is ignored outside debt mode and
    /// checked by the processor inside it.
    pub fn intent(
        &self,
        amount: &str,
        currency: &str,
        counterparty: &str,
    ) -> Result<TransactionIntent> {
        let amount = parse_amount(amount)?;
        let currency: CurrencyCode = currency.parse()?;
        let debt = self.debt_mode.then(|| DebtTerms {
            counterparty: counterparty.trim().to_string(),
            direction: self.direction,
            is_repayment: self.repayment_mode,
        });
        Ok(TransactionIntent {
            amount,
            currency,
            kind: self.kind,
            debt,
        })
    }
}
