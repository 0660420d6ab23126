use crate::core::counterparty::Counterparty;
use crate::core::currency::CurrencyCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Income or expense, as labelled by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

/// Which way money moved in a debt transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DebtDirection {
    /// I give money: my cash goes down, they owe me more.
    #[default]
    Lend,
    /// I take money: my cash goes up, I owe them more.
    Borrow,
}

impl DebtDirection {
    /// The income/expense label that matches this direction.
    pub fn kind(self) -> TransactionKind {
        match self {
            DebtDirection::Lend => TransactionKind::Expense,
            DebtDirection::Borrow => TransactionKind::Income,
        }
    }
}

impl fmt::Display for DebtDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebtDirection::Lend => f.write_str("lent"),
            DebtDirection::Borrow => f.write_str("borrowed"),
        }
    }
}

/// An entry in the transaction log.
///
/// Records are created by the transaction processor once an intent has
/// been accepted and are never edited or removed afterwards, except by a
/// full ledger reset. The id is a UUIDv7, so ids sort by creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    id: Uuid,
    created_at: DateTime<Utc>,
    /// Always positive.
    amount: Decimal,
    currency: CurrencyCode,
    kind: TransactionKind,
    is_debt: bool,
    counterparty: Option<Counterparty>,
    debt_direction: Option<DebtDirection>,
    #[serde(default)]
    is_repayment: bool,
}

impl TransactionRecord {
    /// Record a plain income or expense entry.
    pub fn plain(amount: Decimal, currency: CurrencyCode, kind: TransactionKind) -> Self {
        Self::at(Utc::now(), amount, currency, kind)
    }

    /// Record a lend/borrow entry against `counterparty`.
    pub fn debt(
        amount: Decimal,
        currency: CurrencyCode,
        kind: TransactionKind,
        counterparty: Counterparty,
        direction: DebtDirection,
        is_repayment: bool,
    ) -> Self {
        Self::plain(amount, currency, kind).with_debt(counterparty, direction, is_repayment)
    }

    /// Create a record with an explicit creation time (useful for testing / replay).
    pub fn at(
        created_at: DateTime<Utc>,
        amount: Decimal,
        currency: CurrencyCode,
        kind: TransactionKind,
    ) -> Self {
        let millis = u64::try_from(created_at.timestamp_millis()).unwrap_or_default();
        let timestamp = uuid::Timestamp::from_unix(
            uuid::NoContext,
            millis / 1_000,
            (millis % 1_000) as u32 * 1_000_000,
        );
        Self {
            id: Uuid::new_v7(timestamp),
            created_at,
            amount,
            currency,
            kind,
            is_debt: false,
            counterparty: None,
            debt_direction: None,
            is_repayment: false,
        }
    }

    /// Attach debt details to a record built with [`TransactionRecord::at`].
    pub fn with_debt(
        mut self,
        counterparty: Counterparty,
        direction: DebtDirection,
        is_repayment: bool,
    ) -> Self {
        self.is_debt = true;
        self.counterparty = Some(counterparty);
        self.debt_direction = Some(direction);
        self.is_repayment = is_repayment;
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn is_debt(&self) -> bool {
        self.is_debt
    }

    pub fn counterparty(&self) -> Option<&Counterparty> {
        self.counterparty.as_ref()
    }

    pub fn debt_direction(&self) -> Option<DebtDirection> {
        self.debt_direction
    }

    pub fn is_repayment(&self) -> bool {
        self.is_repayment
    }
}
