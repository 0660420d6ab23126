//! Error type shared by the ledger, the processor and the storage layer.

use thiserror::Error;

/// Everything that can go wrong while recording a transaction or
/// moving ledger state in and out of storage.
///
/// Transaction rejections (`InvalidAmount`, `AmountOutOfRange`, `MissingCounterparty`,
/// `UnknownRepaymentTarget`) are raised before any mutation happens, so the
/// caller can re-prompt and resubmit without cleaning anything up.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("amount must be a finite number greater than zero")]
    InvalidAmount,

    #[error("amount is outside the range the ledger can hold")]
    AmountOutOfRange,

    #[error("debt transactions require a counterparty name")]
    MissingCounterparty,

    #[error("'{name}' has no outstanding debt to repay")]
    UnknownRepaymentTarget { name: String },

    #[error("unknown currency code '{0}'")]
    UnknownCurrency(String),

    #[error("stored value under '{key}' is not valid: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
