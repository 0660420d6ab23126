//! Ledger data model: currencies, counterparties, amounts, the
//! transaction log entry and the ledger store itself.

pub mod amount;
pub mod counterparty;
pub mod currency;
pub mod ledger;
pub mod transaction;
