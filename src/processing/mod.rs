//! Turning user input into ledger mutations.

pub mod form;
pub mod processor;
