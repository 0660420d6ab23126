use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a person the user lends money to or borrows money from.
///
/// Identity is the exact, case-sensitive name. Surrounding whitespace is
/// stripped on construction so "Alex " and "Alex" are the same person,
/// while "alex" is not.
///
/// # Examples
///
/// ```
/// use budget_ledger::core::counterparty::Counterparty;
///
/// let alex = Counterparty::new("  Alex ");
/// assert_eq!(alex.as_str(), "Alex");
/// assert_ne!(alex, Counterparty::new("alex"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counterparty(String);

impl Counterparty {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing but whitespace was given as the name.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Counterparty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Counterparty {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Borrow<str> for Counterparty {
    fn borrow(&self) -> &str {
        &self.0
    }
}
