use crate::core::amount::SETTLED_THRESHOLD;
use crate::core::counterparty::Counterparty;
use crate::core::currency::CurrencyCode;
use crate::core::ledger::{DebtTotals, LedgerStore};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cash in one currency together with the debts in that currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyLine {
    pub currency: CurrencyCode,
    pub balance: Decimal,
    pub debts: DebtTotals,
}

impl fmt::Display for CurrencyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.currency.symbol();
        write!(f, "{}{}", symbol, self.balance)?;
        if self.debts.owed_by_me > SETTLED_THRESHOLD {
            write!(f, " (I owe {}{})", symbol, self.debts.owed_by_me)?;
        }
        if self.debts.owed_to_me > SETTLED_THRESHOLD {
            write!(f, " (owed to me {}{})", symbol, self.debts.owed_to_me)?;
        }
        Ok(())
    }
}

/// One unsettled position with one counterparty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtCard {
    pub counterparty: Counterparty,
    pub currency: CurrencyCode,
    /// Positive: they owe me. Negative: I owe them.
    pub amount: Decimal,
}

impl fmt::Display for DebtCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.currency.symbol();
        if self.amount > Decimal::ZERO {
            write!(f, "{} owes me {}{}", self.counterparty, symbol, self.amount)
        } else {
            write!(f, "I owe {} {}{}", self.counterparty, symbol, self.amount.abs())
        }
    }
}

/// Everything the overview screen shows, derived from the ledger on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// The default currency's line.
    pub main: CurrencyLine,
    /// Other currencies with a non-zero balance.
    pub secondary: Vec<CurrencyLine>,
    /// Registry order, then currency order.
    pub cards: Vec<DebtCard>,
}

impl LedgerSummary {
    pub fn from_ledger(ledger: &LedgerStore, default_currency: CurrencyCode) -> Self {
        let line = |currency| CurrencyLine {
            currency,
            balance: ledger.balance(currency),
            debts: ledger.debt_totals(currency),
        };

        let secondary = CurrencyCode::ALL
            .into_iter()
            .filter(|c| *c != default_currency && !ledger.balance(*c).is_zero())
            .map(line)
            .collect();

        let cards = ledger
            .counterparties()
            .iter()
            .flat_map(|c| {
                ledger
                    .outstanding_debts_for(c.as_str())
                    .into_iter()
                    .map(move |(currency, amount)| DebtCard {
                        counterparty: c.clone(),
                        currency,
                        amount,
                    })
            })
            .collect();

        Self {
            main: line(default_currency),
            secondary,
            cards,
        }
    }
}

impl fmt::Display for LedgerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Balance ===")?;
        writeln!(f, "{}", self.main)?;
        for line in &self.secondary {
            writeln!(f, "  {}", line)?;
        }
        if !self.cards.is_empty() {
            writeln!(f, "\n=== Debts ===")?;
            for card in &self.cards {
                writeln!(f, "  {}", card)?;
            }
        }
        Ok(())
    }
}
