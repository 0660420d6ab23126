use budget_ledger::core::amount::SETTLED_THRESHOLD;
use budget_ledger::core::currency::CurrencyCode;
use budget_ledger::core::ledger::LedgerStore;
use budget_ledger::error::LedgerError;
use budget_ledger::processing::processor::{TransactionIntent, TransactionProcessor};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Small pool of names so counterparties repeat.
fn arb_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Alex", "Bob", "Kim", "Lee", "Mia"])
}

fn arb_currency() -> impl Strategy<Value = CurrencyCode> {
    prop::sample::select(CurrencyCode::ALL.to_vec())
}

/// Positive amount with two decimal places (0.01 to 100,000.00).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_intent() -> impl Strategy<Value = TransactionIntent> {
    (0u8..4, arb_amount(), arb_currency(), arb_name()).prop_map(|(which, amount, currency, name)| {
        match which {
            0 => TransactionIntent::income(amount, currency),
            1 => TransactionIntent::expense(amount, currency),
            2 => TransactionIntent::lend(amount, currency, name),
            _ => TransactionIntent::borrow(amount, currency, name),
        }
    })
}

/// A ledger built from 0..30 random transactions.
fn arb_ledger() -> impl Strategy<Value = LedgerStore> {
    prop::collection::vec(arb_intent(), 0..30).prop_map(|intents| {
        let mut ledger = LedgerStore::new();
        for intent in &intents {
            TransactionProcessor::apply(&mut ledger, intent).expect("generated intents are valid");
        }
        ledger
    })
}

proptest! {
    #[test]
    fn income_adds_to_balance(
        ledger in arb_ledger(),
        amount in arb_amount(),
        currency in arb_currency(),
    ) {
        let mut after = ledger.clone();
        let intent = TransactionIntent::income(amount, currency);
        TransactionProcessor::apply(&mut after, &intent).unwrap();
        prop_assert_eq!(after.balance(currency), ledger.balance(currency) + amount);
        prop_assert_eq!(after.debts(), ledger.debts());
    }

    #[test]
    fn expense_subtracts_from_balance(
        ledger in arb_ledger(),
        amount in arb_amount(),
        currency in arb_currency(),
    ) {
        let mut after = ledger.clone();
        let intent = TransactionIntent::expense(amount, currency);
        TransactionProcessor::apply(&mut after, &intent).unwrap();
        prop_assert_eq!(after.balance(currency), ledger.balance(currency) - amount);
        prop_assert_eq!(after.debts(), ledger.debts());
    }

    #[test]
    fn lend_moves_cash_to_debt(
        ledger in arb_ledger(),
        amount in arb_amount(),
        currency in arb_currency(),
        name in arb_name(),
    ) {
        let mut after = ledger.clone();
        let intent = TransactionIntent::lend(amount, currency, name);
        TransactionProcessor::apply(&mut after, &intent).unwrap();
        prop_assert_eq!(after.balance(currency), ledger.balance(currency) - amount);
        prop_assert_eq!(after.debt(name, currency), ledger.debt(name, currency) + amount);
    }

    #[test]
    fn borrow_moves_debt_to_cash(
        ledger in arb_ledger(),
        amount in arb_amount(),
        currency in arb_currency(),
        name in arb_name(),
    ) {
        let mut after = ledger.clone();
        let intent = TransactionIntent::borrow(amount, currency, name);
        TransactionProcessor::apply(&mut after, &intent).unwrap();
        prop_assert_eq!(after.balance(currency), ledger.balance(currency) + amount);
        prop_assert_eq!(after.debt(name, currency), ledger.debt(name, currency) - amount);
    }

    #[test]
    fn registry_matches_debt_keys(ledger in arb_ledger()) {
        let registry = ledger.counterparties();
        prop_assert_eq!(registry.len(), ledger.debts().len());
        for (i, name) in registry.iter().enumerate() {
            prop_assert!(ledger.debts().contains_key(name));
            prop_assert!(!registry[..i].contains(name), "duplicate {}", name);
        }
    }

    #[test]
    fn totals_match_unsettled_entries(ledger in arb_ledger(), currency in arb_currency()) {
        let mut owed_to_me = Decimal::ZERO;
        let mut owed_by_me = Decimal::ZERO;
        for per in ledger.debts().values() {
            if let Some(amount) = per.get(&currency) {
                if *amount > SETTLED_THRESHOLD {
                    owed_to_me += *amount;
                } else if *amount < -SETTLED_THRESHOLD {
                    owed_by_me += amount.abs();
                }
            }
        }
        let totals = ledger.debt_totals(currency);
        prop_assert_eq!(totals.owed_to_me, owed_to_me);
        prop_assert_eq!(totals.owed_by_me, owed_by_me);
    }

    #[test]
    fn non_positive_amount_changes_nothing(
        ledger in arb_ledger(),
        cents in -10_000i64..=0,
        currency in arb_currency(),
        name in arb_name(),
    ) {
        let amount = Decimal::new(cents, 2);
        for intent in [
            TransactionIntent::income(amount, currency),
            TransactionIntent::lend(amount, currency, name),
        ] {
            let mut after = ledger.clone();
            let result = TransactionProcessor::apply(&mut after, &intent);
            prop_assert!(matches!(result, Err(LedgerError::InvalidAmount)));
            prop_assert_eq!(&after, &ledger);
        }
    }

    #[test]
    fn repayment_needs_outstanding_debt(
        ledger in arb_ledger(),
        amount in arb_amount(),
        currency in arb_currency(),
        name in arb_name(),
    ) {
        let has_debt = !ledger.outstanding_debts_for(name).is_empty();
        let mut after = ledger.clone();
        let result = TransactionProcessor::apply(
            &mut after,
            &TransactionIntent::borrow(amount, currency, name).as_repayment(),
        );
        if has_debt {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(
                matches!(result, Err(LedgerError::UnknownRepaymentTarget { .. })),
                "expected repayment rejection"
            );
            prop_assert_eq!(&after, &ledger);
        }
    }
}
