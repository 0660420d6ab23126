//! Walk through a small budget: lend, get partly repaid, spend.
//!
//! Run with `RUST_LOG=debug cargo run --example basic_ledger` to see every
//! ledger mutation.

use budget_ledger::prelude::*;
use rust_decimal_macros::dec;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::temp_dir().join("budget-ledger-demo.json");
    let mut budget = Budget::open(JsonFileStore::open(&path)?, BudgetConfig::default())?;
    budget.reset()?;

    budget.submit(&TransactionIntent::income(dec!(1_000), CurrencyCode::Usd))?;
    budget.submit(&TransactionIntent::lend(dec!(100), CurrencyCode::Usd, "Alex"))?;
    budget.submit(&TransactionIntent::borrow(dec!(50), CurrencyCode::Eur, "Bob"))?;
    budget.submit(&TransactionIntent::borrow(dec!(30), CurrencyCode::Usd, "Alex").as_repayment())?;
    budget.submit(&TransactionIntent::expense(dec!(20), CurrencyCode::Usd))?;

    let unknown = TransactionIntent::lend(dec!(5), CurrencyCode::Usd, "Carol").as_repayment();
    if let Err(e) = budget.submit(&unknown) {
        println!("Rejected: {}\n", e);
    }

    println!("{}", budget.summary());

    println!("=== History: Alex ===");
    for record in budget.ledger().history_for("Alex") {
        println!(
            "  {}  {} {}{}",
            record.created_at().format("%Y-%m-%d %H:%M"),
            record.debt_direction().unwrap_or_default(),
            record.currency().symbol(),
            record.amount()
        );
    }

    println!("\nSaved to {}", path.display());
    Ok(())
}
