use budget_ledger::core::currency::CurrencyCode;
use budget_ledger::core::ledger::LedgerStore;
use budget_ledger::processing::processor::{TransactionIntent, TransactionProcessor};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use rust_decimal::Decimal;

/// A ledger with `counterparties` names and `transactions` random lend/borrow entries.
fn random_ledger(counterparties: usize, transactions: usize) -> LedgerStore {
    let mut rng = rand::thread_rng();
    let names: Vec<String> = (0..counterparties).map(|i| format!("PERSON-{:04}", i)).collect();
    let mut ledger = LedgerStore::new();

    for _ in 0..transactions {
        let name = names[rng.gen_range(0..names.len())].clone();
        let currency = CurrencyCode::ALL[rng.gen_range(0..CurrencyCode::ALL.len())];
        let amount = Decimal::new(rng.gen_range(1..1_000_000), 2);
        let intent = if rng.gen_bool(0.5) {
            TransactionIntent::lend(amount, currency, name)
        } else {
            TransactionIntent::borrow(amount, currency, name)
        };
        TransactionProcessor::apply(&mut ledger, &intent).expect("generated intents are valid");
    }
    ledger
}

fn bench_debt_totals_100(c: &mut Criterion) {
    let ledger = random_ledger(100, 1_000);
    c.bench_function("debt_totals_100_counterparties", |b| {
        b.iter(|| black_box(&ledger).debt_totals(CurrencyCode::Usd))
    });
}

fn bench_debt_totals_10000(c: &mut Criterion) {
    let ledger = random_ledger(10_000, 50_000);
    c.bench_function("debt_totals_10000_counterparties", |b| {
        b.iter(|| black_box(&ledger).debt_totals(CurrencyCode::Usd))
    });
}

fn bench_apply_lend(c: &mut Criterion) {
    let ledger = random_ledger(1_000, 5_000);
    let intent = TransactionIntent::lend(Decimal::new(2_500, 2), CurrencyCode::Eur, "PERSON-0042");
    c.bench_function("apply_lend_1000_counterparties", |b| {
        b.iter_batched(
            || ledger.clone(),
            |mut ledger| TransactionProcessor::apply(&mut ledger, black_box(&intent)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_debt_totals_100,
    bench_debt_totals_10000,
    bench_apply_lend
);
criterion_main!(benches);
