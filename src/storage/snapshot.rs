use crate::config::StorageKeys;
use crate::core::counterparty::Counterparty;
use crate::core::currency::CurrencyCode;
use crate::core::ledger::{Balances, DebtBook, LedgerStore};
use crate::core::transaction::TransactionRecord;
use crate::error::{LedgerError, Result};
use crate::storage::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        None => Ok(None),
        Some(blob) => serde_json::from_str(&blob)
            .map(Some)
            .map_err(|source| LedgerError::Corrupt {
                key: key.to_string(),
                source,
            }),
    }
}

fn write_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let blob = serde_json::to_string(value).map_err(|source| LedgerError::Corrupt {
        key: key.to_string(),
        source,
    })?;
    store.set(key, blob)
}

/// Restore the ledger from `store`. Missing keys load as empty/zero.
pub fn load_ledger<S: KeyValueStore + ?Sized>(
    store: &S,
    keys: &StorageKeys,
) -> Result<LedgerStore> {
    let balances: Balances = read_json(store, &keys.balances)?.unwrap_or_default();
    let debts: DebtBook = read_json(store, &keys.debts)?.unwrap_or_default();
    let counterparties: Vec<Counterparty> =
        read_json(store, &keys.counterparties)?.unwrap_or_default();
    let transactions: Vec<TransactionRecord> =
        read_json(store, &keys.transactions)?.unwrap_or_default();
    Ok(LedgerStore::from_parts(balances, debts, counterparties, transactions))
}

/// Write every part of the ledger to `store`.
pub fn save_ledger<S: KeyValueStore + ?Sized>(
    store: &mut S,
    keys: &StorageKeys,
    ledger: &LedgerStore,
) -> Result<()> {
    write_json(store, &keys.balances, ledger.balances())?;
    write_json(store, &keys.debts, ledger.debts())?;
    write_json(store, &keys.counterparties, ledger.counterparties())?;
    write_json(store, &keys.transactions, ledger.transactions())
}

/// The stored default currency (a bare code like `EUR`), or `fallback`.
pub fn load_default_currency<S: KeyValueStore + ?Sized>(
    store: &S,
    keys: &StorageKeys,
    fallback: CurrencyCode,
) -> Result<CurrencyCode> {
    match store.get(&keys.default_currency)? {
        Some(code) => code.parse(),
        None => Ok(fallback),
    }
}

pub fn save_default_currency<S: KeyValueStore + ?Sized>(
    store: &mut S,
    keys: &StorageKeys,
    currency: CurrencyCode,
) -> Result<()> {
    store.set(&keys.default_currency, currency.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let ledger = load_ledger(&store, &keys).unwrap();
        assert_eq!(ledger, LedgerStore::new());
        assert_eq!(
            load_default_currency(&store, &keys, CurrencyCode::Usd).unwrap(),
            CurrencyCode::Usd
        );
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let keys = StorageKeys::default();
        let mut ledger = LedgerStore::new();
        ledger.adjust_balance(CurrencyCode::Eur, dec!(12.5));
        ledger.adjust_debt(&Counterparty::new("Bob"), CurrencyCode::Eur, dec!(0.005));

        save_ledger(&mut store, &keys, &ledger).unwrap();
        let loaded = load_ledger(&store, &keys).unwrap();
        assert_eq!(loaded, ledger);
        assert_eq!(loaded.debt("Bob", CurrencyCode::Eur), dec!(0.005));
    }

    #[test]
    fn test_blob_shapes() {
        let mut store = MemoryStore::new();
        let keys = StorageKeys::default();
        let mut ledger = LedgerStore::new();
        ledger.adjust_debt(&Counterparty::new("Alex"), CurrencyCode::Usd, dec!(100));
        save_ledger(&mut store, &keys, &ledger).unwrap();

        let debts: serde_json::Value =
            serde_json::from_str(&store.get("budget_debts").unwrap().unwrap()).unwrap();
        assert_eq!(debts["Alex"]["USD"], "100");
        assert_eq!(store.get("budget_counterparties").unwrap().unwrap(), r#"["Alex"]"#);
    }

    #[test]
    fn test_partial_balances_filled() {
        let mut store = MemoryStore::new();
        let keys = StorageKeys::default();
        store.set(&keys.balances, r#"{"KRW":"5000"}"#.to_string()).unwrap();
        let ledger = load_ledger(&store, &keys).unwrap();
        assert_eq!(ledger.balance(CurrencyCode::Krw), dec!(5000));
        assert_eq!(ledger.balance(CurrencyCode::Usd), Decimal::ZERO);
    }

    #[test]
    fn test_corrupt_blob_reports_key() {
        let mut store = MemoryStore::new();
        let keys = StorageKeys::default();
        store.set(&keys.debts, "{oops".to_string()).unwrap();
        let err = load_ledger(&store, &keys).unwrap_err();
        assert!(matches!(err, LedgerError::Corrupt { key, .. } if key == "budget_debts"));
    }

    #[test]
    fn test_default_currency_round_trip() {
        let mut store = MemoryStore::new();
        let keys = StorageKeys::default();
        save_default_currency(&mut store, &keys, CurrencyCode::Rub).unwrap();
        assert_eq!(store.get(&keys.default_currency).unwrap().as_deref(), Some("RUB"));
        assert_eq!(
            load_default_currency(&store, &keys, CurrencyCode::Usd).unwrap(),
            CurrencyCode::Rub
        );
    }

    #[test]
    fn test_unknown_default_currency_rejected() {
        let mut store = MemoryStore::new();
        let keys = StorageKeys::default();
        store.set(&keys.default_currency, "GBP".to_string()).unwrap();
        assert!(matches!(
            load_default_currency(&store, &keys, CurrencyCode::Usd),
            Err(LedgerError::UnknownCurrency(_))
        ));
    }
}
