use tracing::warn;
use uuid::Uuid;

use crate::config::Theme;
use crate::ledger::{Ledger, ProductDraft, TransactionDraft};
use crate::storage::StorageBackend;

/// Facade that couples the in-memory ledger and display preference to a
/// storage backend: load-on-open, save-on-change.
pub struct LedgerManager {
    ledger: Ledger,
    theme: Theme,
    storage: Box<dyn StorageBackend>,
    load_warnings: Vec<String>,
}

impl LedgerManager {
    /// Loads every stored key before exposing any mutation, so a save can
    /// never clobber data that was not read first. A corrupt value is
    /// replaced with its default and reported through [`load_warnings`];
    /// a missing key is simply the default. Never fails.
    ///
    /// [`load_warnings`]: LedgerManager::load_warnings
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let mut warnings = Vec::new();
        let transactions = match storage.load_transactions() {
            Ok(Some(transactions)) => transactions,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("discarding unreadable transaction data: {err}");
                warnings.push(format!("transactions reset: {err}"));
                Vec::new()
            }
        };
        let products = match storage.load_products() {
            Ok(Some(products)) => products,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("discarding unreadable product data: {err}");
                warnings.push(format!("products reset: {err}"));
                Vec::new()
            }
        };
        let theme = match storage.load_theme() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!("discarding unreadable theme preference: {err}");
                warnings.push(format!("theme reset: {err}"));
                Theme::default()
            }
        };
        Self {
            ledger: Ledger::with_records(transactions, products),
            theme,
            storage,
            load_warnings: warnings,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Values that were discarded during the initial load.
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    pub fn save_transaction(&mut self, draft: TransactionDraft, id: Option<Uuid>) -> Uuid {
        let id = self.ledger.save_transaction(draft, id);
        self.persist_transactions();
        id
    }

    pub fn save_product(&mut self, draft: ProductDraft, id: Option<Uuid>) -> Uuid {
        let id = self.ledger.save_product(draft, id);
        self.persist_transactions();
        self.persist_products();
        id
    }

    pub fn delete_transaction(&mut self, id: Uuid) -> bool {
        let removed = self.ledger.delete_transaction(id);
        if removed {
            // The cascade may have taken a linked product with it.
            self.persist_transactions();
            self.persist_products();
        }
        removed
    }

    pub fn delete_product(&mut self, id: Uuid) -> bool {
        let removed = self.ledger.delete_product(id);
        if removed {
            self.persist_transactions();
            self.persist_products();
        }
        removed
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(err) = self.storage.save_theme(theme) {
            warn!("theme preference not persisted: {err}");
        }
    }

    fn persist_transactions(&self) {
        if let Err(err) = self.storage.save_transactions(self.ledger.transactions()) {
            warn!("transactions not persisted: {err}");
        }
    }

    fn persist_products(&self) {
        if let Err(err) = self.storage.save_products(self.ledger.products()) {
            warn!("products not persisted: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use crate::ledger::{Product, ServiceKind, Transaction};
    use crate::storage::{JsonStorage, Result};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn manager_with_temp_dir() -> (LedgerManager, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (LedgerManager::open(Box::new(storage)), temp)
    }

    #[test]
    fn opens_empty_when_nothing_was_stored() {
        let (manager, _guard) = manager_with_temp_dir();
        assert_eq!(manager.ledger().transaction_count(), 0);
        assert_eq!(manager.theme(), Theme::Light);
        assert!(manager.load_warnings().is_empty());
    }

    #[test]
    fn mutations_survive_a_reopen() {
        let temp = TempDir::new().expect("temp dir");
        let base = temp.path().to_path_buf();
        {
            let storage = JsonStorage::new(Some(base.clone())).unwrap();
            let mut manager = LedgerManager::open(Box::new(storage));
            manager.save_transaction(
                TransactionDraft::service(date(2024, 1, 10), ServiceKind::Cut, 25.0, "Ana"),
                None,
            );
            manager.set_theme(Theme::Dark);
        }
        let storage = JsonStorage::new(Some(base)).unwrap();
        let manager = LedgerManager::open(Box::new(storage));
        assert_eq!(manager.ledger().transaction_count(), 1);
        assert_eq!(manager.theme(), Theme::Dark);
    }

    #[test]
    fn corrupt_values_degrade_to_defaults_with_a_warning() {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        fs::write(storage.key_path("transactions-v3"), "{corrupt").unwrap();

        let manager = LedgerManager::open(Box::new(storage));
        assert_eq!(manager.ledger().transaction_count(), 0);
        assert_eq!(manager.load_warnings().len(), 1);
        assert!(manager.load_warnings()[0].contains("transactions"));
    }

    /// Backend whose writes always fail; loads are empty.
    struct ReadOnlyStorage;

    impl StorageBackend for ReadOnlyStorage {
        fn load_transactions(&self) -> Result<Option<Vec<Transaction>>> {
            Ok(None)
        }
        fn save_transactions(&self, _transactions: &[Transaction]) -> Result<()> {
            Err(LedgerError::InvalidInput("storage full".into()))
        }
        fn load_products(&self) -> Result<Option<Vec<Product>>> {
            Ok(None)
        }
        fn save_products(&self, _products: &[Product]) -> Result<()> {
            Err(LedgerError::InvalidInput("storage full".into()))
        }
        fn load_theme(&self) -> Result<Option<Theme>> {
            Ok(None)
        }
        fn save_theme(&self, _theme: Theme) -> Result<()> {
            Err(LedgerError::InvalidInput("storage full".into()))
        }
    }

    #[test]
    fn write_failures_leave_in_memory_state_authoritative() {
        let mut manager = LedgerManager::open(Box::new(ReadOnlyStorage));
        let id = manager.save_transaction(
            TransactionDraft::service(date(2024, 1, 10), ServiceKind::Cut, 25.0, "Ana"),
            None,
        );
        manager.set_theme(Theme::Dark);

        assert!(manager.ledger().transaction(id).is_some());
        assert_eq!(manager.theme(), Theme::Dark);
    }
}
