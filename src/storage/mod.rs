pub mod json_backend;

use crate::config::Theme;
use crate::errors::LedgerError;
use crate::ledger::{Product, Transaction};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over the key-value persistence surface, one method pair per
/// logical key. Loads distinguish a missing key (`Ok(None)`) from a
/// present-but-corrupt value (`Err`), leaving the recovery decision to the
/// caller.
pub trait StorageBackend: Send + Sync {
    fn load_transactions(&self) -> Result<Option<Vec<Transaction>>>;
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;
    fn load_products(&self) -> Result<Option<Vec<Product>>>;
    fn save_products(&self, products: &[Product]) -> Result<()>;
    fn load_theme(&self) -> Result<Option<Theme>>;
    fn save_theme(&self, theme: Theme) -> Result<()>;
}

pub use json_backend::JsonStorage;
