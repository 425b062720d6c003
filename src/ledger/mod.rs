//! Record store domain models and the state container that owns them.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod product;
pub mod transaction;

pub use ledger::Ledger;
pub use product::{Product, ProductDraft};
pub use transaction::{Category, ServiceKind, Transaction, TransactionDraft, TransactionKind};
