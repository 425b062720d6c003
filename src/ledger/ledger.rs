use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{
    product::{Product, ProductDraft},
    transaction::{Category, Transaction, TransactionDraft, TransactionKind},
};

/// In-memory record store. Owns the transaction and product collections and
/// is their only write surface; the product/expense mirror invariant is
/// enforced here and nowhere else.
///
/// Both collections are kept newest-created-first. `revision` increases on
/// every mutation so observers can detect changes without callbacks.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    products: Vec<Product>,
    revision: u64,
    updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_records(Vec::new(), Vec::new())
    }

    /// Builds a store around previously persisted collections.
    pub fn with_records(transactions: Vec<Transaction>, products: Vec<Product>) -> Self {
        Self {
            transactions,
            products,
            revision: 0,
            updated_at: Utc::now(),
        }
    }

    /// Saves a transaction. A matching `id` replaces that transaction's
    /// fields in place; otherwise a new record with a fresh id is inserted
    /// at the front.
    pub fn save_transaction(&mut self, draft: TransactionDraft, id: Option<Uuid>) -> Uuid {
        if let Some(id) = id {
            if let Some(pos) = self.transactions.iter().position(|t| t.id == id) {
                draft.apply_to(&mut self.transactions[pos]);
                self.touch();
                return id;
            }
        }
        let id = Uuid::new_v4();
        self.transactions.insert(0, draft.into_transaction(id));
        self.touch();
        id
    }

    /// Saves a product and keeps its mirrored expense transaction in sync.
    /// Creation inserts both records before returning, so no reader ever
    /// observes one without the other. An `id` that matches nothing is
    /// treated like a create.
    pub fn save_product(&mut self, draft: ProductDraft, id: Option<Uuid>) -> Uuid {
        if let Some(id) = id {
            if let Some(pos) = self.products.iter().position(|p| p.id == id) {
                draft.apply_to(&mut self.products[pos]);
                let (date, value, description) = {
                    let product = &self.products[pos];
                    (
                        product.purchase_date,
                        product.value,
                        mirror_description(&product.name),
                    )
                };
                if let Some(txn) = self
                    .transactions
                    .iter_mut()
                    .find(|t| t.related_id == Some(id))
                {
                    txn.date = date;
                    txn.value = value;
                    txn.description = description;
                }
                self.touch();
                return id;
            }
        }
        let product_id = Uuid::new_v4();
        let product = draft.into_product(product_id);
        let mirror = Transaction {
            id: Uuid::new_v4(),
            date: product.purchase_date,
            kind: TransactionKind::Expense,
            category: Category::Product,
            value: product.value,
            description: mirror_description(&product.name),
            customer_name: None,
            notes: None,
            related_id: Some(product_id),
        };
        self.products.insert(0, product);
        self.transactions.insert(0, mirror);
        self.touch();
        product_id
    }

    /// Removes a transaction. Deleting the expense side of a product
    /// purchase also removes the linked product. No-op on a missing id.
    pub fn delete_transaction(&mut self, id: Uuid) -> bool {
        let pos = match self.transactions.iter().position(|t| t.id == id) {
            Some(pos) => pos,
            None => return false,
        };
        let removed = self.transactions.remove(pos);
        if let Some(product_id) = removed.related_id {
            self.products.retain(|p| p.id != product_id);
        }
        self.touch();
        true
    }

    /// Removes a product together with every transaction that references it.
    /// No-op on a missing id.
    pub fn delete_product(&mut self, id: Uuid) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return false;
        }
        self.transactions.retain(|t| t.related_id != Some(id));
        self.touch();
        true
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Monotonically increasing change counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.updated_at = Utc::now();
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn mirror_description(name: &str) -> String {
    format!("Produto: {}", name)
}
