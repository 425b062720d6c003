use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// One inventory/supply item. Its acquisition cost is mirrored by an
/// expense transaction kept in sync by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub purchase_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub value: f64,
}

impl Product {
    /// Whole days the product lasted; `None` while still in use.
    pub fn duration_days(&self) -> Option<i64> {
        self.end_date
            .map(|end| (end - self.purchase_date).num_days())
    }

    pub fn is_in_use(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Field set accepted by `save_product`; the store assigns the id.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub purchase_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub value: f64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, purchase_date: NaiveDate, value: f64) -> Self {
        Self {
            name: name.into(),
            purchase_date,
            end_date: None,
            value,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Collaborator-side validation; the store assumes drafts already passed.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(LedgerError::InvalidInput(
                "value must be a non-negative amount".into(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(LedgerError::InvalidInput("name must not be empty".into()));
        }
        if let Some(end) = self.end_date {
            if end < self.purchase_date {
                return Err(LedgerError::InvalidInput(
                    "end date must not precede the purchase date".into(),
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn into_product(self, id: Uuid) -> Product {
        Product {
            id,
            name: self.name,
            purchase_date: self.purchase_date,
            end_date: self.end_date,
            value: self.value,
        }
    }

    /// Replaces every field of `target` except its id.
    pub(crate) fn apply_to(self, target: &mut Product) {
        target.name = self.name;
        target.purchase_date = self.purchase_date;
        target.end_date = self.end_date;
        target.value = self.value;
    }
}
