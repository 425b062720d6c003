use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// One recorded financial event: a service income or an expense.
///
/// Field names and enumeration labels serialize in the tracker's historical
/// wire format, so previously stored data keeps loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    pub value: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_id: Option<Uuid>,
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    #[serde(rename = "RECEITA")]
    Income,
    #[serde(rename = "DESPESA")]
    Expense,
}

/// Closed classification of a transaction's purpose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "Serviço")]
    Service,
    #[serde(rename = "Produto")]
    Product,
    #[serde(rename = "Despesa Variável")]
    VariableExpense,
    #[serde(rename = "Gasto Geral")]
    GeneralExpense,
    #[serde(rename = "Manutenção")]
    Maintenance,
    #[serde(rename = "Aluguel")]
    Rent,
}

impl Category {
    /// Display label, identical to the stored form.
    pub fn label(self) -> &'static str {
        match self {
            Category::Service => "Serviço",
            Category::Product => "Produto",
            Category::VariableExpense => "Despesa Variável",
            Category::GeneralExpense => "Gasto Geral",
            Category::Maintenance => "Manutenção",
            Category::Rent => "Aluguel",
        }
    }
}

/// Catalog of services offered, with the walk-in price list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceKind {
    #[serde(rename = "Corte")]
    Cut,
    #[serde(rename = "Corte na Tesoura")]
    ScissorCut,
    #[serde(rename = "Barba")]
    Beard,
    #[serde(rename = "Sobrancelha")]
    Eyebrow,
    #[serde(rename = "Pezinho")]
    Hairline,
    #[serde(rename = "Pigmentação")]
    Pigmentation,
    #[serde(rename = "Relaxamento")]
    Relaxing,
    #[serde(rename = "Corte + Barba")]
    CutBeard,
    #[serde(rename = "Corte + Sobrancelha")]
    CutEyebrow,
    #[serde(rename = "Corte + Barba + Sobrancelha")]
    CutBeardEyebrow,
    #[serde(rename = "Corte + Freestyle")]
    CutFreestyle,
    #[serde(rename = "Outros")]
    Others,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 12] = [
        ServiceKind::Cut,
        ServiceKind::ScissorCut,
        ServiceKind::Beard,
        ServiceKind::Eyebrow,
        ServiceKind::Hairline,
        ServiceKind::Pigmentation,
        ServiceKind::Relaxing,
        ServiceKind::CutBeard,
        ServiceKind::CutEyebrow,
        ServiceKind::CutBeardEyebrow,
        ServiceKind::CutFreestyle,
        ServiceKind::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Cut => "Corte",
            ServiceKind::ScissorCut => "Corte na Tesoura",
            ServiceKind::Beard => "Barba",
            ServiceKind::Eyebrow => "Sobrancelha",
            ServiceKind::Hairline => "Pezinho",
            ServiceKind::Pigmentation => "Pigmentação",
            ServiceKind::Relaxing => "Relaxamento",
            ServiceKind::CutBeard => "Corte + Barba",
            ServiceKind::CutEyebrow => "Corte + Sobrancelha",
            ServiceKind::CutBeardEyebrow => "Corte + Barba + Sobrancelha",
            ServiceKind::CutFreestyle => "Corte + Freestyle",
            ServiceKind::Others => "Outros",
        }
    }

    /// Walk-in price. `Others` has no fixed price; the operator types one in.
    pub fn default_price(self) -> Option<f64> {
        match self {
            ServiceKind::Cut => Some(25.0),
            ServiceKind::ScissorCut => Some(30.0),
            ServiceKind::Beard => Some(20.0),
            ServiceKind::Eyebrow => Some(10.0),
            ServiceKind::Hairline => Some(10.0),
            ServiceKind::Pigmentation => Some(25.0),
            ServiceKind::Relaxing => Some(40.0),
            ServiceKind::CutBeard => Some(45.0),
            ServiceKind::CutEyebrow => Some(30.0),
            ServiceKind::CutBeardEyebrow => Some(50.0),
            ServiceKind::CutFreestyle => Some(35.0),
            ServiceKind::Others => None,
        }
    }
}

/// Field set accepted by the save operations; the store assigns the id.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub category: Category,
    pub value: f64,
    pub description: String,
    pub customer_name: Option<String>,
    pub notes: Option<String>,
    pub related_id: Option<Uuid>,
}

impl TransactionDraft {
    /// Draft for a service performed on a customer.
    pub fn service(
        date: NaiveDate,
        service: ServiceKind,
        value: f64,
        customer: impl Into<String>,
    ) -> Self {
        Self {
            date,
            kind: TransactionKind::Income,
            category: Category::Service,
            value,
            description: service.label().to_string(),
            customer_name: Some(customer.into()),
            notes: None,
            related_id: None,
        }
    }

    /// Draft for a general expense row.
    pub fn expense(
        date: NaiveDate,
        category: Category,
        value: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            kind: TransactionKind::Expense,
            category,
            value,
            description: description.into(),
            customer_name: None,
            notes: None,
            related_id: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Collaborator-side validation; the store assumes drafts already passed.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(LedgerError::InvalidInput(
                "value must be a non-negative amount".into(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                "description must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_transaction(self, id: Uuid) -> Transaction {
        Transaction {
            id,
            date: self.date,
            kind: self.kind,
            category: self.category,
            value: self.value,
            description: self.description,
            customer_name: self.customer_name,
            notes: self.notes,
            related_id: self.related_id,
        }
    }

    /// Replaces every field of `target` except its id.
    pub(crate) fn apply_to(self, target: &mut Transaction) {
        target.date = self.date;
        target.kind = self.kind;
        target.category = self.category;
        target.value = self.value;
        target.description = self.description;
        target.customer_name = self.customer_name;
        target.notes = self.notes;
        target.related_id = self.related_id;
    }
}
