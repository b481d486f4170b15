//! Transaction primitives.
//!
//! A `Transaction` is a single ledger entry inside a book. The `date` is the
//! business date the entry applies to; `entered_at` records when it was
//! written.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{LedgerError, Money, ResultLedger};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidKind(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
    pub date: NaiveDate,
    pub created_by: Uuid,
    pub created_by_name: String,
    pub entered_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        description: String,
        date: NaiveDate,
        created_by: Uuid,
        created_by_name: String,
    ) -> ResultLedger<Self> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(
                "amount must be >= 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            description,
            date,
            created_by,
            created_by_name,
            entered_at: Utc::now(),
        })
    }

    /// The amount as it affects a running balance: income positive, expense
    /// negative.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// A transaction not yet stamped with creator and entry metadata. Produced by
/// the CSV importer and consumed by `App::import_transactions`.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
    pub date: NaiveDate,
}
