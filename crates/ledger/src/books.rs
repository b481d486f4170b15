//! Books: named ledgers inside a business.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Transaction;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub name: String,
    /// Entries in the order they were added. Derived views sort by business
    /// date; this list keeps insertion order as the tie-breaker.
    pub transactions: Vec<Transaction>,
}

impl Book {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            transactions: Vec::new(),
        }
    }

    pub fn transaction(&self, transaction_id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == transaction_id)
    }

    pub fn transaction_mut(&mut self, transaction_id: Uuid) -> Option<&mut Transaction> {
        self.transactions
            .iter_mut()
            .find(|tx| tx.id == transaction_id)
    }
}
