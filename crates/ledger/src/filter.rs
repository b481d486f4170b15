//! Structured transaction filters.

use chrono::NaiveDate;

use crate::{Money, Transaction, TransactionKind};

/// Filters for listing transactions inside a book.
///
/// Every field is optional; present fields are combined with AND and absent
/// fields always pass. Date bounds are inclusive and compared at day
/// granularity: `start_date` means from the start of that day, `end_date`
/// through the end of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive substring match on the description.
    pub text: Option<String>,
    pub kind: Option<TransactionKind>,
    pub min_amount: Option<Money>,
    pub max_amount: Option<Money>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    /// A filter that only matches on description text.
    pub fn from_text(query: &str) -> Self {
        Self {
            text: Some(query.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.kind.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(text) = &self.text
            && !tx
                .description
                .to_lowercase()
                .contains(&text.to_lowercase())
        {
            return false;
        }
        if let Some(kind) = self.kind
            && tx.kind != kind
        {
            return false;
        }
        if let Some(min) = self.min_amount
            && tx.amount < min
        {
            return false;
        }
        if let Some(max) = self.max_amount
            && tx.amount > max
        {
            return false;
        }
        if let Some(start) = self.start_date
            && tx.date < start
        {
            return false;
        }
        if let Some(end) = self.end_date
            && tx.date > end
        {
            return false;
        }
        true
    }
}
