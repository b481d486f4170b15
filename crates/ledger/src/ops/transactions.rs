use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    LedgerError, Money, ResultLedger, Transaction, TransactionDraft, TransactionFilter,
    TransactionKind,
    export::{self, Statement},
    views::{self, BookView},
};

use super::App;

impl App {
    /// Adds a transaction to the open book, stamped with the current user.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: &str,
        date: NaiveDate,
    ) -> ResultLedger<Uuid> {
        let user = self.require_session()?.clone();
        let tx = Transaction::new(
            kind,
            amount,
            description.trim().to_string(),
            date,
            user.id,
            user.name,
        )?;
        let transaction_id = tx.id;

        let book = self.active_book_mut()?;
        book.transactions.push(tx);
        self.persist();
        Ok(transaction_id)
    }

    /// Updates a transaction's editable fields. Id, creator and entry
    /// timestamp never change.
    pub fn update_transaction(
        &mut self,
        transaction_id: Uuid,
        kind: TransactionKind,
        amount: Money,
        description: &str,
        date: NaiveDate,
    ) -> ResultLedger<()> {
        self.require_session()?;
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(
                "amount must be >= 0".to_string(),
            ));
        }
        let description = description.trim().to_string();

        let book = self.active_book_mut()?;
        let tx = book
            .transaction_mut(transaction_id)
            .ok_or_else(|| LedgerError::KeyNotFound("transaction not exists".to_string()))?;
        tx.kind = kind;
        tx.amount = amount;
        tx.description = description;
        tx.date = date;
        self.persist();
        Ok(())
    }

    pub fn delete_transaction(&mut self, transaction_id: Uuid) -> ResultLedger<()> {
        self.require_session()?;
        let book = self.active_book_mut()?;
        let index = book
            .transactions
            .iter()
            .position(|tx| tx.id == transaction_id)
            .ok_or_else(|| LedgerError::KeyNotFound("transaction not exists".to_string()))?;
        book.transactions.remove(index);
        self.persist();
        Ok(())
    }

    /// Appends imported rows to the open book as one transition: everything is
    /// validated first, then committed and persisted once.
    pub fn import_transactions(&mut self, drafts: Vec<TransactionDraft>) -> ResultLedger<usize> {
        let user = self.require_session()?.clone();

        let mut stamped = Vec::with_capacity(drafts.len());
        for draft in drafts {
            stamped.push(Transaction::new(
                draft.kind,
                draft.amount,
                draft.description,
                draft.date,
                user.id,
                user.name.clone(),
            )?);
        }

        let book = self.active_book_mut()?;
        let count = stamped.len();
        book.transactions.extend(stamped);
        self.persist();
        Ok(count)
    }

    pub fn set_filter(&mut self, filter: TransactionFilter) {
        self.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.filter = TransactionFilter::default();
    }

    /// The open book's transactions that pass the active filter, in insertion
    /// order.
    pub fn filtered_transactions(&self) -> Vec<Transaction> {
        let Some(book) = self.active_book() else {
            return Vec::new();
        };
        book.transactions
            .iter()
            .filter(|tx| self.filter.matches(tx))
            .cloned()
            .collect()
    }

    /// The derived view of the open book under the active filter.
    pub fn book_view(&self) -> Option<BookView> {
        self.active_book()?;
        Some(views::book_view(&self.filtered_transactions(), self.locale))
    }

    /// Builds a statement from the open book's filtered view, dated today.
    pub fn statement(&self) -> Option<Statement> {
        let book = self.active_book()?;
        Some(export::build_statement(
            &book.name,
            &self.filtered_transactions(),
            self.locale,
            Utc::now().date_naive(),
        ))
    }
}
