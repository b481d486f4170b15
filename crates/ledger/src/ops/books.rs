use uuid::Uuid;

use crate::{Book, LedgerError, ResultLedger, TransactionFilter};

use super::{App, View, normalize_required_name};

impl App {
    /// Adds a book to the active business.
    pub fn create_book(&mut self, name: &str) -> ResultLedger<Uuid> {
        let name = normalize_required_name(name, "book")?;
        self.require_session()?;
        let business = self.active_business_mut()?;

        let book = Book::new(name);
        let book_id = book.id;
        business.books.push(book);
        self.persist();
        Ok(book_id)
    }

    pub fn rename_book(&mut self, book_id: Uuid, name: &str) -> ResultLedger<()> {
        let name = normalize_required_name(name, "book")?;
        self.require_session()?;
        let business = self.active_business_mut()?;
        let book = business
            .book_mut(book_id)
            .ok_or_else(|| LedgerError::KeyNotFound("book not exists".to_string()))?;
        book.name = name;
        self.persist();
        Ok(())
    }

    /// Deletes a book and its transactions. When it was the open book, the
    /// cursor clears and the view returns to the dashboard.
    pub fn delete_book(&mut self, book_id: Uuid) -> ResultLedger<()> {
        self.require_session()?;
        let business = self.active_business_mut()?;
        let index = business
            .books
            .iter()
            .position(|book| book.id == book_id)
            .ok_or_else(|| LedgerError::KeyNotFound("book not exists".to_string()))?;
        business.books.remove(index);

        if self.active_book == Some(book_id) {
            self.active_book = None;
            self.view = View::Dashboard;
            self.filter = TransactionFilter::default();
        }
        self.persist();
        Ok(())
    }

    /// Opens a book: sets the cursor, switches the view and clears the filter.
    pub fn open_book(&mut self, book_id: Uuid) -> ResultLedger<()> {
        self.require_session()?;
        let business = self
            .active_business()
            .ok_or_else(|| LedgerError::KeyNotFound("no business selected".to_string()))?;
        if business.book(book_id).is_none() {
            return Err(LedgerError::KeyNotFound("book not exists".to_string()));
        }
        self.active_book = Some(book_id);
        self.view = View::Book;
        self.filter = TransactionFilter::default();
        Ok(())
    }
}
