use uuid::Uuid;

use crate::{
    Book, Business, DisplayLocale, LedgerError, ResultLedger, SnapshotStore, TransactionFilter,
    User,
    store::Snapshot,
};

mod books;
mod businesses;
mod session;
mod team;
mod transactions;

/// Which screen the controller currently points a frontend at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Book,
    Reports,
    Team,
}

/// Modal dialog state a frontend binds to. The controller only tracks which
/// dialog is open; the dialog's inputs live in the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    AddTransaction,
    EditTransaction(Uuid),
    AddBook,
    RenameBook(Uuid),
    AddBusiness,
    RenameBusiness(Uuid),
    InviteMember,
    ImportTransactions,
}

/// The state controller. Owns the whole tree and every cursor into it.
///
/// Mutating operations return a `Result`, persist the full snapshot on
/// success and leave the in-memory state authoritative when the write fails.
/// Read accessors return plain values.
#[derive(Debug)]
pub struct App {
    user: Option<User>,
    signed_in: bool,
    businesses: Vec<Business>,
    active_business: Option<Uuid>,
    active_book: Option<Uuid>,
    view: View,
    dialog: Option<Dialog>,
    filter: TransactionFilter,
    locale: DisplayLocale,
    store: SnapshotStore,
}

impl App {
    /// Return a builder for `App`. Help to build the struct.
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    /// The signed-in user, if any.
    pub fn session(&self) -> Option<&User> {
        if self.signed_in { self.user.as_ref() } else { None }
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    pub fn locale(&self) -> DisplayLocale {
        self.locale
    }

    pub fn active_business(&self) -> Option<&Business> {
        let id = self.active_business?;
        self.businesses.iter().find(|business| business.id == id)
    }

    pub fn active_book(&self) -> Option<&Book> {
        let book_id = self.active_book?;
        self.active_business()?.book(book_id)
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn set_locale(&mut self, locale: DisplayLocale) {
        self.locale = locale;
    }

    fn require_session(&self) -> ResultLedger<&User> {
        if !self.signed_in {
            return Err(LedgerError::NotSignedIn);
        }
        self.user.as_ref().ok_or(LedgerError::NotSignedIn)
    }

    fn business_mut(&mut self, business_id: Uuid) -> ResultLedger<&mut Business> {
        self.businesses
            .iter_mut()
            .find(|business| business.id == business_id)
            .ok_or_else(|| LedgerError::KeyNotFound("business not exists".to_string()))
    }

    fn active_business_mut(&mut self) -> ResultLedger<&mut Business> {
        let id = self
            .active_business
            .ok_or_else(|| LedgerError::KeyNotFound("no business selected".to_string()))?;
        self.business_mut(id)
    }

    fn active_book_mut(&mut self) -> ResultLedger<&mut Book> {
        let book_id = self
            .active_book
            .ok_or_else(|| LedgerError::KeyNotFound("no book selected".to_string()))?;
        self.active_business_mut()?
            .book_mut(book_id)
            .ok_or_else(|| LedgerError::KeyNotFound("book not exists".to_string()))
    }

    /// Writes the current state through the store. The in-memory state stays
    /// authoritative when the write fails.
    fn persist(&self) {
        let snapshot = Snapshot {
            signed_in: self.signed_in,
            user: self.user.clone(),
            businesses: self.businesses.clone(),
            active_business: self.active_business,
        };
        if let Err(err) = self.store.save(&snapshot) {
            tracing::error!(error = %err, "failed to persist snapshot");
        }
    }
}

fn normalize_required_name(value: &str, label: &str) -> ResultLedger<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidName(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_email(value: &str) -> ResultLedger<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(LedgerError::InvalidName(format!(
            "invalid email: {trimmed}"
        )));
    }
    Ok(trimmed.to_ascii_lowercase())
}

/// The builder for `App`
#[derive(Default)]
pub struct AppBuilder {
    store: Option<SnapshotStore>,
    locale: DisplayLocale,
}

impl AppBuilder {
    /// Pass the required snapshot store
    pub fn store(mut self, store: SnapshotStore) -> AppBuilder {
        self.store = Some(store);
        self
    }

    pub fn locale(mut self, locale: DisplayLocale) -> AppBuilder {
        self.locale = locale;
        self
    }

    /// Construct `App`, loading the persisted snapshot.
    pub fn build(self) -> ResultLedger<App> {
        let store = self
            .store
            .ok_or_else(|| LedgerError::Persistence("missing snapshot store".to_string()))?;

        let snapshot = store.load();
        // The auth flag only counts when a user is actually stored.
        let signed_in = snapshot.signed_in && snapshot.user.is_some();
        let active_business = snapshot
            .active_business
            .filter(|id| snapshot.businesses.iter().any(|business| business.id == *id))
            .or_else(|| snapshot.businesses.first().map(|business| business.id));

        Ok(App {
            user: snapshot.user,
            signed_in,
            businesses: snapshot.businesses,
            active_business,
            active_book: None,
            view: View::Dashboard,
            dialog: None,
            filter: TransactionFilter::default(),
            locale: self.locale,
            store,
        })
    }
}
