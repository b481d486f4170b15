pub use books::Book;
pub use businesses::Business;
pub use error::LedgerError;
pub use filter::TransactionFilter;
pub use locale::DisplayLocale;
pub use money::Money;
pub use ops::{App, AppBuilder, Dialog, View};
pub use store::{Snapshot, SnapshotStore};
pub use team::{Role, TeamMember};
pub use transactions::{Transaction, TransactionDraft, TransactionKind};
pub use users::User;
pub use views::{BalanceLine, BookSummary, BookView, BusinessOverview, DayGroup, Totals};

mod books;
mod businesses;
mod error;
pub mod export;
mod filter;
pub mod import;
mod locale;
mod money;
mod ops;
mod store;
mod team;
mod transactions;
mod users;
pub mod views;

type ResultLedger<T> = Result<T, LedgerError>;
