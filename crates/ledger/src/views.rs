//! Derived ledger views.
//!
//! Everything in this module is a pure function over a transaction slice;
//! nothing here mutates state. The balance walk sorts ascending by business
//! date (stable, so same-day entries keep their insertion order), the display
//! grouping reverses that walk and buckets lines by calendar day label.

use uuid::Uuid;

use crate::{Business, DisplayLocale, Money, Transaction, TransactionKind};

/// One transaction with the running balance after applying it.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceLine {
    pub transaction: Transaction,
    pub balance: Money,
}

/// Display bucket of lines sharing a calendar date label, newest day first.
#[derive(Clone, Debug, PartialEq)]
pub struct DayGroup {
    pub label: String,
    pub lines: Vec<BalanceLine>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub net: Money,
}

/// The full derived view of one book under the active filter.
#[derive(Clone, Debug, PartialEq)]
pub struct BookView {
    /// Ascending balance walk.
    pub lines: Vec<BalanceLine>,
    /// The walk reversed and grouped by day for display.
    pub groups: Vec<DayGroup>,
    pub totals: Totals,
}

/// Per-book dashboard row.
#[derive(Clone, Debug, PartialEq)]
pub struct BookSummary {
    pub id: Uuid,
    pub name: String,
    pub entries: usize,
    pub net: Money,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BusinessOverview {
    pub books: Vec<BookSummary>,
    pub totals: Totals,
}

/// Sums income and expense over the (already filtered) set.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Money::ZERO;
    let mut expense = Money::ZERO;
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => expense += tx.amount,
        }
    }
    Totals {
        income,
        expense,
        net: income - expense,
    }
}

/// Walks the transactions in ascending date order, accumulating the running
/// balance.
pub fn balance_lines(transactions: &[Transaction]) -> Vec<BalanceLine> {
    let mut ordered: Vec<Transaction> = transactions.to_vec();
    // Stable: entries on the same date keep their insertion order.
    ordered.sort_by_key(|tx| tx.date);

    let mut balance = Money::ZERO;
    let mut lines = Vec::with_capacity(ordered.len());
    for tx in ordered {
        balance += tx.signed_amount();
        lines.push(BalanceLine {
            transaction: tx,
            balance,
        });
    }
    lines
}

/// Buckets the reversed balance walk by day label, in first-seen order.
pub fn day_groups(lines: &[BalanceLine], locale: DisplayLocale) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for line in lines.iter().rev() {
        let label = locale.date_label(line.transaction.date);
        match groups.last_mut() {
            Some(group) if group.label == label => group.lines.push(line.clone()),
            _ => groups.push(DayGroup {
                label,
                lines: vec![line.clone()],
            }),
        }
    }
    groups
}

pub fn book_view(transactions: &[Transaction], locale: DisplayLocale) -> BookView {
    let lines = balance_lines(transactions);
    let groups = day_groups(&lines, locale);
    BookView {
        lines,
        groups,
        totals: totals(transactions),
    }
}

/// Dashboard rows: per-book entry counts and net balances, plus totals over
/// the whole business.
pub fn business_overview(business: &Business) -> BusinessOverview {
    let mut books = Vec::with_capacity(business.books.len());
    let mut overall = Totals::default();
    for book in &business.books {
        let book_totals = totals(&book.transactions);
        overall.income += book_totals.income;
        overall.expense += book_totals.expense;
        books.push(BookSummary {
            id: book.id,
            name: book.name.clone(),
            entries: book.transactions.len(),
            net: book_totals.net,
        });
    }
    overall.net = overall.income - overall.expense;
    BusinessOverview {
        books,
        totals: overall,
    }
}
