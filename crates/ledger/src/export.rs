//! Statement export.
//!
//! Builds a paginated statement model from a book's balance walk and renders
//! it as a fixed-width text table. Producing actual PDF bytes is left to the
//! frontend; the model carries everything a renderer needs.

use chrono::NaiveDate;

use crate::{
    DisplayLocale, Money, Transaction, TransactionKind,
    views::{self, Totals},
};

pub const ROWS_PER_PAGE: usize = 14;

const DESCRIPTION_WIDTH: usize = 34;

/// One statement line: a transaction mapped to cash columns with the running
/// balance after it.
#[derive(Clone, Debug, PartialEq)]
pub struct StatementRow {
    pub date_label: String,
    pub description: String,
    pub cash_in: Option<Money>,
    pub cash_out: Option<Money>,
    pub balance: Money,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatementPage {
    /// 1-based.
    pub number: usize,
    pub rows: Vec<StatementRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub title: String,
    pub book_name: String,
    pub generated_on: NaiveDate,
    pub locale: DisplayLocale,
    pub rtl: bool,
    pub totals: Totals,
    pub pages: Vec<StatementPage>,
}

/// Builds the statement for one (already filtered) transaction set. Rows
/// follow the ascending balance walk; an empty set yields zero pages.
pub fn build_statement(
    book_name: &str,
    transactions: &[Transaction],
    locale: DisplayLocale,
    generated_on: NaiveDate,
) -> Statement {
    let rows: Vec<StatementRow> = views::balance_lines(transactions)
        .into_iter()
        .map(|line| {
            let tx = line.transaction;
            let (cash_in, cash_out) = match tx.kind {
                TransactionKind::Income => (Some(tx.amount), None),
                TransactionKind::Expense => (None, Some(tx.amount)),
            };
            StatementRow {
                date_label: locale.date_label(tx.date),
                description: tx.description,
                cash_in,
                cash_out,
                balance: line.balance,
            }
        })
        .collect();

    let pages = rows
        .chunks(ROWS_PER_PAGE)
        .enumerate()
        .map(|(index, chunk)| StatementPage {
            number: index + 1,
            rows: chunk.to_vec(),
        })
        .collect();

    Statement {
        title: "Account Statement".to_string(),
        book_name: book_name.to_string(),
        generated_on,
        locale,
        rtl: locale.is_rtl(),
        totals: views::totals(transactions),
        pages,
    }
}

impl Statement {
    /// Suggested download name, whitespace runs collapsed to `-`.
    pub fn file_name(&self) -> String {
        let slug: Vec<&str> = self.book_name.split_whitespace().collect();
        format!("{}-{}.pdf", slug.join("-"), self.generated_on.format("%Y-%m-%d"))
    }

    /// Renders the statement as a fixed-width text table, one block per page.
    /// Long descriptions wrap onto continuation lines under their column.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.title));
        out.push_str(&format!("Book: {}\n", self.book_name));
        out.push_str(&format!(
            "Generated: {}\n",
            self.locale.date_label(self.generated_on)
        ));
        out.push_str(&format!(
            "Cash in total:  {}\n",
            self.locale.format_amount(self.totals.income)
        ));
        out.push_str(&format!(
            "Cash out total: {}\n",
            self.locale.format_amount(self.totals.expense)
        ));
        out.push_str(&format!(
            "Net balance:    {}\n",
            self.locale.format_amount(self.totals.net)
        ));

        let total_pages = self.pages.len();
        for page in &self.pages {
            out.push_str(&format!(
                "\n--- Page {} of {} ---\n",
                page.number, total_pages
            ));
            out.push_str(&format!(
                "{:<20}{:<36}{:>12}{:>12}{:>14}\n",
                "Date", "Description", "Cash in", "Cash out", "Balance",
            ));
            out.push_str(&format!("{}\n", "-".repeat(94)));
            for row in &page.rows {
                self.push_row(&mut out, row);
            }
        }

        out
    }

    fn push_row(&self, out: &mut String, row: &StatementRow) {
        let cash_in = row
            .cash_in
            .map_or_else(|| "-".to_string(), |amount| self.locale.format_amount(amount));
        let cash_out = row
            .cash_out
            .map_or_else(|| "-".to_string(), |amount| self.locale.format_amount(amount));

        let wrapped = textwrap::wrap(&row.description, DESCRIPTION_WIDTH);
        let mut lines = wrapped.iter();
        let first = lines.next().map_or("", |line| line.as_ref());
        out.push_str(&format!(
            "{:<20}{:<36}{:>12}{:>12}{:>14}\n",
            row.date_label,
            first,
            cash_in,
            cash_out,
            self.locale.format_amount(row.balance),
        ));
        for line in lines {
            out.push_str(&format!("{:<20}{}\n", "", line.as_ref()));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    fn tx(kind: TransactionKind, cents: i64, description: &str, day: u32) -> Transaction {
        Transaction::new(
            kind,
            Money::new(cents),
            description.to_string(),
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            Uuid::new_v4(),
            "Alice".to_string(),
        )
        .unwrap()
    }

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn fourteen_rows_per_page() {
        let transactions: Vec<Transaction> = (1..=30)
            .map(|day| tx(TransactionKind::Income, 1_00, "sale", day))
            .collect();
        let statement =
            build_statement("General", &transactions, DisplayLocale::En, generated_on());

        let sizes: Vec<usize> = statement.pages.iter().map(|page| page.rows.len()).collect();
        assert_eq!(sizes, vec![14, 14, 2]);
        let numbers: Vec<usize> = statement.pages.iter().map(|page| page.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn empty_set_yields_no_pages() {
        let statement = build_statement("General", &[], DisplayLocale::En, generated_on());
        assert!(statement.pages.is_empty());
        assert_eq!(statement.totals, Totals::default());
        assert!(!statement.render_text().contains("Page"));
    }

    #[test]
    fn kind_maps_to_cash_columns_and_balance_runs() {
        let transactions = vec![
            tx(TransactionKind::Income, 100_00, "opening sale", 1),
            tx(TransactionKind::Expense, 40_00, "supplies", 2),
        ];
        let statement =
            build_statement("General", &transactions, DisplayLocale::En, generated_on());

        let rows = &statement.pages[0].rows;
        assert_eq!(rows[0].cash_in, Some(Money::new(100_00)));
        assert_eq!(rows[0].cash_out, None);
        assert_eq!(rows[0].balance, Money::new(100_00));
        assert_eq!(rows[1].cash_in, None);
        assert_eq!(rows[1].cash_out, Some(Money::new(40_00)));
        assert_eq!(rows[1].balance, Money::new(60_00));
    }

    #[test]
    fn file_name_collapses_whitespace() {
        let statement = build_statement("  Petty   Cash ", &[], DisplayLocale::En, generated_on());
        assert_eq!(statement.file_name(), "Petty-Cash-2024-03-05.pdf");
    }

    #[test]
    fn render_wraps_long_descriptions() {
        let long = "a very long description that certainly exceeds the column width";
        let transactions = vec![tx(TransactionKind::Income, 5_00, long, 1)];
        let statement =
            build_statement("General", &transactions, DisplayLocale::En, generated_on());

        let text = statement.render_text();
        assert!(text.contains("--- Page 1 of 1 ---"));
        assert!(text.contains("a very long description that"));
        assert!(text.contains("certainly exceeds"));
        assert!(text.contains("Net balance:    5.00"));
    }

    #[test]
    fn summary_totals_render_in_the_header() {
        let transactions = vec![
            tx(TransactionKind::Income, 100_00, "opening sale", 1),
            tx(TransactionKind::Expense, 40_00, "supplies", 2),
        ];
        let statement =
            build_statement("General", &transactions, DisplayLocale::En, generated_on());

        let text = statement.render_text();
        let net = text.find("Net balance:    60.00").unwrap();
        let first_page = text.find("--- Page 1").unwrap();
        assert!(net < first_page);
        assert!(text.find("Cash in total:  100.00").unwrap() < first_page);
        assert!(text.find("Cash out total: 40.00").unwrap() < first_page);
    }

    #[test]
    fn arabic_statement_is_marked_rtl() {
        let statement = build_statement("General", &[], DisplayLocale::Ar, generated_on());
        assert!(statement.rtl);
    }
}
