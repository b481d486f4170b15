//! CSV import.
//!
//! Parses `date,type,amount,description` rows into drafts. Parsing is
//! all-or-nothing: the first bad row fails the whole file, so a partial
//! import never reaches a book.

use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{LedgerError, Money, ResultLedger, TransactionDraft, TransactionKind};

#[derive(Debug, Deserialize)]
struct ImportRow {
    date: String,
    #[serde(rename = "type")]
    kind: String,
    amount: String,
    description: String,
}

/// Parses a CSV stream with a `date,type,amount,description` header into
/// transaction drafts. Row numbers in errors count data rows from 1.
pub fn parse_csv<R: Read>(reader: R) -> ResultLedger<Vec<TransactionDraft>> {
    let mut drafts = Vec::new();
    for (index, record) in csv::Reader::from_reader(reader).deserialize().enumerate() {
        let row_number = index + 1;
        let row: ImportRow = record.map_err(|err| {
            LedgerError::InvalidImport(format!("row {row_number}: {err}"))
        })?;
        drafts.push(parse_row(row_number, &row)?);
    }
    Ok(drafts)
}

fn parse_row(row_number: usize, row: &ImportRow) -> ResultLedger<TransactionDraft> {
    let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::InvalidImport(format!(
            "row {row_number}: invalid date \"{}\", expected YYYY-MM-DD",
            row.date.trim()
        ))
    })?;
    let kind = TransactionKind::try_from(row.kind.as_str()).map_err(|_| {
        LedgerError::InvalidImport(format!(
            "row {row_number}: invalid type \"{}\", expected income or expense",
            row.kind.trim()
        ))
    })?;
    let amount: Money = row.amount.parse().map_err(|_| {
        LedgerError::InvalidImport(format!(
            "row {row_number}: invalid amount \"{}\"",
            row.amount.trim()
        ))
    })?;
    if amount.is_negative() {
        return Err(LedgerError::InvalidImport(format!(
            "row {row_number}: amount must be >= 0"
        )));
    }

    Ok(TransactionDraft {
        kind,
        amount,
        description: row.description.trim().to_string(),
        date,
    })
}
