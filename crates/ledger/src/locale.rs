//! Display locales for dates and amounts.
//!
//! The ledger itself is locale-free; only the derived labels (day group
//! headers, statement columns) go through this type.

use chrono::NaiveDate;
use num_format::ToFormattedString;
use serde::{Deserialize, Serialize};

use crate::Money;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayLocale {
    #[default]
    En,
    Ar,
}

impl DisplayLocale {
    /// Arabic renders right-to-left; frontends mirror their layout on this.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    fn chrono_locale(self) -> chrono::Locale {
        match self {
            Self::En => chrono::Locale::en_US,
            Self::Ar => chrono::Locale::ar_EG,
        }
    }

    fn num_locale(self) -> num_format::Locale {
        match self {
            Self::En => num_format::Locale::en,
            Self::Ar => num_format::Locale::ar,
        }
    }

    /// Calendar date label used for grouping and statements, e.g. `5 March
    /// 2024`.
    pub fn date_label(self, date: NaiveDate) -> String {
        date.format_localized("%-d %B %Y", self.chrono_locale())
            .to_string()
    }

    /// Formats an amount with thousands separators, e.g. `1,234.50`.
    pub fn format_amount(self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let abs = amount.cents().unsigned_abs();
        let major = (abs / 100).to_formatted_string(&self.num_locale());
        let cents = abs % 100;
        format!("{sign}{major}.{cents:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_date_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(DisplayLocale::En.date_label(date), "5 March 2024");
    }

    #[test]
    fn arabic_date_label_uses_arabic_month_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let label = DisplayLocale::Ar.date_label(date);
        assert_ne!(label, DisplayLocale::En.date_label(date));
        assert!(!label.is_empty());
    }

    #[test]
    fn amount_grouping_and_sign() {
        assert_eq!(
            DisplayLocale::En.format_amount(Money::new(123_456_78)),
            "123,456.78"
        );
        assert_eq!(DisplayLocale::En.format_amount(Money::new(-1050)), "-10.50");
        assert_eq!(DisplayLocale::En.format_amount(Money::ZERO), "0.00");
    }

    #[test]
    fn rtl_flag() {
        assert!(!DisplayLocale::En.is_rtl());
        assert!(DisplayLocale::Ar.is_rtl());
    }
}
