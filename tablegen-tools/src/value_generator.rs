use chrono::{Duration, NaiveDate, NaiveDateTime};
use itertools::Itertools;
use rand::Rng;

use crate::column_type::ColumnType;
use crate::models::Column;
use crate::quoting::quote_value_string;

/// Chance that a nullable, non-key column produces NULL.
pub(crate) const NULL_PROBABILITY: f64 = 0.1;

/// Pool the word-shaped literals are drawn from.
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim", "veniam",
    "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "commodo",
    "consequat", "duis", "aute", "irure", "voluptate", "velit", "esse", "cillum", "fugiat",
    "nulla", "pariatur", "excepteur", "sint", "occaecat",
];

/// Produces one SQL literal per column, driven by an injectable random
/// source. Also owns the primary-key counters, one per column and starting
/// at 1, so a fresh generator must be created for every INSERT generation
/// and counters cannot leak between calls.
pub struct ValueGenerator<R: Rng> {
    rng: R,
    counters: Vec<u64>,
}

impl<R: Rng> ValueGenerator<R> {
    pub fn new(column_count: usize, rng: R) -> Self {
        Self {
            rng,
            counters: vec![1; column_count],
        }
    }

    /// Renders one column's value for one row as SQL literal text. `index`
    /// is the column's position in the schema.
    pub fn value(&mut self, index: usize, column: &Column, column_type: &ColumnType) -> String {
        if column.primary_key {
            return self.primary_key_value(index, column_type);
        }

        if column.nullable && self.rng.random_bool(NULL_PROBABILITY) {
            return "NULL".to_string();
        }

        match *column_type {
            ColumnType::TinyInt => self.random_int(127),
            ColumnType::SmallInt => self.random_int(32_767),
            ColumnType::Int => self.random_int(2_147_483_647),
            ColumnType::BigInt => self.random_int(i64::MAX),
            ColumnType::Decimal { precision, scale } => self.random_decimal(precision, scale),
            ColumnType::Double => {
                format!("{:.6}", self.rng.random_range(0.0..=999_999.999_999f64))
            }
            ColumnType::Text => {
                let text = self.random_words(1, 5);
                quote_value_string(&text)
            }
            ColumnType::Varchar { max_length } => {
                let text: String = self.random_words(1, 3).chars().take(max_length).collect();
                quote_value_string(&text)
            }
            ColumnType::Boolean => {
                let value = if self.rng.random::<bool>() { "TRUE" } else { "FALSE" };
                value.to_string()
            }
            ColumnType::Date => format!("'{}'", self.random_date().format("%Y-%m-%d")),
            ColumnType::Timestamp => {
                format!("'{}'", self.random_timestamp().format("%Y-%m-%d %H:%M:%S"))
            }
            ColumnType::Other => quote_value_string(self.random_word()),
        }
    }

    /// Primary keys count up from 1 instead of drawing randomly, and are
    /// never NULL. String-shaped keys get a 'pk_N' literal, everything else
    /// the bare counter.
    fn primary_key_value(&mut self, index: usize, column_type: &ColumnType) -> String {
        let counter = self.counters[index];
        self.counters[index] += 1;

        match column_type {
            ColumnType::Text | ColumnType::Varchar { .. } => format!("'pk_{counter}'"),
            _ => counter.to_string(),
        }
    }

    fn random_int(&mut self, max: i64) -> String {
        self.rng.random_range(1..=max).to_string()
    }

    /// A value in [0, 10^(precision-scale) - 1] rendered with exactly
    /// `scale` fractional digits. 10^19 overflows u64, so digit counts are
    /// capped at 18.
    fn random_decimal(&mut self, precision: u32, scale: u32) -> String {
        let whole_digits = precision.saturating_sub(scale).min(18);
        let whole = self.rng.random_range(0..10u64.pow(whole_digits));

        if scale == 0 {
            return whole.to_string();
        }

        let scale = scale.min(18);
        let fraction = self.rng.random_range(0..10u64.pow(scale));
        format!("{whole}.{fraction:0width$}", width = scale as usize)
    }

    fn random_words(&mut self, min: usize, max: usize) -> String {
        let count = self.rng.random_range(min..=max);
        (0..count).map(|_| self.random_word()).join(" ")
    }

    fn random_word(&mut self) -> &'static str {
        WORDS[self.rng.random_range(0..WORDS.len())]
    }

    fn random_date(&mut self) -> NaiveDate {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default();
        let days = (end - start).num_days();

        start + Duration::days(self.rng.random_range(0..=days))
    }

    fn random_timestamp(&mut self) -> NaiveDateTime {
        let seconds = self.rng.random_range(0..86_400);

        self.random_date().and_hms_opt(0, 0, 0).unwrap_or_default() + Duration::seconds(seconds)
    }
}
