use itertools::Itertools;
use serde::{Deserialize, Deserializer};

use crate::error::{Result, TablegenError};

/// A single column of the table being generated.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

fn default_nullable() -> bool {
    true
}

/// The declarative schema the generator consumes. Read-only input: one
/// generation call never mutates it.
#[derive(Debug, Clone, Eq, PartialEq, Default, Deserialize)]
pub struct TableSchema {
    pub table_name: String,
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    /// How many INSERT rows to synthesize. Absent or non-numeric values
    /// deserialize to 0.
    #[serde(default, deserialize_with = "rows_or_zero")]
    pub rows: u64,
}

impl TableSchema {
    /// Checks the two structural requirements before any SQL is produced.
    pub fn validate(&self) -> Result {
        if self.table_name.trim().is_empty() {
            return Err(TablegenError::MissingTableName);
        }

        if self.columns.is_empty() {
            return Err(TablegenError::EmptyColumnList);
        }

        Ok(())
    }

    /// The fully qualified table name. Qualifiers that are absent or blank
    /// after trimming are left out.
    pub fn qualified_table_name(&self) -> String {
        [
            self.catalog.as_deref(),
            self.schema.as_deref(),
            Some(self.table_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .join(".")
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.primary_key)
    }
}

fn rows_or_zero<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeRows {
        Count(u64),
        Other(serde::de::IgnoredAny),
    }

    Ok(match MaybeRows::deserialize(deserializer)? {
        MaybeRows::Count(count) => count,
        MaybeRows::Other(_) => 0,
    })
}
