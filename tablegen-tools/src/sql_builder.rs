use std::path::Path;

use itertools::Itertools;
use rand::Rng;
use serde::Serialize;
use tracing::instrument;

use crate::column_type::ColumnType;
use crate::error::Result;
use crate::models::TableSchema;
use crate::quoting::quote_value_string;
use crate::value_generator::ValueGenerator;

/// The two SQL artifacts produced from one schema.
#[derive(Debug, Eq, PartialEq, Serialize)]
pub struct GeneratedSql {
    pub create_sql: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_sql: Option<String>,
}

/// Generates the CREATE TABLE statement and, when the schema asks for rows,
/// the INSERT statement, using the process-level random source.
#[instrument(skip_all, fields(table = %schema.table_name, rows = schema.rows))]
pub fn generate(schema: &TableSchema) -> Result<GeneratedSql> {
    generate_with_rng(schema, rand::rng())
}

/// Same as [generate], but with a caller-supplied random source so draws can
/// be made deterministic.
pub fn generate_with_rng<R: Rng>(schema: &TableSchema, mut rng: R) -> Result<GeneratedSql> {
    let create_sql = build_create_table(schema)?;

    let insert_sql = if schema.rows > 0 {
        Some(build_insert(schema, &mut rng)?)
    } else {
        None
    };

    Ok(GeneratedSql {
        create_sql,
        insert_sql,
    })
}

/// Emits the CREATE TABLE statement: one line per column in schema order,
/// followed by a PRIMARY KEY constraint line when any column is a key.
#[instrument(skip_all)]
pub fn build_create_table(schema: &TableSchema) -> Result<String> {
    schema.validate()?;

    let primary_key_columns = schema
        .primary_key_columns()
        .map(|column| column.name.as_str())
        .collect_vec();

    let mut sql = "CREATE TABLE ".to_string();
    sql.push_str(&schema.qualified_table_name());
    sql.push_str(" (");

    let last = schema.columns.len() - 1;
    for (index, column) in schema.columns.iter().enumerate() {
        sql.push_str("\n  ");
        sql.push_str(&column.name);
        sql.push(' ');
        sql.push_str(&column.data_type);

        if !column.nullable || column.primary_key {
            sql.push_str(" NOT NULL");
        }

        if let Some(comment) = column.comment.as_deref().filter(|c| !c.is_empty()) {
            sql.push_str(" COMMENT ");
            sql.push_str(&quote_value_string(comment));
        }

        // The constraint line keeps the last column's trailing comma.
        if index < last || !primary_key_columns.is_empty() {
            sql.push(',');
        }
    }

    if !primary_key_columns.is_empty() {
        sql.push_str("\n  PRIMARY KEY (");
        sql.push_str(&primary_key_columns.iter().join(", "));
        sql.push(')');
    }

    sql.push_str("\n);");

    Ok(sql)
}

/// Emits the INSERT statement: one value tuple per requested row, values in
/// column order. Returns empty text when the schema asks for no rows.
///
/// Column types are resolved once up front; primary-key counters are fresh
/// per call and shared across all rows of that call.
#[instrument(skip_all)]
pub fn build_insert<R: Rng>(schema: &TableSchema, rng: R) -> Result<String> {
    schema.validate()?;

    if schema.rows == 0 {
        return Ok(String::new());
    }

    let column_types = schema
        .columns
        .iter()
        .map(|column| ColumnType::parse(&column.data_type))
        .collect_vec();

    let mut sql = "INSERT INTO ".to_string();
    sql.push_str(&schema.qualified_table_name());
    sql.push_str(" (");
    sql.push_str(&schema.columns.iter().map(|column| column.name.as_str()).join(", "));
    sql.push_str(") VALUES\n");

    let mut generator = ValueGenerator::new(schema.columns.len(), rng);

    for row in 0..schema.rows {
        if row > 0 {
            sql.push_str(",\n");
        }

        sql.push('(');
        for (index, (column, column_type)) in
            schema.columns.iter().zip(&column_types).enumerate()
        {
            if index > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&generator.value(index, column, column_type));
        }
        sql.push(')');
    }

    sql.push(';');

    Ok(sql)
}

/// The suggested output filename for one artifact: the input's path and
/// extension stripped, suffix and `.sql` appended.
pub fn output_filename(input_file: &str, suffix: &str) -> String {
    let stem = Path::new(input_file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    format!("{stem}{suffix}.sql")
}
