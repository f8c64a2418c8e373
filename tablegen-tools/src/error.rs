use thiserror::Error;

#[derive(Error, Debug)]
pub enum TablegenError {
    #[error("missing required field: table_name")]
    MissingTableName,

    #[error("schema has no columns")]
    EmptyColumnList,
}

pub type Result<T = ()> = std::result::Result<T, TablegenError>;
