/// A column's declared SQL type resolved to a closed set of families, with
/// any parameters parsed up front so row generation never re-parses the
/// declared string.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColumnType {
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Decimal { precision: u32, scale: u32 },
    Double,
    Text,
    Varchar { max_length: usize },
    Boolean,
    Date,
    Timestamp,
    Other,
}

/// What DECIMAL/NUMERIC resolves to when no usable parameters are given.
/// Equivalent to a fixed [0, 999999.99] range with two fractional digits.
const DECIMAL_FALLBACK: ColumnType = ColumnType::Decimal {
    precision: 8,
    scale: 2,
};

const VARCHAR_DEFAULT_MAX_LENGTH: usize = 50;

impl ColumnType {
    /// Resolves a declared type string, case-insensitively. Exact names are
    /// matched first, then parameterized forms by their prefix, so both
    /// `DECIMAL` and `DECIMAL(10,2)` land in the decimal family. Malformed
    /// parameters fall back to the family default instead of failing.
    pub fn parse(declared: &str) -> Self {
        let upper = declared.trim().to_uppercase();

        match upper.as_str() {
            "TINYINT" => ColumnType::TinyInt,
            "SMALLINT" => ColumnType::SmallInt,
            "INT" => ColumnType::Int,
            "BIGINT" => ColumnType::BigInt,
            "DECIMAL" | "NUMERIC" => DECIMAL_FALLBACK,
            "DOUBLE" | "FLOAT" => ColumnType::Double,
            "STRING" => ColumnType::Text,
            "VARCHAR" => ColumnType::Varchar {
                max_length: VARCHAR_DEFAULT_MAX_LENGTH,
            },
            "BOOLEAN" => ColumnType::Boolean,
            "DATE" => ColumnType::Date,
            "TIMESTAMP" => ColumnType::Timestamp,
            _ => {
                if upper.starts_with("DECIMAL") || upper.starts_with("NUMERIC") {
                    parse_decimal_arguments(&upper).unwrap_or(DECIMAL_FALLBACK)
                } else if upper.starts_with("VARCHAR") {
                    ColumnType::Varchar {
                        max_length: parse_varchar_argument(&upper)
                            .unwrap_or(VARCHAR_DEFAULT_MAX_LENGTH),
                    }
                } else {
                    ColumnType::Other
                }
            }
        }
    }
}

/// The text between the parentheses of a parameterized type, if any.
fn type_arguments(declared: &str) -> Option<&str> {
    let open = declared.find('(')?;
    let close = declared.rfind(')')?;

    (open < close).then(|| &declared[open + 1..close])
}

fn parse_decimal_arguments(declared: &str) -> Option<ColumnType> {
    let (precision, scale) = type_arguments(declared)?.split_once(',')?;
    let precision: u32 = precision.trim().parse().ok()?;
    let scale: u32 = scale.trim().parse().ok()?;

    (scale <= precision).then_some(ColumnType::Decimal { precision, scale })
}

fn parse_varchar_argument(declared: &str) -> Option<usize> {
    type_arguments(declared)?.trim().parse().ok()
}
