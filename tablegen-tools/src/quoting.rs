/// Doubles embedded single quotes so free text can be placed inside a
/// single-quoted SQL literal. This is the only transformation applied to
/// comments and generated text; numeric and boolean literals are never
/// escaped.
pub fn escape_sql_string(text: &str) -> String {
    text.replace('\'', "''")
}

/// Quotes a string value for usage in SQL.
pub(crate) fn quote_value_string(s: &str) -> String {
    format!("'{}'", escape_sql_string(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_embedded_quotes() {
        assert_eq!(escape_sql_string("it's a 'test'"), "it''s a ''test''");
        assert_eq!(escape_sql_string("no quotes"), "no quotes");
        assert_eq!(escape_sql_string(""), "");
    }

    #[test]
    fn unescaping_recovers_the_original() {
        for original in ["it's", "''", "'", "a''b", "plain"] {
            let escaped = escape_sql_string(original);
            assert_eq!(escaped.replace("''", "'"), original);
        }
    }

    #[test]
    fn escaped_text_has_no_lone_quote() {
        let escaped = escape_sql_string("o'clock");

        let mut quotes_in_a_row = 0;
        for c in escaped.chars() {
            if c == '\'' {
                quotes_in_a_row += 1;
            } else {
                assert_eq!(quotes_in_a_row % 2, 0);
                quotes_in_a_row = 0;
            }
        }
        assert_eq!(quotes_in_a_row % 2, 0);
    }

    #[test]
    fn quoted_values_are_wrapped_and_escaped() {
        assert_eq!(quote_value_string("o'clock"), "'o''clock'");
        assert_eq!(quote_value_string("plain"), "'plain'");
    }
}
