//! Ad-hoc query execution against the loaded table.
//!
//! Query text is executed verbatim. It comes from configuration, never from
//! untrusted input, so no parameter binding is attempted.

use std::fmt;

use futures::TryStreamExt;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Executor, Row, Statement, TypeInfo, ValueRef};

use crate::error_handling::DatabaseError;
use crate::storage::Store;

/// A single result cell, typed by SQLite's runtime storage class.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// SQL NULL
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// 8-byte IEEE float
    Real(f64),
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
}

impl QueryValue {
    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            QueryValue::Integer(i) => Some(*i as f64),
            QueryValue::Real(f) => Some(*f),
            _ => None,
        }
    }

    /// Text view of the cell, if it holds text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, QueryValue::Integer(_) | QueryValue::Real(_))
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Null => f.write_str("NULL"),
            QueryValue::Integer(i) => write!(f, "{i}"),
            // Keep a decimal point on whole numbers so REAL and INTEGER stay distinguishable
            QueryValue::Real(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            QueryValue::Real(v) => write!(f, "{v}"),
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

/// Tabular result of [`run_query`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOutput {
    /// Column names in result order
    pub columns: Vec<String>,
    /// Result rows, each with one value per column
    pub rows: Vec<Vec<QueryValue>>,
}

impl QueryOutput {
    /// The first cell of the first row, for single-value queries such as aggregates.
    pub fn scalar(&self) -> Option<&QueryValue> {
        self.rows.first().and_then(|row| row.first())
    }

    /// All values of the named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&QueryValue>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().filter_map(|row| row.get(idx)).collect())
    }

    /// True when the query returned no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for QueryOutput {
    /// Renders an aligned text table with a leading row index column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                cells
                    .iter()
                    .filter_map(|row| row.get(i).map(String::len))
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (name, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {name:>width$}")?;
        }
        writeln!(f)?;

        if self.rows.is_empty() {
            return writeln!(f, "(0 rows)");
        }

        for (i, (row, rendered)) in self.rows.iter().zip(&cells).enumerate() {
            write!(f, "{i:<index_width$}")?;
            for ((value, text), width) in row.iter().zip(rendered).zip(&widths) {
                if value.is_numeric() {
                    write!(f, "  {text:>width$}")?;
                } else {
                    write!(f, "  {text:<width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn decode_value(row: &SqliteRow, index: usize) -> Result<QueryValue, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(QueryValue::Null);
    }
    let storage_class = raw.type_info().name().to_string();

    let value = match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => QueryValue::Integer(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" | "NUMERIC" => QueryValue::Real(row.try_get_unchecked::<f64, _>(index)?),
        "BLOB" => QueryValue::Blob(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        _ => QueryValue::Text(row.try_get_unchecked::<String, _>(index)?),
    };
    Ok(value)
}

/// Executes `query_text` and collects the full result.
///
/// Column names come from the prepared statement, so they are known even when
/// the query returns no rows.
///
/// # Errors
///
/// Returns `DatabaseError::SqlError` for malformed SQL, a missing table, or a
/// failure while stepping through the result.
pub async fn run_query(store: &mut Store, query_text: &str) -> Result<QueryOutput, DatabaseError> {
    let conn = store.connection();
    let statement = (&mut *conn).prepare(query_text).await?;
    let columns: Vec<String> = statement
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    let mut output = QueryOutput {
        columns,
        rows: Vec::new(),
    };

    let mut rows = statement.query().fetch(&mut *conn);
    while let Some(row) = rows.try_next().await? {
        let values = (0..row.len())
            .map(|i| decode_value(&row, i))
            .collect::<Result<Vec<_>, _>>()?;
        output.rows.push(values);
    }

    log::debug!(
        "Query returned {} rows: {}",
        output.rows.len(),
        query_text
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnrichedBankRecord;
    use crate::storage::load_to_db;
    use crate::storage::test_helpers::{create_test_store, sample_records};

    fn record(name: &str, gbp: f64) -> EnrichedBankRecord {
        EnrichedBankRecord {
            name: name.to_string(),
            mc_usd_billion: gbp / 0.8,
            mc_gbp_billion: gbp,
            mc_eur_billion: 0.0,
            mc_inr_billion: 0.0,
        }
    }

    #[tokio::test]
    async fn test_average_gbp() {
        let mut store = create_test_store().await;
        load_to_db(
            &mut store,
            "Largest_banks",
            &[record("Bank A", 80.0), record("Bank B", 40.0)],
        )
        .await
        .unwrap();

        let out = run_query(&mut store, "SELECT AVG(MC_GBP_Billion) FROM Largest_banks")
            .await
            .unwrap();
        assert_eq!(out.columns, vec!["AVG(MC_GBP_Billion)"]);
        assert_eq!(out.scalar(), Some(&QueryValue::Real(60.0)));
    }

    #[tokio::test]
    async fn test_select_all_preserves_insert_order() {
        let mut store = create_test_store().await;
        let records = sample_records();
        load_to_db(&mut store, "Largest_banks", &records).await.unwrap();

        let out = run_query(&mut store, "SELECT * FROM Largest_banks")
            .await
            .unwrap();
        assert_eq!(out.columns, EnrichedBankRecord::COLUMNS.to_vec());
        assert_eq!(out.rows.len(), records.len());
        for (row, record) in out.rows.iter().zip(&records) {
            assert_eq!(row[0], QueryValue::Text(record.name.clone()));
            assert_eq!(row[1], QueryValue::Real(record.mc_usd_billion));
            assert_eq!(row[4], QueryValue::Real(record.mc_inr_billion));
        }
    }

    #[tokio::test]
    async fn test_top_names_limit() {
        let mut store = create_test_store().await;
        let records = sample_records();
        load_to_db(&mut store, "Largest_banks", &records).await.unwrap();

        let out = run_query(&mut store, "SELECT Name FROM Largest_banks LIMIT 2")
            .await
            .unwrap();
        let names: Vec<&str> = out
            .column("Name")
            .unwrap()
            .into_iter()
            .filter_map(QueryValue::as_str)
            .collect();
        assert_eq!(names, vec![records[0].name.as_str(), records[1].name.as_str()]);
    }

    #[tokio::test]
    async fn test_empty_table_keeps_column_names() {
        let mut store = create_test_store().await;
        load_to_db(&mut store, "Largest_banks", &[]).await.unwrap();

        let out = run_query(&mut store, "SELECT Name FROM Largest_banks")
            .await
            .unwrap();
        assert_eq!(out.columns, vec!["Name"]);
        assert!(out.is_empty());

        let avg = run_query(&mut store, "SELECT AVG(MC_GBP_Billion) FROM Largest_banks")
            .await
            .unwrap();
        assert_eq!(avg.scalar(), Some(&QueryValue::Null));
    }

    #[tokio::test]
    async fn test_mixed_storage_classes() {
        let mut store = create_test_store().await;
        let out = run_query(&mut store, "SELECT 1 AS i, 2.5 AS r, 'x' AS t, NULL AS n, x'0102' AS b")
            .await
            .unwrap();
        assert_eq!(
            out.rows,
            vec![vec![
                QueryValue::Integer(1),
                QueryValue::Real(2.5),
                QueryValue::Text("x".to_string()),
                QueryValue::Null,
                QueryValue::Blob(vec![1, 2]),
            ]]
        );
    }

    #[tokio::test]
    async fn test_missing_table_is_sql_error() {
        let mut store = create_test_store().await;
        let err = run_query(&mut store, "SELECT * FROM Largest_banks")
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::SqlError(_)));
    }

    #[tokio::test]
    async fn test_malformed_sql_is_sql_error() {
        let mut store = create_test_store().await;
        assert!(matches!(
            run_query(&mut store, "SELEC nothing").await,
            Err(DatabaseError::SqlError(_))
        ));
    }

    #[test]
    fn test_display_renders_aligned_table() {
        let out = QueryOutput {
            columns: vec!["Name".to_string(), "MC_GBP_Billion".to_string()],
            rows: vec![
                vec![QueryValue::Text("JPMorgan Chase".to_string()), QueryValue::Real(346.34)],
                vec![QueryValue::Text("HSBC".to_string()), QueryValue::Real(80.0)],
            ],
        };
        let rendered = out.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "             Name  MC_GBP_Billion");
        assert_eq!(lines[1], "0  JPMorgan Chase          346.34");
        assert_eq!(lines[2], "1  HSBC                      80.0");
    }

    #[test]
    fn test_display_empty_result() {
        let out = QueryOutput {
            columns: vec!["Name".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(out.to_string(), "   Name\n(0 rows)\n");
    }

    #[test]
    fn test_real_display_keeps_decimal_point() {
        assert_eq!(QueryValue::Real(60.0).to_string(), "60.0");
        assert_eq!(QueryValue::Real(346.34).to_string(), "346.34");
        assert_eq!(QueryValue::Integer(60).to_string(), "60");
    }
}
