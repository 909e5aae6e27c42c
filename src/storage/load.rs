//! Database loader: drop-and-recreate of the bank table.

use log::info;
use sqlx::{Connection, QueryBuilder, Sqlite};

use crate::config::INSERT_CHUNK_ROWS;
use crate::error_handling::DatabaseError;
use crate::models::EnrichedBankRecord;
use crate::storage::Store;

/// Quotes `name` as an SQL identifier.
pub fn quote_identifier(name: &str) -> Result<String, DatabaseError> {
    if name.trim().is_empty() {
        return Err(DatabaseError::InvalidTableName(name.to_string()));
    }
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}

fn create_table_sql(table: &str) -> String {
    let columns: Vec<String> = EnrichedBankRecord::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let ty = if i == 0 { "TEXT" } else { "REAL" };
            format!("{col} {ty}")
        })
        .collect();
    format!("CREATE TABLE {table} ({})", columns.join(", "))
}

/// Replaces `table_name` with a fresh table holding `records` in order.
///
/// Any existing table of that name is dropped first. The drop, create and
/// inserts run in one transaction; an empty `records` leaves an empty table.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidTableName` for an empty name and
/// `DatabaseError::SqlError` if any statement fails.
pub async fn load_to_db(
    store: &mut Store,
    table_name: &str,
    records: &[EnrichedBankRecord],
) -> Result<(), DatabaseError> {
    let table = quote_identifier(table_name)?;
    let mut tx = store.connection().begin().await?;

    sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
        .execute(&mut *tx)
        .await?;
    sqlx::query(&create_table_sql(&table))
        .execute(&mut *tx)
        .await?;

    let insert_prefix = format!(
        "INSERT INTO {table} ({}) ",
        EnrichedBankRecord::COLUMNS.join(", ")
    );
    for chunk in records.chunks(INSERT_CHUNK_ROWS) {
        let mut builder = QueryBuilder::<Sqlite>::new(&insert_prefix);
        builder.push_values(chunk, |mut row, record| {
            row.push_bind(record.name.as_str())
                .push_bind(record.mc_usd_billion)
                .push_bind(record.mc_gbp_billion)
                .push_bind(record.mc_eur_billion)
                .push_bind(record.mc_inr_billion);
        });
        builder.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!("Loaded {} rows into table {}", records.len(), table_name);
    Ok(())
}
