//! Tabular rendering of the record set at each stage.

use crate::models::{BankRecord, EnrichedBankRecord};
use crate::storage::{QueryOutput, QueryValue};

/// Extracted records as a printable table.
pub fn bank_table(records: &[BankRecord]) -> QueryOutput {
    QueryOutput {
        columns: BankRecord::COLUMNS.map(String::from).to_vec(),
        rows: records
            .iter()
            .map(|r| {
                vec![
                    QueryValue::Text(r.name.clone()),
                    QueryValue::Real(r.mc_usd_billion),
                ]
            })
            .collect(),
    }
}

/// Transformed records as a printable table.
pub fn enriched_table(records: &[EnrichedBankRecord]) -> QueryOutput {
    QueryOutput {
        columns: EnrichedBankRecord::COLUMNS.map(String::from).to_vec(),
        rows: records
            .iter()
            .map(|r| {
                vec![
                    QueryValue::Text(r.name.clone()),
                    QueryValue::Real(r.mc_usd_billion),
                    QueryValue::Real(r.mc_gbp_billion),
                    QueryValue::Real(r.mc_eur_billion),
                    QueryValue::Real(r.mc_inr_billion),
                ]
            })
            .collect(),
    }
}
