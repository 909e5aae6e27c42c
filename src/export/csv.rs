//! CSV export functionality.
//!
//! Writes the final record set as one CSV row per bank, header first, in
//! record-set order.

use std::fs::OpenOptions;
use std::path::Path;

use csv::{Reader, WriterBuilder};

use crate::error_handling::ExportError;
use crate::models::EnrichedBankRecord;

/// Writes `records` to `file_path`, replacing any existing file.
///
/// The header row is written even when `records` is empty.
///
/// # Errors
///
/// Returns `ExportError::Io` if the file cannot be created and
/// `ExportError::Csv` if serialization or flushing fails.
pub fn save_to_csv<P: AsRef<Path>>(
    records: &[EnrichedBankRecord],
    file_path: P,
) -> Result<(), ExportError> {
    let path = file_path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;

    // Header written explicitly: serialize() only emits it alongside the first row
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record(EnrichedBankRecord::COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Reads a file written by [`save_to_csv`] back into records.
pub fn read_csv<P: AsRef<Path>>(file_path: P) -> Result<Vec<EnrichedBankRecord>, ExportError> {
    let mut rdr = Reader::from_path(file_path)?;
    let records = rdr
        .deserialize()
        .collect::<Result<Vec<EnrichedBankRecord>, csv::Error>>()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<EnrichedBankRecord> {
        vec![
            EnrichedBankRecord {
                name: "JPMorgan Chase".to_string(),
                mc_usd_billion: 432.92,
                mc_gbp_billion: 346.34,
                mc_eur_billion: 402.62,
                mc_inr_billion: 35910.71,
            },
            EnrichedBankRecord {
                name: "Bank of America, N.A.".to_string(),
                mc_usd_billion: 231.52,
                mc_gbp_billion: 185.22,
                mc_eur_billion: 215.31,
                mc_inr_billion: 19204.58,
            },
        ]
    }

    #[test]
    fn test_save_writes_header_and_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Largest_banks_data.csv");

        save_to_csv(&sample(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "Name,MC_USD_Billion,MC_GBP_Billion,MC_EUR_Billion,MC_INR_Billion"
        );
        assert_eq!(lines[1], "JPMorgan Chase,432.92,346.34,402.62,35910.71");
        // Embedded comma is quoted
        assert_eq!(
            lines[2],
            "\"Bank of America, N.A.\",231.52,185.22,215.31,19204.58"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let records = sample();

        save_to_csv(&records, &path).unwrap();
        assert_eq!(read_csv(&path).unwrap(), records);
    }

    #[test]
    fn test_empty_record_set_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        save_to_csv(&[], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Name,MC_USD_Billion,MC_GBP_Billion,MC_EUR_Billion,MC_INR_Billion\n"
        );
        assert!(read_csv(&path).unwrap().is_empty());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale content that is longer than the new file\n".repeat(20))
            .unwrap();

        save_to_csv(&sample()[..1], &path).unwrap();

        assert_eq!(read_csv(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");
        assert!(matches!(
            save_to_csv(&sample(), &path),
            Err(ExportError::Io { .. })
        ));
    }
}
