//! Bond table I/O.
//!
//! Tables are CSV with a header row. Header names are trimmed before the
//! required columns are looked up; all other columns are carried through to
//! the output unchanged.

use ratebook_bonds::record::BondRecord;
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Column receiving the computed clean prices.
pub const PRICE_COLUMN: &str = "Bond Price";

const NAME: &str = "Bond name";
const MATURITY: &str = "Maturity";
const COUPON: &str = "Coupon rate";
const FACE_VALUE: &str = "FV";
const YIELD: &str = "Yield";

/// A loaded bond table.
#[derive(Debug, Clone)]
pub struct BondTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    columns: [usize; 5],
}

impl BondTable {
    /// Reads a table, failing before any row is priced when a required
    /// column is missing.
    pub fn read(path: &Path) -> CliResult<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut columns = [0; 5];
        for (slot, name) in columns
            .iter_mut()
            .zip([NAME, MATURITY, COUPON, FACE_VALUE, YIELD])
        {
            *slot = headers.iter().position(|h| h == name).ok_or_else(|| {
                CliError::MissingInputColumn {
                    column: name.to_string(),
                    path: path.to_path_buf(),
                }
            })?;
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        Ok(Self {
            headers,
            rows,
            columns,
        })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows as bond records, in table order.
    pub fn records(&self) -> Vec<BondRecord> {
        let field = |row: &[String], i: usize| row.get(self.columns[i]).cloned().unwrap_or_default();
        self.rows
            .iter()
            .map(|row| {
                BondRecord::new(
                    field(row, 0),
                    field(row, 1),
                    field(row, 2),
                    field(row, 3),
                    field(row, 4),
                )
            })
            .collect()
    }

    /// Writes the table with `Bond Price` filled in; failed rows stay empty.
    pub fn write_with_prices(&self, path: &Path, prices: &[Option<f64>]) -> CliResult<()> {
        let mut headers = self.headers.clone();
        let price_column = match headers.iter().position(|h| h == PRICE_COLUMN) {
            Some(i) => i,
            None => {
                headers.push(PRICE_COLUMN.to_string());
                headers.len() - 1
            }
        };

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&headers)?;
        for (i, row) in self.rows.iter().enumerate() {
            let mut row = row.clone();
            row.resize(headers.len(), String::new());
            row[price_column] = prices
                .get(i)
                .copied()
                .flatten()
                .map(|p| p.to_string())
                .unwrap_or_default();
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
