//! Tabular view of a dataset, shared by the HTML renderer and the CSV export.

use log::info;

use crate::error::ExportError;

/// File name offered for every CSV download.
pub const CSV_FILE_NAME: &str = "data.csv";
pub const CSV_MIME: &str = "text/csv";

/// A record type that can be laid out as one table row.
pub trait TableRow {
    /// Column headers, in declared field order.
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows<R: TableRow>(records: &[R]) -> Self {
        Table {
            headers: R::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: records.iter().map(TableRow::cells).collect(),
        }
    }

    /// Rows paired with their display number. Numbering starts at 1.
    pub fn numbered_rows(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row.as_slice()))
    }

    /// Serialize the whole table as UTF-8 CSV with a header row and no index column.
    pub fn to_csv(&self) -> Result<Vec<u8>, ExportError> {
        let mut csv_writer = csv::WriterBuilder::new().from_writer(Vec::new());
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }

        let bytes = csv_writer
            .into_inner()
            .map_err(|e| ExportError::Flush(e.into_error()))?;
        info!("Exported {} rows ({} bytes) to CSV", self.rows.len(), bytes.len());
        Ok(bytes)
    }
}
