//! Reading activity records from a CSV export

use crate::error::{IssuesError, Result};
use crate::types::{Record, DATA_COLUMN, TYPE_COLUMN};
use csv::{ErrorKind, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Forward-only reader over the rows of an activity export.
///
/// Rows that cannot be read (invalid UTF-8, missing required fields) are
/// skipped and counted; I/O failures end the iteration with an error.
pub struct RecordReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    row: StringRecord,
    rows_read: u64,
    rows_unreadable: u64,
}

impl RecordReader<File> {
    /// Open an activity export on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IssuesError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(file)
            .map_err(|e| e.with_context(format!("Reading {}", path.display())))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any reader producing CSV text with a header row
    pub fn from_reader(input: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
        let headers = reader.headers()?.clone();

        for column in [TYPE_COLUMN, DATA_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(IssuesError::missing_column(column));
            }
        }

        Ok(Self {
            reader,
            headers,
            row: StringRecord::new(),
            rows_read: 0,
            rows_unreadable: 0,
        })
    }

    /// Data rows read so far, readable or not
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Data rows skipped because they could not be turned into a record
    pub fn rows_unreadable(&self) -> u64 {
        self.rows_unreadable
    }

    /// Read the next record, skipping unreadable rows
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        loop {
            match self.reader.read_record(&mut self.row) {
                Ok(false) => return Ok(None),
                Ok(true) => {
                    self.rows_read += 1;
                    match self.row.deserialize::<Record>(Some(&self.headers)) {
                        Ok(record) => return Ok(Some(record)),
                        Err(_) => self.rows_unreadable += 1,
                    }
                }
                Err(err) => {
                    if matches!(err.kind(), ErrorKind::Io(_)) {
                        return Err(err.into());
                    }
                    self.rows_read += 1;
                    self.rows_unreadable += 1;
                }
            }
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
