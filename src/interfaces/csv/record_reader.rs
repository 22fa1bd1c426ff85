use crate::error::{FulfillmentError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads boundary records (payment requests, shipping requests, orders) from
/// a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and accepting ragged rows so that
/// a trailing empty column can be omitted.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes each row into `T`; a bad row yields an `Err` item
    /// without ending the stream.
    pub fn records<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FulfillmentError::from))
    }
}
