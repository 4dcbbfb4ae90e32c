use crate::document::error::FetchError;
use crate::forecast::row_decoder::Column;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Hard failures of a forecast request. Anything below the page level is reported
/// as a [`ParseIssue`] instead.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Why a table row produced no record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("Row has no time cell")]
    MissingTimeCell,

    #[error("Invalid time '{text}'")]
    InvalidTime {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Row precedes the first date marker")]
    MissingDate,

    #[error("Invalid day marker '{0}'")]
    InvalidDayMarker(String),

    #[error("Day {day} does not exist in {year:04}-{month:02}")]
    DayOutOfMonth { day: u32, year: i32, month: u32 },
}

/// Why a single cell could not be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    #[error("No cell at position {0}")]
    Missing(usize),

    #[error("Cell has no image")]
    MissingImage,

    #[error("Image has no '{0}' attribute")]
    MissingAttribute(&'static str),

    #[error("Unexpected image title '{0}'")]
    MalformedTitle(String),

    #[error("Invalid integer '{text}'")]
    InvalidInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid number '{text}'")]
    InvalidFloat {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Value {value} outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// A non-fatal problem found while parsing a forecast page.
///
/// `row` is the index of the row among the striped data rows of the table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseIssue {
    #[error("Row {row} dropped: {error}")]
    RowDropped { row: usize, error: RowError },

    /// The column kept its default value. `truncated` is set when the failure also
    /// stopped decoding of the remaining columns of that row.
    #[error("Row {row}, column {column:?}: {error}")]
    CellSkipped {
        row: usize,
        column: Column,
        error: CellError,
        truncated: bool,
    },
}
