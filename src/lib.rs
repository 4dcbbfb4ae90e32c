//! Station lookup and hourly forecast tables scraped from meteociel.fr.
//!
//! The entry point is [`Meteociel`]. The page parsers are exposed as well
//! ([`parse_forecast_page`], [`parse_station_page`]) for callers that fetch pages
//! themselves.

mod config;
mod document;
mod error;
mod forecast;
mod meteociel;
mod stations;
mod types;
mod utils;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::MeteocielError;
pub use meteociel::*;

pub use document::error::FetchError;
pub use document::loader::DocumentLoader;

pub use forecast::date_accumulator::{DateAccumulator, DAY_NAMES};
pub use forecast::error::{CellError, ForecastError, ParseIssue, RowError};
pub use forecast::navigator::{forecast_rows, Cell, CellImage, ForecastRow};
pub use forecast::parser::{parse_forecast_page, parse_rows, ForecastReport};
pub use forecast::row_decoder::{
    decode_row, Column, ColumnFailure, ColumnPolicy, ColumnSpec, DecodedRow, OnFailure,
    FORECAST_COLUMNS,
};

pub use stations::error::LocateStationError;
pub use stations::locate_station::{parse_station_page, search_url};

pub use types::forecast_record::ForecastRecord;
pub use types::forecast_variant::{ForecastVariant, UnknownForecastVariant};
pub use types::station::Station;
pub use types::weather_category::WeatherCategory;
