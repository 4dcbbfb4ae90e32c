use crate::forecast::error::ForecastError;
use crate::stations::error::LocateStationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteocielError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    LocateStation(#[from] LocateStationError),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
