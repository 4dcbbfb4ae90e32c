use crate::document::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateStationError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    // The lookup page embeds exactly one redirect script when the name is an exact match.
    #[error("No station found for '{query}' ({scripts} redirect scripts on the page)")]
    NoStationFound { query: String, scripts: usize },

    #[error("Could not read station from redirect script '{script}'")]
    MalformedRedirect { script: String },
}
