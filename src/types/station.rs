//! Defines the Meteociel station identifier pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Meteociel station, as needed to address its forecast pages.
///
/// Both parts come from the site itself (see [`crate::Meteociel::station_for_city`])
/// and are treated as opaque: the crate does not validate them beyond substituting
/// them into a page address.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    /// The numeric station identifier as used in page paths (e.g., "27817").
    pub id: String,
    /// The URL slug of the station (e.g., "paris").
    pub name: String,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
