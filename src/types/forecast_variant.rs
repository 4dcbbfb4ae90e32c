//! Defines the forecast page templates exposed by Meteociel and how a [`Station`]
//! is substituted into them.

use crate::types::station::Station;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which Meteociel forecast page to query.
///
/// Every variant renders the same hourly table layout, backed by a different
/// prediction model or horizon. Which columns are actually filled in depends on the
/// model, so some fields of a [`crate::ForecastRecord`] may stay at their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastVariant {
    /// Multi-day forecast from the global GFS model.
    Gfs,
    /// WRF model, 3-hour steps.
    Wrf,
    /// WRF model, 1-hour steps.
    Wrf1h,
    /// AROME model, 3-hour steps.
    Arome,
    /// AROME model, 1-hour steps.
    Arome1h,
    /// ARPEGE model, 1-hour steps.
    Arpege1h,
    /// ICON-EU model.
    IconEu,
    /// ICON-D2 model.
    IconD2,
    /// 10-day trend page.
    Trends10Days,
}

impl ForecastVariant {
    /// All variants, in the order Meteociel lists them.
    pub const ALL: [ForecastVariant; 9] = [
        ForecastVariant::Gfs,
        ForecastVariant::Wrf,
        ForecastVariant::Wrf1h,
        ForecastVariant::Arome,
        ForecastVariant::Arome1h,
        ForecastVariant::Arpege1h,
        ForecastVariant::IconEu,
        ForecastVariant::IconD2,
        ForecastVariant::Trends10Days,
    ];

    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            ForecastVariant::Gfs => "previsions",
            ForecastVariant::Wrf => "previsions-wrf",
            ForecastVariant::Wrf1h => "previsions-wrf-1h",
            ForecastVariant::Arome => "previsions-arome",
            ForecastVariant::Arome1h => "previsions-arome-1h",
            ForecastVariant::Arpege1h => "previsions-arpege-1h",
            ForecastVariant::IconEu => "previsions-iconeu",
            ForecastVariant::IconD2 => "previsions-icond2",
            ForecastVariant::Trends10Days => "tendances",
        }
    }

    /// Short lowercase name, used by [`FromStr`] and in log output.
    pub fn short_name(&self) -> &'static str {
        match self {
            ForecastVariant::Gfs => "gfs",
            ForecastVariant::Wrf => "wrf",
            ForecastVariant::Wrf1h => "wrf-1h",
            ForecastVariant::Arome => "arome",
            ForecastVariant::Arome1h => "arome-1h",
            ForecastVariant::Arpege1h => "arpege-1h",
            ForecastVariant::IconEu => "iconeu",
            ForecastVariant::IconD2 => "icond2",
            ForecastVariant::Trends10Days => "trends",
        }
    }

    /// The page template, relative to the site root, with its two placeholders.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteociel::ForecastVariant;
    ///
    /// assert_eq!(
    ///     ForecastVariant::Arome.url_template(),
    ///     "previsions-arome/{stationId}/{station}.htm"
    /// );
    /// ```
    pub fn url_template(&self) -> String {
        format!("{}/{{stationId}}/{{station}}.htm", self.path_segment())
    }

    /// Substitutes the station into [`Self::url_template`].
    ///
    /// # Examples
    ///
    /// ```
    /// use meteociel::{ForecastVariant, Station};
    ///
    /// let station = Station::new("27817", "paris");
    /// assert_eq!(
    ///     ForecastVariant::Gfs.page_path(&station),
    ///     "previsions/27817/paris.htm"
    /// );
    /// ```
    pub fn page_path(&self, station: &Station) -> String {
        self.url_template()
            .replacen("{stationId}", &station.id, 1)
            .replacen("{station}", &station.name, 1)
    }
}

impl fmt::Display for ForecastVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown forecast variant '{0}'")]
pub struct UnknownForecastVariant(pub String);

/// Accepts either the short name (`"arome-1h"`) or the page path segment
/// (`"previsions-arome-1h"`), case-insensitively.
impl FromStr for ForecastVariant {
    type Err = UnknownForecastVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ForecastVariant::ALL
            .into_iter()
            .find(|v| v.short_name() == wanted || v.path_segment() == wanted)
            .ok_or_else(|| UnknownForecastVariant(s.to_string()))
    }
}
