//! This module provides the main entry point for reading Meteociel: resolving a
//! city to its station and fetching the forecast tables of that station.

use crate::config::ClientConfig;
use crate::document::loader::DocumentLoader;
use crate::error::MeteocielError;
use crate::forecast::error::ForecastError;
use crate::forecast::parser::{parse_forecast_page, ForecastReport};
use crate::forecast::row_decoder::ColumnPolicy;
use crate::stations::error::LocateStationError;
use crate::stations::locate_station::{parse_station_page, search_url};
use crate::types::forecast_record::ForecastRecord;
use crate::types::forecast_variant::ForecastVariant;
use crate::types::station::Station;
use bon::bon;
use chrono::{Local, NaiveDate};
use log::{info, warn};
use reqwest::Url;

/// The client for Meteociel station lookups and forecast tables.
///
/// Every call performs exactly one page request: nothing is cached, retried, or
/// fetched in parallel. Create it with [`Meteociel::new()`] for the defaults or
/// [`Meteociel::with_config()`] to change the site address, timeout, user agent
/// or column policy.
///
/// # Examples
///
/// ```no_run
/// # use meteociel::{ForecastVariant, Meteociel, MeteocielError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), MeteocielError> {
/// let client = Meteociel::new()?;
/// let station = client.station_for_city("Paris").await?;
///
/// let forecast = client
///     .forecast()
///     .station(&station)
///     .variant(ForecastVariant::Arome1h)
///     .call()
///     .await?;
///
/// for record in &forecast {
///     println!("{} {} °C {}", record.time, record.temperature_c, record.weather.name());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Meteociel {
    loader: DocumentLoader,
    base_url: Url,
    column_policy: ColumnPolicy,
}

#[bon]
impl Meteociel {
    /// Creates a client with [`ClientConfig::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`MeteocielError::ClientBuild`] if the HTTP client cannot be
    /// initialized (e.g., no TLS backend available).
    pub fn new() -> Result<Self, MeteocielError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MeteocielError::InvalidBaseUrl`] if `config.base_url` is not an
    /// absolute http(s) URL, and [`MeteocielError::ClientBuild`] if the HTTP client
    /// cannot be initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use meteociel::{ClientConfig, Meteociel, MeteocielError};
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), MeteocielError> {
    /// let config = ClientConfig::builder()
    ///     .timeout(Duration::from_secs(15))
    ///     .build();
    /// let client = Meteociel::with_config(config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self, MeteocielError> {
        let invalid = |reason: String| MeteocielError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };
        let base_url = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) site root".to_string()));
        }

        let loader = DocumentLoader::new(&config.user_agent, config.timeout)
            .map_err(MeteocielError::ClientBuild)?;

        Ok(Self {
            loader,
            base_url,
            column_policy: config.column_policy,
        })
    }

    /// Resolves a city to its Meteociel station.
    ///
    /// `exact_name` must be the exact city name or postal code as Meteociel knows it;
    /// partial or ambiguous names make the site answer with a choice list, which is
    /// reported as [`LocateStationError::NoStationFound`].
    ///
    /// # Errors
    ///
    /// * [`MeteocielError::LocateStation`] wrapping a transport failure or non-200
    ///   status, a missing station, or an unreadable redirect.
    pub async fn station_for_city(&self, exact_name: &str) -> Result<Station, MeteocielError> {
        let url = search_url(&self.base_url, exact_name);
        let html = self
            .loader
            .fetch(url)
            .await
            .map_err(LocateStationError::from)?;
        let station = parse_station_page(&html, exact_name)?;
        info!("Resolved '{}' to station {}", exact_name, station);
        Ok(station)
    }

    /// The address of a forecast page.
    ///
    /// # Examples
    ///
    /// ```
    /// # use meteociel::{ForecastVariant, Meteociel, MeteocielError, Station};
    /// # fn main() -> Result<(), MeteocielError> {
    /// let client = Meteociel::new()?;
    /// let url = client.forecast_url(ForecastVariant::Wrf, &Station::new("27817", "paris"));
    /// assert_eq!(url.as_str(), "https://www.meteociel.fr/previsions-wrf/27817/paris.htm");
    /// # Ok(())
    /// # }
    /// ```
    pub fn forecast_url(&self, variant: ForecastVariant, station: &Station) -> Url {
        let mut url = self.base_url.clone();
        let prefix = self.base_url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}/{}", prefix, variant.page_path(station)));
        url.set_query(None);
        url
    }

    /// Fetches a forecast page and returns its records along with every row or
    /// cell that was dropped or defaulted.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.station(&Station)`: **Required.** The station to query.
    /// * `.variant(ForecastVariant)`: **Required.** The forecast page to read.
    /// * `.reference_date(NaiveDate)`: Optional. Supplies the year and month of the
    ///   table's dates. Defaults to today's local date.
    ///
    /// # Errors
    ///
    /// Only transport failures and non-200 statuses are errors
    /// ([`MeteocielError::Forecast`]). A page without a forecast table yields an
    /// empty report.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use meteociel::{ForecastVariant, Meteociel, MeteocielError, Station};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MeteocielError> {
    /// let client = Meteociel::new()?;
    /// let report = client
    ///     .forecast_report()
    ///     .station(&Station::new("27817", "paris"))
    ///     .variant(ForecastVariant::Gfs)
    ///     .call()
    ///     .await?;
    /// for issue in &report.issues {
    ///     eprintln!("{issue}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn forecast_report(
        &self,
        station: &Station,
        variant: ForecastVariant,
        reference_date: Option<NaiveDate>,
    ) -> Result<ForecastReport, MeteocielError> {
        let url = self.forecast_url(variant, station);
        let html = self.loader.fetch(url).await.map_err(ForecastError::from)?;

        let reference = reference_date.unwrap_or_else(|| Local::now().date_naive());
        let report = parse_forecast_page(&html, reference, self.column_policy);
        if !report.issues.is_empty() {
            warn!(
                "{} forecast for station {}: {} rows or cells could not be read",
                variant,
                station,
                report.issues.len()
            );
        }
        info!(
            "Parsed {} {} forecast records for station {}",
            report.records.len(),
            variant,
            station
        );
        Ok(report)
    }

    /// Fetches a forecast page and returns its records in table order.
    ///
    /// Rows or cells that could not be read are skipped or left at their default
    /// values; use [`Meteociel::forecast_report`] to see which.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.station(&Station)`: **Required.** The station to query.
    /// * `.variant(ForecastVariant)`: **Required.** The forecast page to read.
    #[builder]
    pub async fn forecast(
        &self,
        station: &Station,
        variant: ForecastVariant,
    ) -> Result<Vec<ForecastRecord>, MeteocielError> {
        let report = self
            .forecast_report()
            .station(station)
            .variant(variant)
            .call()
            .await?;
        Ok(report.records)
    }

    /// Resolves a city with [`Meteociel::station_for_city`], then fetches its forecast.
    ///
    /// # Arguments
    ///
    /// * `.city(&str)`: **Required.** Exact city name or postal code.
    /// * `.variant(ForecastVariant)`: **Required.** The forecast page to read.
    #[builder]
    pub async fn forecast_for_city(
        &self,
        city: &str,
        variant: ForecastVariant,
    ) -> Result<Vec<ForecastRecord>, MeteocielError> {
        let station = self.station_for_city(city).await?;
        self.forecast()
            .station(&station)
            .variant(variant)
            .call()
            .await
    }
}
