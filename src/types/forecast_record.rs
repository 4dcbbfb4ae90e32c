use crate::types::weather_category::WeatherCategory;
use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One row of a Meteociel forecast table.
///
/// `time` is always set. Every other field starts at zero and keeps that value when
/// the corresponding cell is absent or could not be decoded, so a zero is not proof
/// of a zero reading. In particular a rainfall cell of `--` (no reading) and one of
/// `0 mm` both leave `rainfall_mm` at `0.0`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Wall-clock time of the forecast step, in the processing machine's local time.
    pub time: NaiveDateTime,
    pub temperature_c: i8,
    /// Direction the wind blows from, 0 to 360 degrees.
    pub wind_direction_deg: i16,
    /// Mean wind speed in km/h.
    pub wind_speed: i8,
    /// Gust speed in km/h.
    pub wind_gust: i8,
    pub rainfall_mm: f32,
    pub humidity_pct: i8,
    pub pressure_hpa: i16,
    pub weather: WeatherCategory,
}

impl ForecastRecord {
    /// An empty record for the given time, every measurement at its default.
    pub fn new(time: NaiveDateTime) -> Self {
        Self {
            time,
            temperature_c: 0,
            wind_direction_deg: 0,
            wind_speed: 0,
            wind_gust: 0,
            rainfall_mm: 0.0,
            humidity_pct: 0,
            pressure_hpa: 0,
            weather: WeatherCategory::Unknown,
        }
    }

    /// Resolves `time` in the local time zone.
    ///
    /// Returns `None` for wall-clock times skipped by a daylight saving transition.
    /// For ambiguous times (clocks set back) the earlier instant is returned.
    pub fn local_time(&self) -> Option<DateTime<Local>> {
        self.time.and_local_timezone(Local).earliest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_local_time_keeps_wall_clock() {
        let time = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let record = ForecastRecord::new(time);
        let local = record.local_time().expect("noon is never skipped by a DST change");
        assert_eq!(local.naive_local(), time);
        assert_eq!(record.weather, WeatherCategory::Unknown);
    }
}
