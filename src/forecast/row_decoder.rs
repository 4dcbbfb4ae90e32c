//! Table-driven decoding of the positional cells of a forecast row.
//!
//! The markup carries no semantic attributes, so each field is addressed by its
//! position among the row's data cells. [`FORECAST_COLUMNS`] is the layout; change it
//! there if Meteociel moves a column.

use crate::forecast::error::CellError;
use crate::forecast::navigator::{Cell, CellImage};
use crate::types::forecast_record::ForecastRecord;
use crate::types::weather_category::WeatherCategory;
use crate::utils::{parse_float, parse_int, strip_unit};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The decoded columns of a forecast row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Temperature,
    WindDirection,
    WindSpeed,
    WindGust,
    Rainfall,
    Humidity,
    Pressure,
    Weather,
}

/// What a failed column does to the rest of its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Stop decoding the row; later columns keep their defaults.
    AbortRow,
    /// Leave this column at its default and continue.
    SkipColumn,
}

/// Placement and failure behavior of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub position: usize,
    pub column: Column,
    pub on_failure: OnFailure,
}

const fn spec(position: usize, column: Column, on_failure: OnFailure) -> ColumnSpec {
    ColumnSpec {
        position,
        column,
        on_failure,
    }
}

/// Layout of a forecast row. Position 0 is the time cell (consumed by the date
/// accumulator) and position 2 is decorative.
pub const FORECAST_COLUMNS: [ColumnSpec; 8] = [
    spec(1, Column::Temperature, OnFailure::AbortRow),
    spec(3, Column::WindDirection, OnFailure::SkipColumn),
    spec(4, Column::WindSpeed, OnFailure::AbortRow),
    spec(5, Column::WindGust, OnFailure::AbortRow),
    spec(6, Column::Rainfall, OnFailure::AbortRow),
    spec(7, Column::Humidity, OnFailure::AbortRow),
    spec(8, Column::Pressure, OnFailure::AbortRow),
    spec(9, Column::Weather, OnFailure::SkipColumn),
];

/// How the decoder reacts to a column with [`OnFailure::AbortRow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnPolicy {
    /// Honor [`OnFailure::AbortRow`]: the first such failure leaves the remaining
    /// columns of the row at their defaults. This is how the site has always been
    /// scraped.
    #[default]
    AbortRow,
    /// Decode every column on its own, whatever fails before it.
    Independent,
}

/// A column that failed to decode while building a record.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFailure {
    pub column: Column,
    pub error: CellError,
    /// Whether this failure stopped decoding of the rest of the row.
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRow {
    pub record: ForecastRecord,
    pub failures: Vec<ColumnFailure>,
}

impl Column {
    /// Decodes `cell` into the record field for this column.
    ///
    /// The field is only written once the value is fully converted, so a failure
    /// leaves the record untouched.
    pub fn decode(self, cell: &Cell, record: &mut ForecastRecord) -> Result<(), CellError> {
        match self {
            Column::Temperature => {
                record.temperature_c = parse_int(strip_unit(&cell.text, "°C"))?;
            }
            Column::WindDirection => {
                let title = image_attr(cell, "title", |img| img.title.as_deref())?;
                let direction = title
                    .split(" : ")
                    .nth(1)
                    .ok_or_else(|| CellError::MalformedTitle(title.to_string()))?;
                let degrees: i16 = parse_int(strip_unit(direction, "°"))?;
                if !(0..=360).contains(&degrees) {
                    return Err(CellError::OutOfRange {
                        value: degrees.into(),
                        min: 0,
                        max: 360,
                    });
                }
                record.wind_direction_deg = degrees;
            }
            Column::WindSpeed => record.wind_speed = parse_int(cell.text.trim())?,
            Column::WindGust => record.wind_gust = parse_int(cell.text.trim())?,
            Column::Rainfall => {
                let text = cell.text.trim();
                // "--" is "no reading", not a failure.
                if text != "--" {
                    record.rainfall_mm = parse_float(strip_unit(text, "mm"))?;
                }
            }
            Column::Humidity => record.humidity_pct = parse_int(strip_unit(&cell.text, "%"))?,
            Column::Pressure => record.pressure_hpa = parse_int(strip_unit(&cell.text, "hPa"))?,
            Column::Weather => {
                let src = image_attr(cell, "src", |img| img.src.as_deref())?;
                let file_name = src.rsplit('/').next().unwrap_or(src);
                let stem = file_name.strip_suffix(".gif").unwrap_or(file_name);
                record.weather = WeatherCategory::from_icon_stem(stem);
            }
        }
        Ok(())
    }
}

fn image_attr<'a>(
    cell: &'a Cell,
    name: &'static str,
    get: impl FnOnce(&'a CellImage) -> Option<&'a str>,
) -> Result<&'a str, CellError> {
    let image = cell.image.as_ref().ok_or(CellError::MissingImage)?;
    get(image).ok_or(CellError::MissingAttribute(name))
}

/// Builds the record for one row whose time has already been resolved.
///
/// `cells` are the row's data cells, time cell included at position 0.
pub fn decode_row(cells: &[Cell], time: NaiveDateTime, policy: ColumnPolicy) -> DecodedRow {
    let mut record = ForecastRecord::new(time);
    let mut failures = Vec::new();

    for spec in FORECAST_COLUMNS {
        let result = cells
            .get(spec.position)
            .ok_or(CellError::Missing(spec.position))
            .and_then(|cell| spec.column.decode(cell, &mut record));

        if let Err(error) = result {
            let truncated =
                policy == ColumnPolicy::AbortRow && spec.on_failure == OnFailure::AbortRow;
            failures.push(ColumnFailure {
                column: spec.column,
                error,
                truncated,
            });
            if truncated {
                break;
            }
        }
    }

    DecodedRow { record, failures }
}
