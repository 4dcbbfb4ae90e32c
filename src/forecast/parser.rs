use crate::forecast::date_accumulator::DateAccumulator;
use crate::forecast::error::{ParseIssue, RowError};
use crate::forecast::navigator::{forecast_rows, ForecastRow};
use crate::forecast::row_decoder::{decode_row, ColumnPolicy};
use crate::types::forecast_record::ForecastRecord;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use scraper::Html;

/// Records parsed from one forecast page, with everything that was dropped or
/// defaulted along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastReport {
    /// One record per accepted row, in table order.
    pub records: Vec<ForecastRecord>,
    pub issues: Vec<ParseIssue>,
}

/// Parses a forecast page.
///
/// `reference` supplies the year and month of every date in the table (see
/// [`DateAccumulator`]). A page without a forecast table yields an empty report.
pub fn parse_forecast_page(
    html: &str,
    reference: NaiveDate,
    policy: ColumnPolicy,
) -> ForecastReport {
    let document = Html::parse_document(html);
    parse_rows(&forecast_rows(&document), reference, policy)
}

/// Folds already extracted rows into a report.
pub fn parse_rows(
    rows: &[ForecastRow],
    reference: NaiveDate,
    policy: ColumnPolicy,
) -> ForecastReport {
    let (_, report) = rows.iter().enumerate().fold(
        (DateAccumulator::new(reference), ForecastReport::default()),
        |(mut dates, mut report), (index, row)| {
            match resolve_time(&mut dates, row) {
                Ok(time) => {
                    let decoded = decode_row(&row.cells, time, policy);
                    for failure in decoded.failures {
                        debug!(
                            "Row {} ({}), {:?}: {}",
                            index, time, failure.column, failure.error
                        );
                        report.issues.push(ParseIssue::CellSkipped {
                            row: index,
                            column: failure.column,
                            error: failure.error,
                            truncated: failure.truncated,
                        });
                    }
                    report.records.push(decoded.record);
                }
                Err(error) => {
                    debug!("Dropping row {}: {}", index, error);
                    report.issues.push(ParseIssue::RowDropped { row: index, error });
                }
            }
            (dates, report)
        },
    );
    report
}

fn resolve_time(dates: &mut DateAccumulator, row: &ForecastRow) -> Result<NaiveDateTime, RowError> {
    let time_cell = row.cells.first().ok_or(RowError::MissingTimeCell)?;
    dates.advance(row.marker.as_deref(), &time_cell.text)
}
