use crate::forecast::error::RowError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

/// Day-name abbreviations Meteociel prefixes date markers with, Monday first.
pub const DAY_NAMES: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

const TIME_FORMAT: &str = "%H:%M";

/// Running "current date" of a forecast table.
///
/// Only the first row of each day carries a date marker, and the marker only gives
/// the day of month. Year and month come from the reference date (normally the
/// processing date), which assumes the forecast horizon never crosses a month
/// boundary. A table starting on the 30th and running into the next month will
/// therefore get days like the 1st dated in the reference month.
#[derive(Debug, Clone)]
pub struct DateAccumulator {
    reference: NaiveDate,
    current: Option<NaiveDate>,
}

impl DateAccumulator {
    pub fn new(reference: NaiveDate) -> Self {
        Self {
            reference,
            current: None,
        }
    }

    pub fn current_date(&self) -> Option<NaiveDate> {
        self.current
    }

    /// Moves the current date to the day named by a marker such as `"Lun05"`.
    ///
    /// On failure the current date is cleared, so the rows of the unparseable day
    /// are rejected rather than dated on the previous day.
    pub fn observe_marker(&mut self, marker: &str) -> Result<NaiveDate, RowError> {
        self.current = None;
        let marker = marker.trim();
        let Some((split, _)) = marker.char_indices().nth(3) else {
            return Err(RowError::InvalidDayMarker(marker.to_string()));
        };
        let (day_name, day_text) = marker.split_at(split);
        if !DAY_NAMES.contains(&day_name) {
            debug!("Unrecognized day name '{}' in marker '{}'", day_name, marker);
        }

        let day: u32 = day_text
            .trim()
            .parse()
            .map_err(|_| RowError::InvalidDayMarker(marker.to_string()))?;
        let (year, month) = (self.reference.year(), self.reference.month());
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(RowError::DayOutOfMonth { day, year, month })?;

        self.current = Some(date);
        Ok(date)
    }

    /// Combines the current date with a `HH:MM` time cell.
    pub fn timestamp(&self, time_text: &str) -> Result<NaiveDateTime, RowError> {
        let text = time_text.trim();
        let time =
            NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|e| RowError::InvalidTime {
                text: text.to_string(),
                source: e,
            })?;
        let date = self.current.ok_or(RowError::MissingDate)?;
        Ok(date.and_time(time))
    }

    /// Processes one row: applies its marker, if any, then resolves its time.
    pub fn advance(
        &mut self,
        marker: Option<&str>,
        time_text: &str,
    ) -> Result<NaiveDateTime, RowError> {
        if let Some(marker) = marker {
            self.observe_marker(marker)?;
        }
        self.timestamp(time_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_marker_sets_day_in_reference_month() {
        let mut acc = DateAccumulator::new(reference());
        let ts = acc.advance(Some("Lun 5"), "08:00").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!((ts.hour(), ts.minute()), (8, 0));

        let ts = acc.advance(Some("Mar06"), "23:30").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 3, 6).unwrap());
        assert_eq!((ts.hour(), ts.minute()), (23, 30));
    }

    #[test]
    fn test_rows_without_marker_stay_on_same_day() {
        let mut acc = DateAccumulator::new(reference());
        let times = ["02:00", "05:00", "11:00", "17:00", "23:00"];
        let mut stamps = vec![acc.advance(Some("Jeu13"), "00:00").unwrap()];
        for t in times {
            stamps.push(acc.advance(None, t).unwrap());
        }
        assert!(stamps.iter().all(|s| s.day() == 13));
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_row_before_first_marker_is_rejected() {
        let mut acc = DateAccumulator::new(reference());
        assert_eq!(acc.advance(None, "08:00"), Err(RowError::MissingDate));
        assert_eq!(acc.current_date(), None);
    }

    #[test]
    fn test_invalid_time_is_rejected() {
        let mut acc = DateAccumulator::new(reference());
        acc.observe_marker("Lun05").unwrap();
        assert!(matches!(
            acc.timestamp("8h00"),
            Err(RowError::InvalidTime { text, .. }) if text == "8h00"
        ));
        assert!(acc.timestamp("").is_err());
        assert!(acc.timestamp("25:00").is_err());
    }

    #[test]
    fn test_bad_marker_clears_current_date() {
        let mut acc = DateAccumulator::new(reference());
        acc.observe_marker("Lun05").unwrap();
        assert_eq!(
            acc.observe_marker("Mar"),
            Err(RowError::InvalidDayMarker("Mar".into()))
        );
        assert_eq!(acc.current_date(), None);
        assert_eq!(acc.advance(None, "08:00"), Err(RowError::MissingDate));

        assert!(matches!(
            acc.observe_marker("Merxx"),
            Err(RowError::InvalidDayMarker(_))
        ));
    }

    #[test]
    fn test_day_outside_reference_month_is_rejected() {
        let mut acc = DateAccumulator::new(NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
        assert_eq!(
            acc.observe_marker("Dim30"),
            Err(RowError::DayOutOfMonth {
                day: 30,
                year: 2025,
                month: 2
            })
        );
    }

    #[test]
    fn test_marker_with_unknown_day_name_still_parses() {
        let mut acc = DateAccumulator::new(reference());
        let date = acc.observe_marker("Mon12").unwrap();
        assert_eq!(date.day(), 12);
    }
}
