//! Locates the forecast table inside a Meteociel page and lifts its data rows into
//! plain values the rest of the parser can work on without holding the document.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

// The forecast table is nested in the page layout tables; the first match is the one.
static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td.Style1 center table tbody tr td table tbody")
        .expect("table selector should be valid")
});

// Data rows alternate between these two shades; headers and separators use neither.
static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("tr[bgcolor='#CCFFFF'], tr[bgcolor='#DDEEFF']")
        .expect("row selector should be valid")
});

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("image selector should be valid"));

/// The first image found in a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellImage {
    pub title: Option<String>,
    pub src: Option<String>,
}

/// A data cell: its text content and, if any, its first image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub image: Option<CellImage>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn image(title: Option<&str>, src: Option<&str>) -> Self {
        Self {
            text: String::new(),
            image: Some(CellImage {
                title: title.map(str::to_string),
                src: src.map(str::to_string),
            }),
        }
    }
}

/// One striped row of the forecast table.
///
/// `marker` holds the text of the row-spanning date cell, present only on the
/// first row of each day. `cells` are the remaining `td` children in order, so
/// position 0 is always the time of day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForecastRow {
    pub marker: Option<String>,
    pub cells: Vec<Cell>,
}

/// Returns the data rows of the forecast table, in document order.
///
/// A page without the table, or a table without striped rows, yields an empty list.
pub fn forecast_rows(document: &Html) -> Vec<ForecastRow> {
    let Some(table) = document.select(&TABLE_SELECTOR).next() else {
        return Vec::new();
    };
    table.select(&ROW_SELECTOR).map(lift_row).collect()
}

fn lift_row(tr: ElementRef<'_>) -> ForecastRow {
    let mut row = ForecastRow::default();
    for td in tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "td")
    {
        if row.marker.is_none() && td.value().attr("rowspan").is_some() {
            row.marker = Some(td.text().collect());
            continue;
        }
        row.cells.push(lift_cell(td));
    }
    row
}

fn lift_cell(td: ElementRef<'_>) -> Cell {
    let image = td.select(&IMAGE_SELECTOR).next().map(|img| CellImage {
        title: img.value().attr("title").map(str::to_string),
        src: img.value().attr("src").map(str::to_string),
    });
    Cell {
        text: td.text().collect(),
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_in_layout(rows: &str) -> String {
        format!(
            "<html><body><table><tr><td class=\"Style1\"><center>\
             <table><tr><td><table>{rows}</table></td></tr></table>\
             </center></td></tr></table></body></html>"
        )
    }

    #[test]
    fn test_selects_only_striped_rows() {
        let html = wrap_in_layout(
            "<tr><td>Jour</td><td>Heure</td></tr>\
             <tr bgcolor=\"#CCFFFF\"><td rowspan=\"2\">Lun05</td><td>08:00</td></tr>\
             <tr bgcolor=\"#FFFFFF\"><td>separator</td></tr>\
             <tr bgcolor=\"#DDEEFF\"><td>09:00</td></tr>",
        );
        let rows = forecast_rows(&Html::parse_document(&html));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].marker.as_deref(), Some("Lun05"));
        assert_eq!(rows[0].cells, vec![Cell::text("08:00")]);
        assert_eq!(rows[1].marker, None);
        assert_eq!(rows[1].cells, vec![Cell::text("09:00")]);
    }

    #[test]
    fn test_lifts_first_image_attributes() {
        let html = wrap_in_layout(
            "<tr bgcolor=\"#CCFFFF\"><td>08:00</td>\
             <td><img title=\"Nord : 270 °\" src=\"a.gif\"><img title=\"second\"></td></tr>",
        );
        let rows = forecast_rows(&Html::parse_document(&html));
        assert_eq!(rows[0].cells[1], Cell::image(Some("Nord : 270 °"), Some("a.gif")));
    }

    #[test]
    fn test_missing_table_yields_no_rows() {
        let html = "<html><body><table><tr bgcolor=\"#CCFFFF\"><td>08:00</td></tr>\
                    </table></body></html>";
        assert!(forecast_rows(&Html::parse_document(html)).is_empty());
        assert!(forecast_rows(&Html::parse_document("")).is_empty());
    }

    #[test]
    fn test_table_without_striped_rows_yields_no_rows() {
        let html = wrap_in_layout("<tr><td>Aucune prévision</td></tr>");
        assert!(forecast_rows(&Html::parse_document(&html)).is_empty());
    }
}
