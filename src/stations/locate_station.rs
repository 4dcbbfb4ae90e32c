use crate::stations::error::LocateStationError;
use crate::types::station::Station;
use reqwest::Url;
use scraper::{Html, Selector};
use std::sync::LazyLock;

const SEARCH_PATH: &str = "prevville.php";

static REDIRECT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body table tbody tr td table tbody tr td p script")
        .expect("redirect selector should be valid")
});

/// Builds the city search address under `base`, keeping any path prefix of `base`.
pub fn search_url(base: &Url, exact_name: &str) -> Url {
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{}/{}", prefix, SEARCH_PATH));
    url.query_pairs_mut()
        .clear()
        .append_pair("action", "getville")
        .append_pair("villeid", "")
        .append_pair("ville", exact_name)
        .append_pair("envoyer", "OK");
    url
}

/// Reads the station out of a city search result page.
///
/// On an exact match Meteociel answers with a page whose only job is to redirect
/// to the station's forecast, e.g. `window.location='/previsions/27817/paris.htm';`.
/// The station id and slug are the third and fourth `/`-separated parts of that
/// script. Ambiguous or unknown names render a list instead, without the script.
pub fn parse_station_page(html: &str, query: &str) -> Result<Station, LocateStationError> {
    let document = Html::parse_document(html);
    let scripts: Vec<_> = document.select(&REDIRECT_SELECTOR).collect();
    let [script] = scripts.as_slice() else {
        return Err(LocateStationError::NoStationFound {
            query: query.to_string(),
            scripts: scripts.len(),
        });
    };

    let text: String = script.text().collect();
    let malformed = || LocateStationError::MalformedRedirect {
        script: text.trim().to_string(),
    };
    let mut parts = text.split('/').skip(2);
    let id = parts.next().map(str::trim).filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    let slug = parts.next().ok_or_else(malformed)?;
    let name = slug.split(".htm").next().unwrap_or(slug).trim();
    if name.is_empty() {
        return Err(malformed());
    }

    Ok(Station::new(id, name))
}
