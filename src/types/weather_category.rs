//! Defines the `WeatherCategory` enum, mapping the pictogram file names used on
//! Meteociel forecast tables to descriptive weather categories.

use serde::{Deserialize, Serialize};

/// Weather category shown by the pictogram in the last column of a forecast row.
///
/// Meteociel encodes the category only in the icon's file name
/// (e.g. `.../picto/averse_pluie.gif`). Use [`WeatherCategory::from_icon_stem`] to
/// decode the stem; stems the crate does not know map to [`WeatherCategory::Unknown`]
/// instead of failing.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum WeatherCategory {
    /// `soleil`
    Sunny,
    /// `voile`: thin high clouds.
    LittleCloudy,
    /// `peu_nuageux`
    PartlyCloudy,
    /// `mitige`
    Mixed,
    /// `nuageux`
    Cloudy,
    /// `brouillard`
    Foggy,
    /// `pluie`
    Rainy,
    /// `grele`
    Hail,
    /// `neige`
    Snowy,
    /// `averse_pluiefaible`
    LightRainShower,
    /// `averse_pluie`
    RainShower,
    /// `averse_neige`
    SnowShower,
    /// `averse_orage`
    Thunderstorm,
    /// `averse_pluieneige`
    RainAndSnowShower,
    /// `pluie_neige`
    RainAndSnow,
    /// `oragefaible`
    MajorThunderstorm,
    /// Icon missing or not recognized.
    #[default]
    Unknown,
}

impl WeatherCategory {
    /// Decodes a pictogram file stem (file name without `.gif`).
    ///
    /// This never fails: an unrecognized stem yields [`WeatherCategory::Unknown`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meteociel::WeatherCategory;
    ///
    /// assert_eq!(WeatherCategory::from_icon_stem("soleil"), WeatherCategory::Sunny);
    /// assert_eq!(WeatherCategory::from_icon_stem("soleil").name(), "Sunny");
    ///
    /// let unknown = WeatherCategory::from_icon_stem("unknown_icon");
    /// assert_eq!(unknown, WeatherCategory::Unknown);
    /// assert_eq!(unknown.name(), "");
    /// ```
    pub fn from_icon_stem(stem: &str) -> Self {
        match stem {
            "soleil" => WeatherCategory::Sunny,
            "voile" => WeatherCategory::LittleCloudy,
            "peu_nuageux" => WeatherCategory::PartlyCloudy,
            "mitige" => WeatherCategory::Mixed,
            "nuageux" => WeatherCategory::Cloudy,
            "brouillard" => WeatherCategory::Foggy,
            "pluie" => WeatherCategory::Rainy,
            "grele" => WeatherCategory::Hail,
            "neige" => WeatherCategory::Snowy,
            "averse_pluiefaible" => WeatherCategory::LightRainShower,
            "averse_pluie" => WeatherCategory::RainShower,
            "averse_neige" => WeatherCategory::SnowShower,
            "averse_orage" => WeatherCategory::Thunderstorm,
            "averse_pluieneige" => WeatherCategory::RainAndSnowShower,
            "pluie_neige" => WeatherCategory::RainAndSnow,
            "oragefaible" => WeatherCategory::MajorThunderstorm,
            _ => WeatherCategory::Unknown,
        }
    }

    /// Human-readable label; empty for [`WeatherCategory::Unknown`].
    pub fn name(&self) -> &'static str {
        match self {
            WeatherCategory::Sunny => "Sunny",
            WeatherCategory::LittleCloudy => "Little cloudy",
            WeatherCategory::PartlyCloudy => "Partly cloudy",
            WeatherCategory::Mixed => "Mixed",
            WeatherCategory::Cloudy => "Cloudy",
            WeatherCategory::Foggy => "Foggy",
            WeatherCategory::Rainy => "Rainy",
            WeatherCategory::Hail => "Hail",
            WeatherCategory::Snowy => "Snowy",
            WeatherCategory::LightRainShower => "Light rain shower",
            WeatherCategory::RainShower => "Rain shower",
            WeatherCategory::SnowShower => "Snow shower",
            WeatherCategory::Thunderstorm => "Thunderstorm",
            WeatherCategory::RainAndSnowShower => "Rain and snow shower",
            WeatherCategory::RainAndSnow => "Rain and snow",
            WeatherCategory::MajorThunderstorm => "Major thunderstorm",
            WeatherCategory::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_STEMS: [&str; 16] = [
        "soleil",
        "voile",
        "peu_nuageux",
        "mitige",
        "nuageux",
        "brouillard",
        "pluie",
        "grele",
        "neige",
        "averse_pluiefaible",
        "averse_pluie",
        "averse_neige",
        "averse_orage",
        "averse_pluieneige",
        "pluie_neige",
        "oragefaible",
    ];

    #[test]
    fn test_all_known_stems_have_a_name() {
        for stem in KNOWN_STEMS {
            let category = WeatherCategory::from_icon_stem(stem);
            assert_ne!(category, WeatherCategory::Unknown, "stem {stem}");
            assert!(!category.name().is_empty());
        }
    }

    #[test]
    fn test_unknown_stem_is_default() {
        assert_eq!(
            WeatherCategory::from_icon_stem("unknown_icon"),
            WeatherCategory::default()
        );
        // Lookup is exact; the extension must already be stripped.
        assert_eq!(
            WeatherCategory::from_icon_stem("soleil.gif"),
            WeatherCategory::Unknown
        );
        assert_eq!(WeatherCategory::from_icon_stem(""), WeatherCategory::Unknown);
    }
}
