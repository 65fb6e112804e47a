use serde::{Deserialize, Serialize};

use super::vocab::MapUnit;

/// Identifier known to both systems taking part in an exchange.
/// Uniqueness is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id {
    pub id: String,
    /// Issuer of the identity, e.g. "World Ranking List".
    pub id_type: Option<String>,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_type: None,
        }
    }

    pub fn with_type(id: impl Into<String>, id_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_type: Some(id_type.into()),
        }
    }
}

/// Text in a particular language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageString {
    pub text: String,
    /// ISO 639-1 two-letter language code.
    pub language: Option<String>,
}

impl LanguageString {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
        }
    }

    pub fn with_language(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: Some(language.into()),
        }
    }
}

/// Geographical position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lng: f64,
    pub lat: f64,
    /// Elevation above sea level, in meters.
    pub alt: Option<f64>,
}

impl GeoPosition {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self {
            lng,
            lat,
            alt: None,
        }
    }
}

/// Position in a map's coordinate system, relative to its centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    /// Units right of the centre.
    pub x: f64,
    /// Units below the centre.
    pub y: f64,
    pub unit: MapUnit,
}

impl MapPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            unit: MapUnit::default(),
        }
    }

    pub fn pixels(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            unit: MapUnit::Pixels,
        }
    }
}

/// Image file, either base64-encoded inline or linked through `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Base64 data.
    pub data: String,
    /// IANA media type, e.g. "image/png".
    pub media_type: String,
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Resolution in dpi.
    pub resolution: Option<f64>,
}

impl Image {
    pub fn new(data: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            media_type: media_type.into(),
            url: None,
            width: None,
            height: None,
            resolution: None,
        }
    }
}

/// A score earned for some purpose, e.g. a ranking list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub score: f64,
    /// Purpose of the score, e.g. the name of the ranking list.
    pub score_type: Option<String>,
}

impl Score {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            score_type: None,
        }
    }
}

/// A country by name and IOC three-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// IOC code; differs from ISO 3166-1 alpha-3 for several countries.
    pub code: String,
}

impl Country {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}
