use serde::Deserialize;
use std::fmt;

/// A latitude/longitude pair as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Only a complete pair can be resolved.
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Option<Self> {
        Some(Self::new(lat?, lon?))
    }
}

/// Fallback place text. Values use Rust float formatting, which never switches
/// to exponent notation (`1e-7` prints as `0.0000001`).
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat {}, lon {}", self.lat, self.lon)
    }
}

/// The subset of a Nominatim `jsonv2` reverse lookup that we read.
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub display_name: Option<String>,
}
