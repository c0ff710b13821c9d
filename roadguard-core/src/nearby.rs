//! Map-search links for the SOS panel.
//!
//! Link generation only; no API call is ever made. Coordinates are formatted
//! to six decimal places so the links stay stable for a given fix.

use crate::session::Coordinates;

/// External map-search endpoint the links point at.
pub const MAPS_SEARCH_BASE: &str = "https://maps.example/search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NearbyCategory {
    Police,
    Hospital,
}

impl NearbyCategory {
    #[must_use]
    pub const fn query_term(self) -> &'static str {
        match self {
            Self::Police => "police",
            Self::Hospital => "hospital",
        }
    }

    /// Link text shown in the panel lists.
    #[must_use]
    pub const fn link_label(self) -> &'static str {
        match self {
            Self::Police => "Open nearby police stations on the map",
            Self::Hospital => "Open nearby hospitals on the map",
        }
    }
}

/// `{base}?query={category}+near+{lat},{lon}` with six-decimal coordinates.
#[must_use]
pub fn search_url(category: NearbyCategory, coords: Coordinates) -> String {
    format!(
        "{MAPS_SEARCH_BASE}?query={}+near+{:.6},{:.6}",
        category.query_term(),
        coords.latitude,
        coords.longitude
    )
}

/// The link pair backing the SOS panel lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbyLinks {
    pub police: String,
    pub hospitals: String,
}

#[must_use]
pub fn links_for(coords: Coordinates) -> NearbyLinks {
    NearbyLinks {
        police: search_url(NearbyCategory::Police, coords),
        hospitals: search_url(NearbyCategory::Hospital, coords),
    }
}
