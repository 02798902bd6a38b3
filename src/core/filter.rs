use crate::domain::model::{Blend, Spice};

/// Client-side spice filters: name search plus exact price/heat levels.
/// Mirrors the query parameters of the upstream list endpoint.
#[derive(Debug, Clone, Default)]
pub struct SpiceFilter {
    pub search: Option<String>,
    pub price: Option<u8>,
    pub heat: Option<u8>,
}

impl SpiceFilter {
    pub fn matches(&self, spice: &Spice) -> bool {
        if let Some(search) = &self.search {
            if !spice.name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        if let Some(price) = self.price {
            if spice.price_level() != price as usize {
                return false;
            }
        }
        if let Some(heat) = self.heat {
            if spice.heat != heat {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive name-substring match for blend search.
pub fn blend_matches_search(blend: &Blend, search: &str) -> bool {
    blend.name.to_lowercase().contains(&search.to_lowercase())
}
