use serde::{Deserialize, Serialize};

pub type SpiceId = u32;
pub type BlendId = u32;

/// A single spice from the upstream catalog. Read-only lookup data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spice {
    pub id: SpiceId,
    pub name: String,
    /// 6-hex-digit color code without the leading '#'.
    pub color: String,
    /// Price level as a run of '$' characters, 1 to 5 of them.
    pub price: String,
    /// Heat level from 0 to 5.
    pub heat: u8,
}

/// A named composition of spices and/or other blends.
///
/// `spices` and `blends` are ordered id lists. They may contain duplicates,
/// reference ids with no matching catalog entry, or form cycles through
/// `blends`; the composition core tolerates all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blend {
    pub id: BlendId,
    pub name: String,
    pub description: String,
    pub spices: Vec<SpiceId>,
    pub blends: Vec<BlendId>,
}

/// A blend enriched with its transitive spice closure. Computed on demand,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendWithSpices {
    #[serde(flatten)]
    pub blend: Blend,
    #[serde(rename = "allSpices")]
    pub all_spices: Vec<Spice>,
}

/// Creation payload for a blend; the catalog assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlend {
    pub name: String,
    pub description: String,
    pub spices: Vec<SpiceId>,
    pub blends: Vec<BlendId>,
}

impl Spice {
    /// Numeric price level, i.e. how many '$' the price string carries.
    pub fn price_level(&self) -> usize {
        self.price.chars().filter(|c| *c == '$').count()
    }

    /// Human-readable heat label used by the CLI listing.
    pub fn heat_label(&self) -> String {
        if self.heat == 0 {
            "no heat".to_string()
        } else {
            "🔥".repeat(self.heat as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spice(price: &str, heat: u8) -> Spice {
        Spice {
            id: 1,
            name: "Cumin".to_string(),
            color: "924e01".to_string(),
            price: price.to_string(),
            heat,
        }
    }

    #[test]
    fn test_price_level_counts_dollar_signs() {
        assert_eq!(spice("$", 0).price_level(), 1);
        assert_eq!(spice("$$$$$", 0).price_level(), 5);
    }

    #[test]
    fn test_heat_label() {
        assert_eq!(spice("$", 0).heat_label(), "no heat");
        assert_eq!(spice("$", 3).heat_label(), "🔥🔥🔥");
    }

    #[test]
    fn test_blend_with_spices_serializes_all_spices_camel_case() {
        let view = BlendWithSpices {
            blend: Blend {
                id: 7,
                name: "Garam Masala".to_string(),
                description: "Warm".to_string(),
                spices: vec![1],
                blends: vec![],
            },
            all_spices: vec![spice("$", 2)],
        };

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("allSpices").is_some());
        assert_eq!(json["id"], 7);
    }
}
