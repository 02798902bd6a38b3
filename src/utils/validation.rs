use crate::domain::model::NewBlend;
use crate::utils::error::{CatalogError, Result};
use url::Url;

/// A blend must reference at least this many spices, or at least
/// [`MIN_BLEND_BLENDS`] child blends.
pub const MIN_BLEND_SPICES: usize = 2;
pub const MIN_BLEND_BLENDS: usize = 1;

pub const MAX_HEAT_LEVEL: u8 = 5;
pub const MAX_PRICE_LEVEL: usize = 5;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::ValidationError {
            message: format!("{} is required", field_name),
        });
    }
    Ok(())
}

/// Exactly six hex digits, no leading '#'.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    if value.len() != 6 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CatalogError::ValidationError {
            message: format!(
                "{} must be a 6-hex-digit color without '#', got '{}'",
                field_name, value
            ),
        });
    }
    Ok(())
}

pub fn validate_heat(field_name: &str, value: u8) -> Result<()> {
    if value > MAX_HEAT_LEVEL {
        return Err(CatalogError::ValidationError {
            message: format!(
                "{} must be between 0 and {}, got {}",
                field_name, MAX_HEAT_LEVEL, value
            ),
        });
    }
    Ok(())
}

/// A price is a run of 1 to [`MAX_PRICE_LEVEL`] '$' characters.
pub fn validate_price(field_name: &str, value: &str) -> Result<()> {
    let dollars = value.chars().all(|c| c == '$');
    if !dollars || value.is_empty() || value.len() > MAX_PRICE_LEVEL {
        return Err(CatalogError::ValidationError {
            message: format!(
                "{} must be 1 to {} '$' characters, got '{}'",
                field_name, MAX_PRICE_LEVEL, value
            ),
        });
    }
    Ok(())
}

/// Creation rules for a blend: name and description present, and enough
/// composition to be worth naming.
pub fn validate_new_blend(blend: &NewBlend) -> Result<()> {
    validate_non_empty_string("name", &blend.name)?;
    validate_non_empty_string("description", &blend.description)?;

    if blend.spices.len() < MIN_BLEND_SPICES && blend.blends.len() < MIN_BLEND_BLENDS {
        return Err(CatalogError::ValidationError {
            message: format!(
                "select at least {} spices or {} blend",
                MIN_BLEND_SPICES, MIN_BLEND_BLENDS
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_blend(spices: Vec<u32>, blends: Vec<u32>) -> NewBlend {
        NewBlend {
            name: "Five Spice".to_string(),
            description: "Sweet and warm".to_string(),
            spices,
            blends,
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_endpoint", "https://example.com").is_ok());
        assert!(validate_url("api_endpoint", "http://example.com").is_ok());
        assert!(validate_url("api_endpoint", "").is_err());
        assert!(validate_url("api_endpoint", "invalid-url").is_err());
        assert!(validate_url("api_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("color", "7e7ac0").is_ok());
        assert!(validate_hex_color("color", "FFA500").is_ok());
        assert!(validate_hex_color("color", "#FFA500").is_err());
        assert!(validate_hex_color("color", "FFA50").is_err());
        assert!(validate_hex_color("color", "GGGGGG").is_err());
    }

    #[test]
    fn test_validate_heat_and_price() {
        assert!(validate_heat("heat", 0).is_ok());
        assert!(validate_heat("heat", 5).is_ok());
        assert!(validate_heat("heat", 6).is_err());

        assert!(validate_price("price", "$").is_ok());
        assert!(validate_price("price", "$$$$$").is_ok());
        assert!(validate_price("price", "").is_err());
        assert!(validate_price("price", "$$$$$$").is_err());
        assert!(validate_price("price", "€€").is_err());
    }

    #[test]
    fn test_validate_new_blend_requires_name_and_description() {
        let mut b = new_blend(vec![1, 2], vec![]);
        b.name = "  ".to_string();
        assert!(validate_new_blend(&b).is_err());

        let mut b = new_blend(vec![1, 2], vec![]);
        b.description = String::new();
        assert!(validate_new_blend(&b).is_err());
    }

    #[test]
    fn test_validate_new_blend_composition_minimums() {
        // Two spices is enough, as is one child blend. One lone spice is not.
        assert!(validate_new_blend(&new_blend(vec![1, 2], vec![])).is_ok());
        assert!(validate_new_blend(&new_blend(vec![], vec![9])).is_ok());
        assert!(validate_new_blend(&new_blend(vec![1], vec![])).is_err());
        assert!(validate_new_blend(&new_blend(vec![], vec![])).is_err());
    }
}
