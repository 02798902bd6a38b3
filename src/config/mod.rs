use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "spice-rack")]
#[command(about = "Browse a catalog of spices and blends, and compose new blends")]
pub struct CliConfig {
    /// Base URL of the catalog API.
    #[arg(long, default_value = "http://localhost:9090/api/v1")]
    pub api_endpoint: String,

    /// Directory holding locally created blends.
    #[arg(long, default_value = "./data")]
    pub store_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List spices, optionally filtered by name, price level, or heat.
    Spices {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        price: Option<u8>,
        #[arg(long)]
        heat: Option<u8>,
    },
    /// List blends, optionally filtered by name.
    Blends {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one blend with its gradient swatch and full spice closure.
    Show { id: u32 },
    /// Create a blend from spice ids and/or child blend ids.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long = "spice", value_delimiter = ',')]
        spices: Vec<u32>,
        #[arg(long = "blend", value_delimiter = ',')]
        blends: Vec<u32>,
    },
    /// Drop all locally created blends.
    Reset,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spices_subcommand_with_filters() {
        let config = CliConfig::try_parse_from([
            "spice-rack",
            "spices",
            "--search",
            "pepper",
            "--heat",
            "3",
        ])
        .unwrap();

        match config.command {
            Command::Spices { search, price, heat } => {
                assert_eq!(search.as_deref(), Some("pepper"));
                assert_eq!(price, None);
                assert_eq!(heat, Some(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_create_with_comma_separated_ids() {
        let config = CliConfig::try_parse_from([
            "spice-rack",
            "create",
            "--name",
            "My Blend",
            "--description",
            "Homemade",
            "--spice",
            "1,2,3",
            "--blend",
            "7",
        ])
        .unwrap();

        match config.command {
            Command::Create { spices, blends, .. } => {
                assert_eq!(spices, vec![1, 2, 3]);
                assert_eq!(blends, vec![7]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = CliConfig::try_parse_from(["spice-rack", "reset"]).unwrap();
        assert!(config.validate().is_ok());

        config.api_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }
}
