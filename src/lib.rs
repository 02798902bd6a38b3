pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::HttpCatalogSource;
pub use crate::adapters::store::{JsonBlendStore, MemoryBlendStore};
pub use crate::config::{CliConfig, Command};
pub use crate::core::catalog::{Catalog, Snapshot};
pub use crate::core::filter::SpiceFilter;
pub use crate::domain::composition::{
    derive_blend_colors, format_colors_for_gradient, resolve_all_spices, resolve_spice_ids,
    DEFAULT_BLEND_COLOR,
};
pub use crate::domain::model::{Blend, BlendWithSpices, NewBlend, Spice};
pub use crate::utils::error::{CatalogError, Result};
