pub mod catalog;
pub mod filter;

pub use crate::domain::model::{Blend, BlendWithSpices, NewBlend, Spice};
pub use crate::domain::ports::{BlendStore, CatalogSource};
pub use crate::utils::error::Result;
