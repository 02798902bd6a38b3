// Adapters layer: concrete implementations of the catalog ports.

pub mod http;
pub mod store;
