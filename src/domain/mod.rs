// Domain layer: models, ports, and the pure composition core. No I/O here.

pub mod composition;
pub mod model;
pub mod ports;
