// Domain layer: chain registry, models and ports (interfaces).

pub mod chain;
pub mod model;
pub mod ports;
