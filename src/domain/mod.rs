// Domain layer: core models, ports (interfaces) and the static station table.

pub mod model;
pub mod ports;
pub mod stations;
