// Domain layer: record models, report shapes and ports (interfaces).

pub mod model;
pub mod ports;
pub mod report;
