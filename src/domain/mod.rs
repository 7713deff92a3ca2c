// Domain layer: score records and the ports the analyzer talks through.

pub mod model;
pub mod ports;
