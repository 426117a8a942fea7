// Domain layer: lesson models and the program port.

pub mod model;
pub mod ports;
