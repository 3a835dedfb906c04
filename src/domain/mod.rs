// Domain layer: seat models and the ports the organizer reads through.

pub mod model;
pub mod ports;
