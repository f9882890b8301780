// Domain layer: sample and label models plus the source port. No I/O here.

pub mod model;
pub mod ports;
