// Domain layer: the exported record and the storage port it is written through.

pub mod model;
pub mod ports;
