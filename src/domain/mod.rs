// Domain layer: sampled data, detection results and the ports the pipeline is built on.

pub mod model;
pub mod ports;
