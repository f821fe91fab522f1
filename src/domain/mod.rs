// Domain layer: well geometry, results, and the operator-facing port.

pub mod model;
pub mod ports;
