// Domain layer: form state types and ports. No knowledge of HTTP or of any concrete page.

pub mod model;
pub mod ports;
