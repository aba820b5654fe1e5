//! Per-element animation: resolved parameters, animation requests, the
//! frame-driven state machine and interaction presets.

pub(crate) mod params;
pub(crate) mod presets;
pub(crate) mod pressure;
pub(crate) mod request;
