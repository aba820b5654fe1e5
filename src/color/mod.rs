//! RGB color value type and the pigment mixing model behind [`Color::blend`].

pub mod pigment;
pub(crate) mod rgb;

pub use rgb::{Color, LIGHT_THRESHOLD};
