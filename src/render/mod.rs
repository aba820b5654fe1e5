//! Emboss paint derivation and the surfaces that display it.

pub(crate) mod emboss;
pub(crate) mod surface;
