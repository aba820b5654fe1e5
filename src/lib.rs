//! Neumorph renders a "pressure-sensitive" embossed surface style and animates
//! transitions between style states.
//!
//! The pieces fit together like this:
//!
//! - A [`ConfigSource`] (for example a [`StyleTree`]) supplies cascading
//!   attributes; [`resolve`] walks them for one element and parameter.
//! - A [`PressureSensitiveElement`] resolves its resting [`VisualParams`] once,
//!   then interpolates toward each [`AnimationRequest`] frame by frame, easing
//!   through a [`CubicBezier`] and mixing colors with [`Color::blend`].
//! - Every frame is turned into a [`SurfacePaint`] by [`render`] and handed to
//!   a [`Surface`].
//! - Frames are requested from a [`FrameScheduler`]; [`Stage`] drives a set of
//!   elements headlessly from a [`FrameQueue`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// RGB colors and pigment mixing.
pub mod color;

pub(crate) mod animation;
pub(crate) mod element;
pub(crate) mod render;
pub(crate) mod stage;
pub(crate) mod style;

pub use crate::foundation::error::{NeuError, NeuResult};

pub use crate::animation::ease::{CubicBezier, Ease};
pub use crate::animation::interp::Lerp;
pub use crate::animation::scheduler::{FrameHandle, FrameQueue, FrameScheduler};
pub use crate::color::{Color, LIGHT_THRESHOLD};
pub use crate::element::params::{ElementOverrides, VisualParams, resolve_defaults};
pub use crate::element::presets::{InteractionState, Presets};
pub use crate::element::pressure::{
    AnimationState, Completion, PressureSensitiveElement, oscillate,
};
pub use crate::element::request::{AnimationRequest, Target};
pub use crate::render::emboss::{BoxShadow, LinearGradient, SurfacePaint, render};
pub use crate::render::surface::{PaintLog, Surface};
pub use crate::stage::{ElementKey, Stage};
pub use crate::style::param::{Param, VarScope};
pub use crate::style::resolver::{ConfigSource, NodeId, Resolver, resolve};
pub use crate::style::tree::{StyleNodeDef, StyleTree, StyleTreeDef};
pub use crate::style::value::{parse_angle, parse_length};
