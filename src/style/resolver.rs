use std::borrow::Cow;

use crate::color::Color;
use crate::foundation::error::NeuResult;
use crate::style::param::{Param, VarScope};
use crate::style::value::{parse_angle, parse_length};

/// Opaque element identifier inside a [`ConfigSource`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Read access to the cascading key/value store the resolver queries.
///
/// Implementations must not form parent cycles.
pub trait ConfigSource {
    /// Element-local explicit value (`neuHeight`).
    fn local(&self, node: NodeId, param: Param) -> Option<Cow<'_, str>>;

    /// Element-local default value (`defaultNeuHeight`).
    fn local_default(&self, node: NodeId, param: Param) -> Option<Cow<'_, str>>;

    /// Containing element, if any.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Global style variable as seen from `node`.
    fn style_var(&self, node: NodeId, param: Param, scope: VarScope) -> Option<Cow<'_, str>>;
}

/// Resolve `param` for `node`; the first hit wins.
///
/// 1. `node`'s explicit value, then its local default;
/// 2. the same two lookups on each ancestor, nearest first;
/// 3. the primary style variable, then the default one, both read against
///    `node` itself (never the ancestor that was being inspected);
/// 4. `fallback`.
///
/// Empty style variables count as absent. `None` means nothing matched and
/// no fallback was given.
pub fn resolve<C>(source: &C, node: NodeId, param: Param, fallback: Option<&str>) -> Option<String>
where
    C: ConfigSource + ?Sized,
{
    let mut cursor = Some(node);
    while let Some(current) = cursor {
        if let Some(v) = source.local(current, param) {
            return Some(v.into_owned());
        }
        if let Some(v) = source.local_default(current, param) {
            return Some(v.into_owned());
        }
        cursor = source.parent(current);
    }

    for scope in [VarScope::Primary, VarScope::Default] {
        if let Some(v) = source.style_var(node, param, scope) {
            let v = v.trim();
            if !v.is_empty() {
                return Some(v.to_owned());
            }
        }
    }

    fallback.map(str::to_owned)
}

/// Typed view over [`resolve`] for one element, using each parameter's
/// built-in fallback.
pub struct Resolver<'a, C: ?Sized> {
    source: &'a C,
    node: NodeId,
}

impl<'a, C> Resolver<'a, C>
where
    C: ConfigSource + ?Sized,
{
    /// Bind a resolver to `node`.
    pub fn new(source: &'a C, node: NodeId) -> Self {
        Self { source, node }
    }

    /// Raw text for `param`; never `None` since every parameter has a fallback.
    pub fn text(&self, param: Param) -> String {
        resolve(self.source, self.node, param, Some(param.fallback()))
            .unwrap_or_else(|| param.fallback().to_owned())
    }

    /// Resolve `param` as a hex color.
    pub fn color(&self, param: Param) -> NeuResult<Color> {
        Color::from_hex(&self.text(param))
    }

    /// Resolve `param` as a length or plain number.
    pub fn number(&self, param: Param) -> NeuResult<f64> {
        parse_length(&self.text(param))
    }

    /// Resolve `param` as an angle in degrees.
    pub fn angle(&self, param: Param) -> NeuResult<f64> {
        parse_angle(&self.text(param))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/resolver.rs"]
mod tests;
