use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::error::{NeuError, NeuResult};
use crate::style::param::{Param, VarScope};
use crate::style::resolver::{ConfigSource, NodeId};

/// In-memory [`ConfigSource`]: a tree of elements with local attributes and
/// inherited style variables.
///
/// Style variables inherit like CSS custom properties: a lookup checks the
/// element, then its ancestors, then the document-level `root` map.
#[derive(Clone, Debug, Default)]
pub struct StyleTree {
    nodes: Vec<StyleNode>,
    index: BTreeMap<String, NodeId>,
    root_vars: BTreeMap<(Param, VarScope), String>,
}

#[derive(Clone, Debug)]
struct StyleNode {
    name: String,
    parent: Option<NodeId>,
    local: BTreeMap<Param, String>,
    local_default: BTreeMap<Param, String>,
    vars: BTreeMap<(Param, VarScope), String>,
}

/// JSON boundary model for [`StyleTree`].
///
/// Nodes must be listed after their parent.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct StyleTreeDef {
    /// Document-level style variables (`"neu-height": "6"`).
    #[serde(default)]
    pub root: BTreeMap<String, String>,
    /// Elements, parents first.
    #[serde(default)]
    pub nodes: Vec<StyleNodeDef>,
}

/// One element in a [`StyleTreeDef`].
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct StyleNodeDef {
    /// Unique element name.
    pub id: String,
    /// Name of an element declared earlier.
    #[serde(default)]
    pub parent: Option<String>,
    /// Element-local attributes keyed like `neuHeight` / `defaultNeuHeight`.
    #[serde(default)]
    pub data: BTreeMap<String, String>,
    /// Style variables set on this element (`"neu-height"`, `"--default-neu-height"`).
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

impl StyleTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from its JSON model.
    pub fn from_def(def: &StyleTreeDef) -> NeuResult<Self> {
        let mut tree = Self::new();

        for (name, value) in &def.root {
            match Param::from_style_var(name) {
                Some((param, scope)) => tree.set_var(None, param, scope, value.clone()),
                None => tracing::debug!(var = %name, "ignoring unknown root style variable"),
            }
        }

        for node in &def.nodes {
            let parent = match &node.parent {
                Some(p) => Some(tree.node(p).ok_or_else(|| {
                    NeuError::validation(format!(
                        "node '{}' references unknown parent '{p}' (parents must come first)",
                        node.id
                    ))
                })?),
                None => None,
            };
            let id = tree.add_node(&node.id, parent)?;

            for (key, value) in &node.data {
                match Param::from_dataset_key(key) {
                    Some((param, false)) => tree.set_local(id, param, value.clone()),
                    Some((param, true)) => tree.set_local_default(id, param, value.clone()),
                    None => {
                        tracing::debug!(node = %node.id, key = %key, "ignoring unknown data key")
                    }
                }
            }
            for (name, value) in &node.vars {
                match Param::from_style_var(name) {
                    Some((param, scope)) => tree.set_var(Some(id), param, scope, value.clone()),
                    None => tracing::debug!(
                        node = %node.id,
                        var = %name,
                        "ignoring unknown style variable"
                    ),
                }
            }
        }

        Ok(tree)
    }

    /// Parse a JSON document into a tree.
    pub fn from_json_str(json: &str) -> NeuResult<Self> {
        let def: StyleTreeDef = serde_json::from_str(json)?;
        Self::from_def(&def)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: &Path) -> NeuResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            NeuError::Other(anyhow::Error::new(e).context(format!("read '{}'", path.display())))
        })?;
        Self::from_json_str(&text)
    }

    /// Append an element. `parent` must already exist, so cycles cannot form.
    pub fn add_node(&mut self, name: &str, parent: Option<NodeId>) -> NeuResult<NodeId> {
        if self.index.contains_key(name) {
            return Err(NeuError::validation(format!("duplicate node id '{name}'")));
        }
        if let Some(p) = parent {
            if self.get(p).is_none() {
                return Err(NeuError::validation(format!("unknown parent {p}")));
            }
        }

        let id = NodeId(
            u32::try_from(self.nodes.len())
                .map_err(|_| NeuError::validation("style tree node count overflow"))?,
        );
        self.nodes.push(StyleNode {
            name: name.to_owned(),
            parent,
            local: BTreeMap::new(),
            local_default: BTreeMap::new(),
            vars: BTreeMap::new(),
        });
        self.index.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Look up an element by name.
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Name an element was registered with.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Set an element-local explicit value. Unknown ids are ignored.
    pub fn set_local(&mut self, id: NodeId, param: Param, value: impl Into<String>) {
        if let Some(n) = self.get_mut(id) {
            n.local.insert(param, value.into());
        }
    }

    /// Set an element-local default value. Unknown ids are ignored.
    pub fn set_local_default(&mut self, id: NodeId, param: Param, value: impl Into<String>) {
        if let Some(n) = self.get_mut(id) {
            n.local_default.insert(param, value.into());
        }
    }

    /// Set a style variable on an element, or document-wide when `id` is `None`.
    pub fn set_var(
        &mut self,
        id: Option<NodeId>,
        param: Param,
        scope: VarScope,
        value: impl Into<String>,
    ) {
        let value = value.into();
        match id {
            None => {
                self.root_vars.insert((param, scope), value);
            }
            Some(id) => {
                if let Some(n) = self.get_mut(id) {
                    n.vars.insert((param, scope), value);
                }
            }
        }
    }

    /// Remove a style variable; see [`StyleTree::set_var`].
    pub fn remove_var(&mut self, id: Option<NodeId>, param: Param, scope: VarScope) {
        match id {
            None => {
                self.root_vars.remove(&(param, scope));
            }
            Some(id) => {
                if let Some(n) = self.get_mut(id) {
                    n.vars.remove(&(param, scope));
                }
            }
        }
    }

    fn get(&self, id: NodeId) -> Option<&StyleNode> {
        self.nodes.get(id.0 as usize)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut StyleNode> {
        self.nodes.get_mut(id.0 as usize)
    }
}

impl ConfigSource for StyleTree {
    fn local(&self, node: NodeId, param: Param) -> Option<Cow<'_, str>> {
        self.get(node)?.local.get(&param).map(|v| Cow::Borrowed(v.as_str()))
    }

    fn local_default(&self, node: NodeId, param: Param) -> Option<Cow<'_, str>> {
        self.get(node)?
            .local_default
            .get(&param)
            .map(|v| Cow::Borrowed(v.as_str()))
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)?.parent
    }

    fn style_var(&self, node: NodeId, param: Param, scope: VarScope) -> Option<Cow<'_, str>> {
        let key = (param, scope);
        let mut cursor = self.get(node).map(|_| node);
        while let Some(id) = cursor {
            let n = self.get(id)?;
            if let Some(v) = n.vars.get(&key) {
                return Some(Cow::Borrowed(v.as_str()));
            }
            cursor = n.parent;
        }
        self.root_vars.get(&key).map(|v| Cow::Borrowed(v.as_str()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/tree.rs"]
mod tests;
