//! In-memory reference host
//!
//! Materializes the whole scene in plain data structures. Used by the test
//! suites and by "preview without a host" runs. The backend can be
//! configured to exercise host-side failure paths: a mode capacity limit,
//! missing font variants, and frame names that refuse to build.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::HostError;
use crate::host::{CollectionId, Host, ModeId, NodeId, Paint, StyleId, VariableId};
use crate::payload::{ColorStyleDefinition, EffectStyleDefinition, TextStyleDefinition};
use crate::value::{TokenType, TokenValue};

/// A variable's stored value for one mode
#[derive(Clone, Debug, PartialEq)]
pub enum StoredValue {
    Value(TokenValue),
    Alias(VariableId),
}

/// One variable record
#[derive(Clone, Debug)]
pub struct VariableRecord {
    pub collection: CollectionId,
    pub name: String,
    pub ty: TokenType,
    pub values: FxHashMap<ModeId, StoredValue>,
}

/// One collection record
#[derive(Clone, Debug)]
pub struct CollectionRecord {
    pub name: String,
    /// (id, name) in creation order; the first entry is the default mode
    pub modes: Vec<(ModeId, String)>,
}

/// Scene node kind
#[derive(Clone, Debug)]
pub enum NodeKind {
    Frame,
    Text {
        content: String,
        family: String,
        style: String,
        size: f64,
    },
}

/// One scene node record
#[derive(Clone, Debug)]
pub struct NodeRecord {
    pub name: String,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub bounds: Option<(f64, f64, f64, f64)>,
    pub background: Option<Paint>,
    pub border: Option<(Paint, f64)>,
    pub corner_radius: Option<f64>,
    pub text_color: Option<Paint>,
}

impl NodeRecord {
    fn new(name: String, kind: NodeKind) -> Self {
        Self {
            name,
            kind,
            parent: None,
            children: Vec::new(),
            bounds: None,
            background: None,
            border: None,
            corner_radius: None,
            text_color: None,
        }
    }
}

/// In-memory [`Host`] implementation
#[derive(Debug, Default)]
pub struct MemoryHost {
    collections: Vec<CollectionRecord>,
    variables: Vec<VariableRecord>,
    /// Per-collection name index for collision detection
    names: FxHashMap<CollectionId, FxHashSet<String>>,
    styles: Vec<String>,
    nodes: Vec<NodeRecord>,
    loaded_fonts: FxHashSet<(String, String)>,
    next_mode: u32,

    /// Modes-per-collection cap; `None` means unlimited
    mode_limit: Option<usize>,
    /// Font variants this host pretends not to have
    missing_fonts: FxHashSet<(String, String)>,
    /// Frame names (exact match) that fail to build
    poisoned_frames: Vec<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of modes per collection, mimicking a host plan limit
    pub fn with_mode_limit(mut self, limit: usize) -> Self {
        self.mode_limit = Some(limit);
        self
    }

    /// Mark a font variant as unavailable
    pub fn without_font(mut self, family: &str, style: &str) -> Self {
        self.missing_fonts.insert((family.into(), style.into()));
        self
    }

    /// Make `create_frame` fail for this exact frame name
    pub fn poison_frame_named(mut self, name: &str) -> Self {
        self.poisoned_frames.push(name.into());
        self
    }

    // ---- Inspection helpers ----

    pub fn collection(&self, name: &str) -> Option<&CollectionRecord> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn mode_id(&self, collection: &str, mode: &str) -> Option<ModeId> {
        self.collection(collection)?
            .modes
            .iter()
            .find(|(_, n)| n == mode)
            .map(|(id, _)| *id)
    }

    pub fn variable(&self, id: VariableId) -> Option<&VariableRecord> {
        self.variables.get(id.0 as usize)
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(id.0 as usize)
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.nodes.is_empty() && self.styles.is_empty()
    }

    /// Resolve a variable's value for a mode, chasing alias links.
    ///
    /// Mode alignment across collections is by name, matching how hosts
    /// switch themes: each variable on the chain reads its own collection's
    /// mode of that name, falling back to the collection default when the
    /// mode (or its entry) is absent. Alias chains bottom out because
    /// variables only alias into earlier tiers; the depth guard covers
    /// malformed test setups.
    pub fn resolved_value(&self, collection: &str, name: &str, mode: &str) -> Option<TokenValue> {
        let coll_id = CollectionId(
            self.collections
                .iter()
                .position(|c| c.name == collection)? as u32,
        );
        let var = self
            .variables
            .iter()
            .find(|v| v.collection == coll_id && v.name == name)?;
        self.chase(var, mode, 0)
    }

    fn chase(&self, var: &VariableRecord, mode: &str, depth: usize) -> Option<TokenValue> {
        if depth > 16 {
            return None;
        }
        let coll = self.collections.get(var.collection.0 as usize)?;
        let named = coll
            .modes
            .iter()
            .find(|(_, n)| n == mode)
            .and_then(|(id, _)| var.values.get(id));
        let stored = named.or_else(|| var.values.get(&coll.modes.first()?.0))?;
        match stored {
            StoredValue::Value(v) => Some(v.clone()),
            StoredValue::Alias(target) => {
                let target = self.variables.get(target.0 as usize)?;
                self.chase(target, mode, depth + 1)
            }
        }
    }

    fn fresh_mode(&mut self) -> ModeId {
        let id = ModeId(self.next_mode);
        self.next_mode += 1;
        id
    }
}

impl Host for MemoryHost {
    fn create_collection(&mut self, name: &str) -> Result<(CollectionId, ModeId), HostError> {
        let id = CollectionId(self.collections.len() as u32);
        let mode = self.fresh_mode();
        self.collections.push(CollectionRecord {
            name: name.to_string(),
            modes: vec![(mode, "Mode 1".to_string())],
        });
        self.names.insert(id, FxHashSet::default());
        Ok((id, mode))
    }

    fn rename_mode(
        &mut self,
        collection: CollectionId,
        mode: ModeId,
        name: &str,
    ) -> Result<(), HostError> {
        let coll = self
            .collections
            .get_mut(collection.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{collection:?}")))?;
        let entry = coll
            .modes
            .iter_mut()
            .find(|(id, _)| *id == mode)
            .ok_or_else(|| HostError::UnknownHandle(format!("{mode:?}")))?;
        entry.1 = name.to_string();
        Ok(())
    }

    fn add_mode(&mut self, collection: CollectionId, name: &str) -> Result<ModeId, HostError> {
        let limit = self.mode_limit;
        let mode = self.fresh_mode();
        let coll = self
            .collections
            .get_mut(collection.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{collection:?}")))?;
        if let Some(limit) = limit {
            if coll.modes.len() >= limit {
                return Err(HostError::ModeCapacity {
                    collection: coll.name.clone(),
                    modes: coll.modes.len(),
                });
            }
        }
        coll.modes.push((mode, name.to_string()));
        Ok(mode)
    }

    fn create_variable(
        &mut self,
        collection: CollectionId,
        name: &str,
        ty: TokenType,
    ) -> Result<VariableId, HostError> {
        let names = self
            .names
            .get_mut(&collection)
            .ok_or_else(|| HostError::UnknownHandle(format!("{collection:?}")))?;
        if !names.insert(name.to_string()) {
            return Err(HostError::NameCollision(name.to_string()));
        }
        let id = VariableId(self.variables.len() as u32);
        self.variables.push(VariableRecord {
            collection,
            name: name.to_string(),
            ty,
            values: FxHashMap::default(),
        });
        Ok(id)
    }

    fn set_variable_value(
        &mut self,
        variable: VariableId,
        mode: ModeId,
        value: &TokenValue,
    ) -> Result<(), HostError> {
        let var = self
            .variables
            .get_mut(variable.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{variable:?}")))?;
        if !value.matches(var.ty) {
            return Err(HostError::TypeMismatch {
                path: var.name.clone(),
                expected: format!("{:?}", var.ty),
            });
        }
        var.values.insert(mode, StoredValue::Value(value.clone()));
        Ok(())
    }

    fn set_variable_alias(
        &mut self,
        variable: VariableId,
        mode: ModeId,
        target: VariableId,
    ) -> Result<(), HostError> {
        let target_ty = self
            .variables
            .get(target.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{target:?}")))?
            .ty;
        let var = self
            .variables
            .get_mut(variable.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{variable:?}")))?;
        let compatible = var.ty == target_ty
            || matches!(
                (var.ty, target_ty),
                (TokenType::Dimension, TokenType::Number)
                    | (TokenType::Number, TokenType::Dimension)
            );
        if !compatible {
            return Err(HostError::TypeMismatch {
                path: var.name.clone(),
                expected: format!("{:?}", var.ty),
            });
        }
        var.values.insert(mode, StoredValue::Alias(target));
        Ok(())
    }

    fn create_text_style(&mut self, def: &TextStyleDefinition) -> Result<StyleId, HostError> {
        self.styles.push(format!("text:{}", def.name));
        Ok(StyleId((self.styles.len() - 1) as u32))
    }

    fn create_effect_style(&mut self, def: &EffectStyleDefinition) -> Result<StyleId, HostError> {
        self.styles.push(format!("effect:{}", def.name));
        Ok(StyleId((self.styles.len() - 1) as u32))
    }

    fn create_color_style(&mut self, def: &ColorStyleDefinition) -> Result<StyleId, HostError> {
        self.styles.push(format!("color:{}", def.name));
        Ok(StyleId((self.styles.len() - 1) as u32))
    }

    fn load_font(&mut self, family: &str, style: &str) -> Result<(), HostError> {
        let key = (family.to_string(), style.to_string());
        if self.missing_fonts.contains(&key) {
            return Err(HostError::FontUnavailable {
                family: family.to_string(),
                style: style.to_string(),
            });
        }
        self.loaded_fonts.insert(key);
        Ok(())
    }

    fn create_frame(&mut self, name: &str) -> Result<NodeId, HostError> {
        if self.poisoned_frames.iter().any(|p| p == name) {
            return Err(HostError::Backend(format!("refused to build frame {name:?}")));
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes
            .push(NodeRecord::new(name.to_string(), NodeKind::Frame));
        Ok(id)
    }

    fn create_text(
        &mut self,
        content: &str,
        family: &str,
        style: &str,
        size: f64,
    ) -> Result<NodeId, HostError> {
        let key = (family.to_string(), style.to_string());
        if !self.loaded_fonts.contains(&key) {
            return Err(HostError::FontUnavailable {
                family: family.to_string(),
                style: style.to_string(),
            });
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord::new(
            content.to_string(),
            NodeKind::Text {
                content: content.to_string(),
                family: family.to_string(),
                style: style.to_string(),
                size,
            },
        ));
        Ok(id)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), HostError> {
        if self.nodes.get(parent.0 as usize).is_none() {
            return Err(HostError::UnknownHandle(format!("{parent:?}")));
        }
        let child_rec = self
            .nodes
            .get_mut(child.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{child:?}")))?;
        child_rec.parent = Some(parent);
        self.nodes[parent.0 as usize].children.push(child);
        Ok(())
    }

    fn set_bounds(
        &mut self,
        node: NodeId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), HostError> {
        let rec = self
            .nodes
            .get_mut(node.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{node:?}")))?;
        rec.bounds = Some((x, y, width, height));
        Ok(())
    }

    fn set_background(&mut self, node: NodeId, paint: Paint) -> Result<(), HostError> {
        let rec = self
            .nodes
            .get_mut(node.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{node:?}")))?;
        rec.background = Some(paint);
        Ok(())
    }

    fn set_border(&mut self, node: NodeId, paint: Paint, width: f64) -> Result<(), HostError> {
        let rec = self
            .nodes
            .get_mut(node.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{node:?}")))?;
        rec.border = Some((paint, width));
        Ok(())
    }

    fn set_corner_radius(&mut self, node: NodeId, radius: f64) -> Result<(), HostError> {
        let rec = self
            .nodes
            .get_mut(node.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{node:?}")))?;
        rec.corner_radius = Some(radius);
        Ok(())
    }

    fn set_text_color(&mut self, node: NodeId, paint: Paint) -> Result<(), HostError> {
        let rec = self
            .nodes
            .get_mut(node.0 as usize)
            .ok_or_else(|| HostError::UnknownHandle(format!("{node:?}")))?;
        rec.text_color = Some(paint);
        Ok(())
    }
}
