//! Scene registry: object list, selection, and transform mode
//!
//! All mutations are synchronous and immediately observable; reads are plain
//! snapshots of current state. Operations targeting a missing id or an absent
//! selection are silent no-ops rather than errors, so a property panel can
//! fire edits without guarding every call.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::math::Axis;
use crate::scene::renderable::{same_renderable, SharedRenderable};

/// Stable identifier for a registry entry
///
/// Assigned at insertion and never reused for the registry's lifetime, even
/// after the entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// The active transform gizmo mode
///
/// Orthogonal to selection; any mode is reachable from any mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    /// Move the selection
    #[default]
    Translate,
    /// Rotate the selection
    Rotate,
    /// Scale the selection
    Scale,
}

impl TransformMode {
    /// Get all modes in toolbar order
    pub const fn all() -> &'static [TransformMode] {
        &[
            TransformMode::Translate,
            TransformMode::Rotate,
            TransformMode::Scale,
        ]
    }

    /// Lowercase label used in toolbars and config files
    pub const fn label(self) -> &'static str {
        match self {
            TransformMode::Translate => "translate",
            TransformMode::Rotate => "rotate",
            TransformMode::Scale => "scale",
        }
    }
}

/// One registered scene object
///
/// The entry carries only the bookkeeping the renderable itself cannot: the
/// stable id, the display name, and the visibility flag. Everything visual
/// lives on the renderable.
#[derive(Clone)]
pub struct SceneObjectEntry {
    /// Stable identifier, unique for the registry's lifetime
    pub id: ObjectId,

    /// Shared reference to the externally-owned renderable
    pub renderable: SharedRenderable,

    /// Mutable human-readable label
    pub name: String,

    /// Whether the renderable participates in rendering
    pub visible: bool,
}

impl fmt::Debug for SceneObjectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneObjectEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

/// Single source of truth for scene objects, selection, and transform mode
///
/// An explicit, constructible store: create one and pass it by reference to
/// whatever presentation layer consumes it. Entries are kept in insertion
/// order, which is also the outliner display order.
pub struct SceneRegistry {
    entries: Vec<SceneObjectEntry>,
    selected: Option<SharedRenderable>,
    transform_mode: TransformMode,
    next_id: u64,
}

impl SceneRegistry {
    /// Create an empty registry in translate mode
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            transform_mode: TransformMode::default(),
            next_id: 1, // Reserve 0 so a zeroed id never aliases a real entry
        }
    }

    /// Create an empty registry with a configured initial transform mode
    pub fn with_transform_mode(mode: TransformMode) -> Self {
        Self {
            transform_mode: mode,
            ..Self::new()
        }
    }

    /// Register a renderable under a fresh id
    ///
    /// The new entry is appended, visible, and never selected implicitly.
    /// Always succeeds.
    pub fn add_object(&mut self, renderable: SharedRenderable, name: impl Into<String>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let name = name.into();
        log::debug!("registered {id} as {name:?}");

        self.entries.push(SceneObjectEntry {
            id,
            renderable,
            name,
            visible: true,
        });

        id
    }

    /// Remove the entry with the given id; no-op if absent
    ///
    /// If the removed entry's renderable is the current selection, the
    /// selection is cleared so it can never dangle.
    pub fn remove_object(&mut self, id: ObjectId) {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            log::debug!("remove ignored: {id} not registered");
            return;
        };

        let entry = self.entries.remove(index);
        if self.is_selected(&entry.renderable) {
            self.selected = None;
        }
        log::debug!("removed {id} ({:?})", entry.name);
    }

    /// Replace the current selection unconditionally
    ///
    /// Registry membership is not checked: selection is deliberately
    /// decoupled from registration, and callers are trusted to pass a
    /// registered renderable or `None`.
    pub fn set_selected_object(&mut self, renderable: Option<SharedRenderable>) {
        if let Some(renderable) = &renderable {
            let registered = self
                .entries
                .iter()
                .any(|entry| same_renderable(&entry.renderable, renderable));
            if !registered {
                log::debug!("selection set to a renderable that is not registered");
            }
        }
        self.selected = renderable;
    }

    /// Replace the active transform mode unconditionally
    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        self.transform_mode = mode;
    }

    /// Flip the visibility flag of the entry with the given id; no-op if absent
    ///
    /// Hiding the selected object clears the selection. Re-showing it later
    /// does not restore the selection.
    pub fn toggle_visibility(&mut self, id: ObjectId) {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return;
        };

        entry.visible = !entry.visible;
        let now_hidden = !entry.visible;
        let renderable = Rc::clone(&entry.renderable);
        log::debug!("{id} visibility -> {}", entry.visible);

        if now_hidden
            && self
                .selected
                .as_ref()
                .is_some_and(|selected| same_renderable(selected, &renderable))
        {
            self.selected = None;
        }
    }

    /// Replace the display name of the entry with the given id; no-op if absent
    ///
    /// No validation: the empty string is a permitted name.
    pub fn update_object_name(&mut self, id: ObjectId, name: impl Into<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.name = name.into();
        }
    }

    /// Set the selected renderable's base color; no-op without a mesh-like selection
    ///
    /// Writes straight through to the renderable's material. The registry
    /// keeps no copy of color state.
    pub fn update_object_color(&mut self, color: Color) {
        let Some(selected) = &self.selected else {
            return;
        };

        let mut renderable = selected.borrow_mut();
        match renderable.paintable_mut() {
            Some(material) => material.set_base_color(color),
            None => log::warn!("color edit ignored: selection has no paintable material"),
        }
    }

    /// Set the selected renderable's opacity; no-op without a mesh-like selection
    ///
    /// The transparency flag follows the opacity: anything below 1.0 enables
    /// alpha blending. The value is written through unclamped; range limits
    /// are the input widget's concern.
    pub fn update_object_opacity(&mut self, opacity: f32) {
        let Some(selected) = &self.selected else {
            return;
        };

        let mut renderable = selected.borrow_mut();
        match renderable.paintable_mut() {
            Some(material) => {
                material.set_transparent(opacity < 1.0);
                material.set_opacity(opacity);
            }
            None => log::warn!("opacity edit ignored: selection has no paintable material"),
        }
    }

    /// Write one position component of the selection; no-op without a selection
    pub fn update_object_position(&mut self, axis: Axis, value: f32) {
        if let Some(selected) = &self.selected {
            selected.borrow_mut().set_position_axis(axis, value);
        }
    }

    /// Write one rotation component of the selection; no-op without a selection
    ///
    /// Panels supply degrees; the renderable representation is always
    /// radians, so the conversion happens here.
    pub fn update_object_rotation(&mut self, axis: Axis, degrees: f32) {
        if let Some(selected) = &self.selected {
            selected.borrow_mut().set_rotation_axis(axis, degrees.to_radians());
        }
    }

    /// Write one scale component of the selection; no-op without a selection
    ///
    /// No range validation: a zero or negative scale is written through as-is.
    pub fn update_object_scale(&mut self, axis: Axis, value: f32) {
        if let Some(selected) = &self.selected {
            selected.borrow_mut().set_scale_axis(axis, value);
        }
    }

    /// All entries in insertion order
    pub fn objects(&self) -> &[SceneObjectEntry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: ObjectId) -> Option<&SceneObjectEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// The currently selected renderable, if any
    pub fn selected_object(&self) -> Option<&SharedRenderable> {
        self.selected.as_ref()
    }

    /// Whether the given renderable is the current selection
    pub fn is_selected(&self, renderable: &SharedRenderable) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| same_renderable(selected, renderable))
    }

    /// The active transform mode
    pub fn transform_mode(&self) -> TransformMode {
        self.transform_mode
    }

    /// Number of registered entries
    pub fn object_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}
