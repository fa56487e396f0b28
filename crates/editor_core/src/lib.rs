//! # Editor Core
//!
//! The scene object registry and selection store behind a 3D scene editor.
//!
//! ## Features
//!
//! - **Scene Registry**: Authoritative, insertion-ordered list of scene objects
//! - **Selection & Transform Mode**: Single-selection state plus the active gizmo mode
//! - **Capability Traits**: Renderables expose transform and (optionally) paint capabilities
//! - **Inspector Support**: Derived display values (hex colors, degrees) for property panels
//!
//! ## Quick Start
//!
//! ```rust
//! use editor_core::prelude::*;
//!
//! let mut registry = SceneRegistry::new();
//!
//! let cube = shared(MeshObject::new(Primitive::Cube));
//! let id = registry.add_object(cube.clone(), "Cube");
//!
//! registry.set_selected_object(Some(cube));
//! registry.set_transform_mode(TransformMode::Rotate);
//! registry.update_object_rotation(Axis::Y, 45.0);
//! registry.update_object_color(Color::from_hex("#ff8800")?);
//!
//! registry.toggle_visibility(id);
//! assert!(registry.selected_object().is_none());
//! # Ok::<(), editor_core::foundation::color::ColorParseError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod inspector;
pub mod scene;

/// Common imports for editor users
pub mod prelude {
    pub use crate::{
        config::{Config, EditorConfig},
        foundation::{
            color::Color,
            math::{Axis, Transform, Vec3},
        },
        inspector::PropertySheet,
        scene::{
            shared, EmptyObject, MeshObject, ObjectId, Paintable, Primitive, Renderable,
            SceneObjectEntry, SceneRegistry, SharedRenderable, StandardMaterial, TransformMode,
            Transformable,
        },
    };
}
