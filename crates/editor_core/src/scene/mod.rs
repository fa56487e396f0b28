//! Scene object registry and selection store
//!
//! Single source of truth for which renderables exist in the edited scene,
//! which one is selected, and which transform gizmo is active.
//!
//! ## Architecture
//!
//! ```text
//! Properties Panel (presentation)
//!      ↓ mutation operations
//! SceneRegistry (bookkeeping: ids, names, visibility, selection, mode)
//!      ↓ capability traits (Transformable / Paintable)
//! Renderables (externally constructed and owned)
//! ```
//!
//! The registry deliberately holds no copy of visual state. Color, opacity,
//! and transforms live on the renderables themselves; the registry is a thin
//! mutation facade plus the bookkeeping a renderable cannot carry (stable id,
//! display name, visibility flag, selection, transform mode).

mod material;
mod objects;
mod registry;
mod renderable;

pub use material::StandardMaterial;
pub use objects::{EmptyObject, MeshObject, Primitive};
pub use registry::{ObjectId, SceneObjectEntry, SceneRegistry, TransformMode};
pub use renderable::{
    same_renderable, shared, Paintable, Renderable, SharedRenderable, Transformable,
};
