//! Concrete renderable object types
//!
//! These are the stand-ins for whatever the rendering layer ultimately draws.
//! The registry only ever sees them through the capability traits, so a real
//! engine can substitute its own node types without touching the store.

use crate::foundation::math::{Transform, Vec3};
use crate::scene::material::StandardMaterial;
use crate::scene::renderable::{Paintable, Renderable, Transformable};

/// Primitive shape tag for mesh objects
///
/// Geometry construction is the rendering layer's concern; the editor core
/// only needs to know which shape an object was spawned as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Unit cube
    Cube,
    /// Unit sphere
    Sphere,
    /// Cylinder
    Cylinder,
    /// Torus
    Torus,
}

impl Primitive {
    /// Get all available primitives
    pub const fn all() -> &'static [Primitive] {
        &[
            Primitive::Cube,
            Primitive::Sphere,
            Primitive::Cylinder,
            Primitive::Torus,
        ]
    }

    /// Human-readable label, used as the default display name seed
    pub const fn label(self) -> &'static str {
        match self {
            Primitive::Cube => "Cube",
            Primitive::Sphere => "Sphere",
            Primitive::Cylinder => "Cylinder",
            Primitive::Torus => "Torus",
        }
    }
}

/// A mesh object: transform plus a paintable standard material
#[derive(Debug, Clone)]
pub struct MeshObject {
    /// Spatial transform
    pub transform: Transform,

    /// Surface material
    pub material: StandardMaterial,

    /// Which primitive shape this mesh was spawned as
    pub primitive: Primitive,
}

impl MeshObject {
    /// Create a mesh object at the origin with the default material
    pub fn new(primitive: Primitive) -> Self {
        Self {
            transform: Transform::identity(),
            material: StandardMaterial::default(),
            primitive,
        }
    }

    /// Builder pattern: Set the material
    pub fn with_material(mut self, material: StandardMaterial) -> Self {
        self.material = material;
        self
    }

    /// Builder pattern: Set the initial position
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }
}

impl Transformable for MeshObject {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    fn rotation(&self) -> Vec3 {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.transform.rotation = rotation;
    }

    fn scale(&self) -> Vec3 {
        self.transform.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }
}

impl Renderable for MeshObject {
    fn paintable(&self) -> Option<&dyn Paintable> {
        Some(&self.material)
    }

    fn paintable_mut(&mut self) -> Option<&mut dyn Paintable> {
        Some(&mut self.material)
    }
}

/// A transform-only node with no drawable surface
///
/// Used for grouping and as a locator (light rigs, camera targets). It has no
/// material, so color and opacity operations skip it.
#[derive(Debug, Clone, Default)]
pub struct EmptyObject {
    /// Spatial transform
    pub transform: Transform,
}

impl EmptyObject {
    /// Create an empty object at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Set the initial position
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }
}

impl Transformable for EmptyObject {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    fn rotation(&self) -> Vec3 {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.transform.rotation = rotation;
    }

    fn scale(&self) -> Vec3 {
        self.transform.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }
}

impl Renderable for EmptyObject {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::Color;

    #[test]
    fn test_mesh_object_is_paintable() {
        let mut mesh = MeshObject::new(Primitive::Cube)
            .with_material(StandardMaterial::with_color(Color::new(1.0, 0.0, 0.0)));

        let material = mesh.paintable_mut().expect("mesh should be paintable");
        material.set_opacity(0.25);

        assert_eq!(mesh.material.opacity, 0.25);
    }

    #[test]
    fn test_empty_object_is_not_paintable() {
        let mut empty = EmptyObject::new();

        assert!(empty.paintable().is_none());
        assert!(empty.paintable_mut().is_none());
    }

    #[test]
    fn test_primitive_labels() {
        for primitive in Primitive::all() {
            assert!(!primitive.label().is_empty());
        }
    }
}
