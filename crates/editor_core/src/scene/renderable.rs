//! Capability traits for renderable scene objects
//!
//! The registry never depends on a concrete rendering-library type. Anything
//! with a transform can be registered; anything that additionally exposes a
//! paintable material ("mesh-like") also accepts color and opacity edits.
//! The optional capability is discovered through an explicit query
//! ([`Renderable::paintable`]) rather than downcasting at call sites.

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::color::Color;
use crate::foundation::math::{Axis, Vec3};

/// Spatial capability: a settable position, rotation, and scale
///
/// Rotation is expressed as per-axis Euler angles in radians. The per-axis
/// setters are what property panel fields map onto.
pub trait Transformable {
    /// Current position
    fn position(&self) -> Vec3;

    /// Replace the position
    fn set_position(&mut self, position: Vec3);

    /// Current Euler rotation in radians
    fn rotation(&self) -> Vec3;

    /// Replace the rotation (radians)
    fn set_rotation(&mut self, rotation: Vec3);

    /// Current scale factors
    fn scale(&self) -> Vec3;

    /// Replace the scale factors
    fn set_scale(&mut self, scale: Vec3);

    /// Write a single position component
    fn set_position_axis(&mut self, axis: Axis, value: f32) {
        let mut position = self.position();
        axis.set_component(&mut position, value);
        self.set_position(position);
    }

    /// Write a single rotation component (radians)
    fn set_rotation_axis(&mut self, axis: Axis, value: f32) {
        let mut rotation = self.rotation();
        axis.set_component(&mut rotation, value);
        self.set_rotation(rotation);
    }

    /// Write a single scale component
    fn set_scale_axis(&mut self, axis: Axis, value: f32) {
        let mut scale = self.scale();
        axis.set_component(&mut scale, value);
        self.set_scale(scale);
    }
}

/// Paint capability: a material with a base color, opacity, and transparency flag
pub trait Paintable {
    /// Current base color
    fn base_color(&self) -> Color;

    /// Replace the base color
    fn set_base_color(&mut self, color: Color);

    /// Current opacity scalar
    fn opacity(&self) -> f32;

    /// Replace the opacity scalar
    fn set_opacity(&mut self, opacity: f32);

    /// Whether alpha blending is enabled
    fn is_transparent(&self) -> bool;

    /// Enable or disable alpha blending
    fn set_transparent(&mut self, transparent: bool);
}

/// A renderable scene object
///
/// Every renderable is transformable; the paint capability is optional and
/// queried explicitly. A renderable is "mesh-like" exactly when
/// [`Renderable::paintable`] returns `Some`.
pub trait Renderable: Transformable {
    /// Query the paint capability, if this renderable has a material
    fn paintable(&self) -> Option<&dyn Paintable> {
        None
    }

    /// Mutable variant of [`Renderable::paintable`]
    fn paintable_mut(&mut self) -> Option<&mut dyn Paintable> {
        None
    }
}

/// Shared handle to an externally-owned renderable
///
/// The registry stores these by reference, never constructing or destroying
/// the underlying object. Single-threaded interior mutability matches the
/// run-to-completion event dispatch the editor operates under.
pub type SharedRenderable = Rc<RefCell<dyn Renderable>>;

/// Wrap a renderable in a shared handle
pub fn shared<R: Renderable + 'static>(renderable: R) -> SharedRenderable {
    Rc::new(RefCell::new(renderable))
}

/// Identity comparison for shared renderables
///
/// Selection is a reference into the set of registered renderables, so
/// "is this the selection" is pointer identity, not structural equality.
pub fn same_renderable(a: &SharedRenderable, b: &SharedRenderable) -> bool {
    Rc::ptr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::objects::{MeshObject, Primitive};

    #[test]
    fn test_identity_comparison() {
        let a = shared(MeshObject::new(Primitive::Cube));
        let b = shared(MeshObject::new(Primitive::Cube));
        let a_again = a.clone();

        assert!(same_renderable(&a, &a_again));
        assert!(!same_renderable(&a, &b));
    }

    #[test]
    fn test_axis_setters_touch_single_component() {
        let mut mesh = MeshObject::new(Primitive::Sphere);
        mesh.set_position(Vec3::new(1.0, 2.0, 3.0));

        mesh.set_position_axis(Axis::Z, 9.0);

        assert_eq!(mesh.position(), Vec3::new(1.0, 2.0, 9.0));
    }
}
