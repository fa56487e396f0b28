//! Derived display values for the properties panel
//!
//! The registry stores radians and float colors; panels display degrees, hex
//! strings, and percentages. [`PropertySheet`] captures the current selection
//! into those display forms so any front-end can render it without touching
//! the renderable directly.
//!
//! Input widget bounds live here too. They are advisory: the store writes
//! values through unclamped, and the presentation layer applies these limits
//! before calling it.

use crate::scene::{same_renderable, SceneRegistry};

/// Smallest scale value the scale input widget offers
///
/// Advisory only; the registry accepts smaller (or negative) values.
pub const MIN_SCALE: f32 = 0.1;

/// Step size of the opacity slider widget
pub const OPACITY_STEP: f32 = 0.01;

/// Clamp a scale field input to the widget's lower bound
///
/// Presentation code applies this before calling
/// [`SceneRegistry::update_object_scale`]; the store itself never clamps.
pub fn clamp_scale_input(value: f32) -> f32 {
    value.max(MIN_SCALE)
}

/// Snapshot of the current selection, in display form
///
/// Captured synchronously from the registry; the panel re-captures after
/// every mutation rather than holding onto stale values.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySheet {
    /// Display name of the selection, if it is a registered entry
    pub name: Option<String>,

    /// Position components
    pub position: [f32; 3],

    /// Rotation components, converted to degrees for display
    pub rotation_degrees: [f32; 3],

    /// Scale components
    pub scale: [f32; 3],

    /// Base color as a lowercase `#rrggbb` string; `None` for non-mesh selections
    pub color_hex: Option<String>,

    /// Opacity scalar; `None` for non-mesh selections
    pub opacity: Option<f32>,
}

impl PropertySheet {
    /// Capture the current selection's properties
    ///
    /// Returns `None` when nothing is selected, in which case the panel
    /// renders nothing.
    pub fn capture(registry: &SceneRegistry) -> Option<Self> {
        let selected = registry.selected_object()?;

        let name = registry
            .objects()
            .iter()
            .find(|entry| same_renderable(&entry.renderable, selected))
            .map(|entry| entry.name.clone());

        let renderable = selected.borrow();
        let position = renderable.position();
        let rotation = renderable.rotation();
        let scale = renderable.scale();

        let (color_hex, opacity) = match renderable.paintable() {
            Some(material) => (Some(material.base_color().to_hex()), Some(material.opacity())),
            None => (None, None),
        };

        Some(Self {
            name,
            position: [position.x, position.y, position.z],
            rotation_degrees: [
                rotation.x.to_degrees(),
                rotation.y.to_degrees(),
                rotation.z.to_degrees(),
            ],
            scale: [scale.x, scale.y, scale.z],
            color_hex,
            opacity,
        })
    }

    /// Opacity as a rounded percentage, the way the slider labels it
    pub fn opacity_percent(&self) -> Option<i32> {
        self.opacity.map(|opacity| (opacity * 100.0).round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::Color;
    use crate::foundation::math::Axis;
    use crate::scene::{shared, EmptyObject, MeshObject, Primitive};
    use approx::assert_relative_eq;

    #[test]
    fn test_capture_without_selection() {
        let mut registry = SceneRegistry::new();
        registry.add_object(shared(MeshObject::new(Primitive::Cube)), "cube");

        assert!(PropertySheet::capture(&registry).is_none());
    }

    #[test]
    fn test_capture_derives_display_values() {
        let mut registry = SceneRegistry::new();
        let renderable = shared(MeshObject::new(Primitive::Cube));
        registry.add_object(renderable.clone(), "Hero Cube");
        registry.set_selected_object(Some(renderable));

        registry.update_object_rotation(Axis::Y, 45.0);
        registry.update_object_color(Color::from_hex("#FF8000").unwrap());
        registry.update_object_opacity(0.25);

        let sheet = PropertySheet::capture(&registry).unwrap();

        assert_eq!(sheet.name.as_deref(), Some("Hero Cube"));
        assert_relative_eq!(sheet.rotation_degrees[1], 45.0, epsilon = 1e-4);
        assert_eq!(sheet.color_hex.as_deref(), Some("#ff8000"));
        assert_eq!(sheet.opacity_percent(), Some(25));
    }

    #[test]
    fn test_capture_of_non_mesh_selection_has_no_paint_fields() {
        let mut registry = SceneRegistry::new();
        let empty = shared(EmptyObject::new());
        registry.add_object(empty.clone(), "rig");
        registry.set_selected_object(Some(empty));

        let sheet = PropertySheet::capture(&registry).unwrap();

        assert!(sheet.color_hex.is_none());
        assert!(sheet.opacity.is_none());
        assert!(sheet.opacity_percent().is_none());
    }

    #[test]
    fn test_capture_of_unregistered_selection_has_no_name() {
        let mut registry = SceneRegistry::new();
        let stray = shared(MeshObject::new(Primitive::Sphere));
        registry.set_selected_object(Some(stray));

        let sheet = PropertySheet::capture(&registry).unwrap();

        assert!(sheet.name.is_none());
    }

    #[test]
    fn test_scale_input_clamp() {
        assert_relative_eq!(clamp_scale_input(0.01), MIN_SCALE, epsilon = 1e-6);
        assert_relative_eq!(clamp_scale_input(-2.0), MIN_SCALE, epsilon = 1e-6);
        assert_relative_eq!(clamp_scale_input(2.5), 2.5, epsilon = 1e-6);
    }
}
