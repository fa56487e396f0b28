//! Standard material parameters
//!
//! The subset of a PBR material the properties panel can edit, plus the
//! surface parameters carried along for the renderer.

use crate::foundation::color::Color;
use crate::scene::renderable::Paintable;

/// Standard surface material with editable color and opacity
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    /// Base color (albedo)
    pub base_color: Color,

    /// Metallic factor (0.0 = dielectric, 1.0 = metal)
    pub metallic: f32,

    /// Roughness factor (0.0 = mirror, 1.0 = fully rough)
    pub roughness: f32,

    /// Opacity scalar; meaningful for blending only when `transparent` is set
    pub opacity: f32,

    /// Whether the renderer should alpha-blend this material
    pub transparent: bool,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            base_color: Color::WHITE,
            metallic: 0.0,
            roughness: 0.5,
            opacity: 1.0,
            transparent: false,
        }
    }
}

impl StandardMaterial {
    /// Create an opaque material with the given base color
    pub fn with_color(base_color: Color) -> Self {
        Self {
            base_color,
            ..Default::default()
        }
    }

    /// Builder pattern: Set metallic factor
    pub const fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    /// Builder pattern: Set roughness factor
    pub const fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Get the base color and opacity as an RGBA array
    pub const fn to_rgba(&self) -> [f32; 4] {
        self.base_color.to_array(self.opacity)
    }
}

impl Paintable for StandardMaterial {
    fn base_color(&self) -> Color {
        self.base_color
    }

    fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn is_transparent(&self) -> bool {
        self.transparent
    }

    fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_is_opaque_white() {
        let material = StandardMaterial::default();

        assert_eq!(material.base_color, Color::WHITE);
        assert_eq!(material.opacity, 1.0);
        assert!(!material.transparent);
    }

    #[test]
    fn test_rgba_carries_opacity_as_alpha() {
        let mut material = StandardMaterial::with_color(Color::new(0.2, 0.4, 0.6));
        material.opacity = 0.5;

        assert_eq!(material.to_rgba(), [0.2, 0.4, 0.6, 0.5]);
    }
}
