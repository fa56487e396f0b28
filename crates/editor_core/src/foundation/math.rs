//! Math utilities and types
//!
//! Provides the fundamental math types used by the scene editor.

pub use nalgebra::{Matrix4, Rotation3, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// A single axis of a 3D vector
///
/// Property panels edit one component at a time; this names which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X component
    X,
    /// Y component
    Y,
    /// Z component
    Z,
}

impl Axis {
    /// Get all axes in component order
    pub const fn all() -> &'static [Axis] {
        &[Axis::X, Axis::Y, Axis::Z]
    }

    /// Read this axis' component from a vector
    pub fn component(self, v: &Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Write this axis' component of a vector
    pub fn set_component(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
    }

    /// Lowercase label used in panel field names
    pub const fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Transform representing position, rotation, and scale
///
/// Rotation is stored as per-axis Euler angles in radians (applied X, then Y,
/// then Z), matching how property panels edit orientation one axis at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Euler rotation angles in radians
    pub rotation: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: Set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set rotation from Euler angles (radians)
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Builder pattern: Set scale (uniform)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        let rotation =
            Rotation3::from_euler_angles(self.rotation.x, self.rotation.y, self.rotation.z);

        Mat4::new_translation(&self.position)
            * rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_identity_transform() {
        let transform = Transform::identity();

        assert_eq!(transform.position, Vec3::zeros());
        assert_eq!(transform.rotation, Vec3::zeros());
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(transform.to_matrix(), Mat4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn test_axis_component_access() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(Axis::X.component(&v), 1.0);
        assert_eq!(Axis::Y.component(&v), 2.0);
        assert_eq!(Axis::Z.component(&v), 3.0);

        Axis::Y.set_component(&mut v, 5.0);
        assert_eq!(v, Vec3::new(1.0, 5.0, 3.0));
    }

    #[test]
    fn test_matrix_applies_translation() {
        let transform = Transform::from_position(Vec3::new(2.0, -1.0, 4.0));
        let point = transform.to_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);

        assert_relative_eq!(point.x, 2.0, epsilon = EPSILON);
        assert_relative_eq!(point.y, -1.0, epsilon = EPSILON);
        assert_relative_eq!(point.z, 4.0, epsilon = EPSILON);
    }

    #[test]
    fn test_matrix_applies_rotation_before_translation() {
        // 90 degrees around Y maps +X onto -Z
        let transform = Transform::identity()
            .with_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        let rotated = transform.to_matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);

        assert_relative_eq!(rotated.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(rotated.z, -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_non_uniform_scale() {
        let transform = Transform::identity().with_scale(Vec3::new(2.0, 3.0, 4.0));
        let scaled = transform.to_matrix() * Vec4::new(1.0, 1.0, 1.0, 1.0);

        assert_relative_eq!(scaled.x, 2.0, epsilon = EPSILON);
        assert_relative_eq!(scaled.y, 3.0, epsilon = EPSILON);
        assert_relative_eq!(scaled.z, 4.0, epsilon = EPSILON);
    }
}
