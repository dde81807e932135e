use glam::{Mat4, Vec3};

/// Scale, Euler rotation in degrees, and translation of one placed mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vec3,
    pub rotation_degrees: Vec3,
    pub position: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    pub fn new() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation_degrees: Vec3::ZERO,
            position: Vec3::ZERO,
        }
    }

    pub fn from_parts(scale: Vec3, rotation_degrees: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees,
            position,
        }
    }

    /// `T * Rz * Ry * Rx * S`: rotations apply about the origin, X first,
    /// before translation. Scene placements are authored against this order.
    pub fn to_matrix(&self) -> Mat4 {
        let scale = Mat4::from_scale(self.scale);
        let rotation_x = Mat4::from_rotation_x(self.rotation_degrees.x.to_radians());
        let rotation_y = Mat4::from_rotation_y(self.rotation_degrees.y.to_radians());
        let rotation_z = Mat4::from_rotation_z(self.rotation_degrees.z.to_radians());
        let translation = Mat4::from_translation(self.position);
        translation * rotation_z * rotation_y * rotation_x * scale
    }
}
