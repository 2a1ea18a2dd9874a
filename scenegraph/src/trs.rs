use glam::{Mat4, Quat, Vec3};

/// Translation, rotation and scale kept as separate components.
///
/// Composes to `translate * rotate * scale`: scale is applied first,
/// translation last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trs {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Trs {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        // TRS (Translation * Rotation * Scale)
        let translation = Mat4::from_translation(self.position);
        let rotation = Mat4::from_quat(self.rotation);
        let scale = Mat4::from_scale(self.scale);
        translation * rotation * scale
    }

    /// Blends towards `end` by `t`. Position and scale are lerped, rotation
    /// is slerped along the shorter arc. `t` is not clamped.
    pub fn interpolate(&self, end: &Trs, t: f32) -> Trs {
        // glam's slerp flips `end` onto the near hemisphere itself
        Trs {
            position: self.position.lerp(end.position, t),
            rotation: self.rotation.slerp(end.rotation, t),
            scale: self.scale.lerp(end.scale, t),
        }
    }

    pub fn matrix_between(start: &Trs, end: &Trs, t: f32) -> Mat4 {
        start.interpolate(end, t).to_matrix()
    }
}

impl Default for Trs {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Vec3> for Trs {
    fn from(position: Vec3) -> Self {
        Self::from_position(position)
    }
}

impl From<Quat> for Trs {
    fn from(rotation: Quat) -> Self {
        Self::from_rotation(rotation)
    }
}
