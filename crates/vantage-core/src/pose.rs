use serde::{Deserialize, Serialize};

use crate::math::{look_at_euler, Vec3};

/// A rigid pose: position plus Euler rotation (XYZ order, radians).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// A pose at `position` with identity rotation.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::zero(),
        }
    }

    /// A camera pose at `position` oriented to look at `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            rotation: look_at_euler(position, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_at_has_identity_rotation() {
        let p = Pose::at(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.rotation, Vec3::zero());
    }

    #[test]
    fn test_looking_at_matches_look_at_euler() {
        let eye = Vec3::new(8.0, 0.0, 8.0);
        let p = Pose::looking_at(eye, Vec3::zero());
        assert_eq!(p.position, eye);
        assert_eq!(p.rotation, look_at_euler(eye, Vec3::zero()));
    }
}
