use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 3D vector, also used for Euler rotations (radians, XYZ order).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Vec3) -> f64 {
        (*self - *other).length()
    }

    /// Distance from the world z-axis (length of the xy projection).
    pub fn radial_distance(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Euler angles (XYZ order, radians) orienting a camera at `eye` so that it
/// looks at `target` with the world z-axis up.
///
/// The camera's +Z axis is tracked onto the eye-target direction (a camera
/// views along its -Z axis), matching the orientation a scene host computes
/// when told to aim a camera at a focus point.
pub fn look_at_euler(eye: Vec3, target: Vec3) -> Vec3 {
    let dir = eye - target;
    let len = dir.length();
    if len < 1e-12 {
        return Vec3::zero();
    }
    let rx = (dir.z / len).clamp(-1.0, 1.0).acos();
    let rz = dir.y.atan2(dir.x) + std::f64::consts::FRAC_PI_2;
    Vec3::new(rx, 0.0, rz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_length_and_distance() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((v.length() - 5.0).abs() < 1e-9);
        assert!((v.distance(&Vec3::zero()) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_radial_distance_ignores_height() {
        let v = Vec3::new(3.0, 4.0, 17.0);
        assert!((v.radial_distance() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_look_at_level_camera() {
        // Eye at the target's height: the camera pitches to horizontal.
        let rot = look_at_euler(Vec3::new(5.0, 0.0, 3.0), Vec3::new(0.0, 0.0, 3.0));
        assert!((rot.x - FRAC_PI_2).abs() < 1e-9);
        assert!((rot.y).abs() < 1e-9);
        assert!((rot.z - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_look_at_diagonal() {
        // Eye at 45 degrees above the target.
        let rot = look_at_euler(Vec3::new(8.0, 0.0, 8.0), Vec3::zero());
        assert!((rot.x - FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn test_look_at_straight_down() {
        let rot = look_at_euler(Vec3::new(0.0, 0.0, 10.0), Vec3::zero());
        assert!((rot.x).abs() < 1e-9);
    }

    #[test]
    fn test_look_at_coincident_is_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(look_at_euler(p, p), Vec3::zero());
    }
}
