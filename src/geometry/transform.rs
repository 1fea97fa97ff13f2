use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Anything that can map a point from one frame into another
pub trait TransformPoint {
    /// Apply rotation, then translation, to `point`
    fn transform_point(&self, point: Vec3) -> Vec3;
}

/// A rotation followed by a translation, without scale or shear
///
/// Named after the frames it maps between, e.g. `T_G_PB` maps points from
/// the plane-body frame `PB` into the global frame `G`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RigidTransform {
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    /// `rotation` is normalized so the result stays rigid
    pub fn from_rotation_translation(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation: rotation.normalize(),
            translation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            rotation: Quat::IDENTITY,
            translation,
        }
    }

    /// Rotation of `yaw` radians about +z, then `translation`
    pub fn from_yaw_translation(yaw: f32, translation: Vec3) -> Self {
        Self {
            rotation: Quat::from_rotation_z(yaw),
            translation,
        }
    }

    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            rotation,
            translation: -(rotation * self.translation),
        }
    }

    /// `self * other`: apply `other` first, then `self`
    pub fn mul_transform(&self, other: &RigidTransform) -> Self {
        Self {
            rotation: (self.rotation * other.rotation).normalize(),
            translation: self.rotation * other.translation + self.translation,
        }
    }

    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rotation, self.translation)
    }
}

impl TransformPoint for RigidTransform {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }
}

impl TransformPoint for Affine3A {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_point3(point)
    }
}

impl<T: TransformPoint + ?Sized> TransformPoint for &T {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        (**self).transform_point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(RigidTransform::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn test_yaw_then_translate() {
        let tf = RigidTransform::from_yaw_translation(FRAC_PI_2, Vec3::new(10.0, 0.0, 0.0));
        // +x rotates onto +y before the shift
        assert_close(tf.transform_point(Vec3::X), Vec3::new(10.0, 1.0, 0.0));
    }

    #[test]
    fn test_inverse_round_trip() {
        let tf = RigidTransform::from_rotation_translation(
            Quat::from_euler(glam::EulerRot::XYZ, 0.3, -0.2, 1.1),
            Vec3::new(1.0, 2.0, 3.0),
        );
        let p = Vec3::new(-4.0, 0.5, 2.0);
        assert_close(tf.inverse().transform_point(tf.transform_point(p)), p);
    }

    #[test]
    fn test_composition_order() {
        let a = RigidTransform::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let b = RigidTransform::from_yaw_translation(FRAC_PI_2, Vec3::ZERO);
        let p = Vec3::X;
        assert_close(
            a.mul_transform(&b).transform_point(p),
            a.transform_point(b.transform_point(p)),
        );
    }

    #[test]
    fn test_matches_affine() {
        let tf = RigidTransform::from_yaw_translation(0.7, Vec3::new(2.0, -1.0, 4.0));
        let p = Vec3::new(0.5, 0.25, -1.0);
        assert_close(tf.to_affine().transform_point(p), tf.transform_point(p));
    }
}
