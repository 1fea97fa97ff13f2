use super::SliceLimitKind;
use crate::geometry::RigidTransform;

/// A square slice-limit surface to visualize
///
/// The square lies in the x/y plane of its own plane-body frame, centered on
/// the origin. `height` is the world z every vertex is placed at, independent
/// of the translation carried by `transform`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlicePlane<T = RigidTransform> {
    /// Plane-body frame to global frame
    pub transform: T,
    /// Full side length of the square
    pub side_length: f32,
    /// World z of the surface
    pub height: f32,
    pub kind: SliceLimitKind,
}

impl<T> SlicePlane<T> {
    pub fn new(transform: T, side_length: f32, height: f32, kind: SliceLimitKind) -> Self {
        Self {
            transform,
            side_length,
            height,
            kind,
        }
    }
}
