use glam::Vec3;
use tracing::debug;

use super::{
    ColorRgba, Header, MARKER_ID, Marker, MarkerAction, MarkerType, Point, SURFACE_ALPHA, Scale,
    Timestamp, VERTEX_ALPHA,
};
use crate::domain::{SliceLimitKind, SlicePlane};
use crate::geometry::TransformPoint;

/// Corner indices of the two triangles ([0,1,2], [1,2,3]) covering the square
pub const TRIANGLE_LIST_INDICES: [usize; 6] = [0, 1, 2, 1, 2, 3];

const TOP_COLOR: ColorRgba = ColorRgba::new(1.0, 0.0, 0.0, VERTEX_ALPHA);
const BOTTOM_COLOR: ColorRgba = ColorRgba::new(0.0, 1.0, 0.0, VERTEX_ALPHA);

/// Corners of a square of `side_length` centered on the plane-body origin, z = 0
pub fn plane_corners(side_length: f32) -> [Vec3; 4] {
    let half = side_length / 2.0;
    [
        Vec3::new(half, half, 0.0),
        Vec3::new(-half, half, 0.0),
        Vec3::new(half, -half, 0.0),
        Vec3::new(-half, -half, 0.0),
    ]
}

/// Move a plane-body point into the global frame and pin it at `height`
///
/// Only x/y of the transformed point survive. The z the transform produces is
/// dropped, since the slice height is expressed in the global frame.
pub fn project_to_height<T: TransformPoint + ?Sized>(
    transform_g_pb: &T,
    point_pb: Vec3,
    height: f32,
) -> Point {
    let point_g = transform_g_pb.transform_point(point_pb);
    Point::new(point_g.x as f64, point_g.y as f64, height as f64)
}

/// Vertex color for a slice limit. Everything that is not the top limit is green.
pub fn vertex_color(kind: SliceLimitKind) -> ColorRgba {
    match kind {
        SliceLimitKind::TopSliceLimit => TOP_COLOR,
        SliceLimitKind::BottomSliceLimit | SliceLimitKind::Unknown => BOTTOM_COLOR,
    }
}

/// Build a translucent square marker showing one limit of the mapping slice
///
/// # Arguments
/// * `transform_g_pb` - Plane-body frame to global frame
/// * `side_length` - Full side length of the square
/// * `timestamp` - Stamp copied into the header
/// * `global_frame_id` - Frame the marker is expressed in, copied into the header
/// * `height` - Global z of every vertex
/// * `kind` - Selects namespace and color
///
/// Never fails: a non-positive side length yields a degenerate or mirrored
/// square and an unrecognized kind gets the `unknown_type` namespace.
pub fn slice_limits_to_marker<T: TransformPoint + ?Sized>(
    transform_g_pb: &T,
    side_length: f32,
    timestamp: Timestamp,
    global_frame_id: &str,
    height: f32,
    kind: SliceLimitKind,
) -> Marker {
    if side_length <= 0.0 {
        debug!(side_length, %kind, "slice limit marker has a non-positive side length");
    }

    let corners_pb = plane_corners(side_length);
    let color = vertex_color(kind);

    let points: Vec<Point> = TRIANGLE_LIST_INDICES
        .iter()
        .map(|&i| project_to_height(transform_g_pb, corners_pb[i], height))
        .collect();
    let colors = vec![color; points.len()];

    Marker {
        header: Header {
            frame_id: global_frame_id.to_string(),
            stamp: timestamp,
        },
        ns: kind.label().to_string(),
        id: MARKER_ID,
        marker_type: MarkerType::TriangleList,
        action: MarkerAction::Add,
        scale: Scale::UNIT,
        color: ColorRgba {
            a: SURFACE_ALPHA,
            ..Default::default()
        },
        points,
        colors,
    }
}

impl<T: TransformPoint> SlicePlane<T> {
    /// Marker for this plane, see [`slice_limits_to_marker`]
    pub fn to_marker(&self, timestamp: Timestamp, global_frame_id: &str) -> Marker {
        slice_limits_to_marker(
            &self.transform,
            self.side_length,
            timestamp,
            global_frame_id,
            self.height,
            self.kind,
        )
    }
}
