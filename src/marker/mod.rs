//! Visualization marker message model
//!
//! Mirrors the fields of a `visualization_msgs/Marker` that the slice-limit
//! builder fills in. The structs are plain data so callers can convert them
//! into whatever transport message they publish.

pub mod json;
pub mod slice_limits;

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

pub use json::{markers_to_json_string, write_markers_json};
pub use slice_limits::{TRIANGLE_LIST_INDICES, plane_corners, slice_limits_to_marker};

/// Only one marker per namespace is ever emitted, so the id is fixed
pub const MARKER_ID: i32 = 0;
/// Overall translucency of the surface
pub const SURFACE_ALPHA: f32 = 0.25;
/// Alpha of every per-vertex color
pub const VERTEX_ALPHA: f32 = 0.8;

/// Stamp attached to a marker header, passed through untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub sec: i32,
    pub nanosec: u32,
}

impl Timestamp {
    pub fn new(sec: i32, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }

    /// Current wall-clock time. Falls back to zero if the clock is before the epoch.
    pub fn now() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            sec: elapsed.as_secs() as i32,
            nanosec: elapsed.subsec_nanos(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub frame_id: String,
    pub stamp: Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Scale {
    pub const UNIT: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
}

impl Default for Scale {
    fn default() -> Self {
        Self::UNIT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerType {
    /// Consecutive vertex triples form independent triangles
    TriangleList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerAction {
    /// Add, or replace a marker with the same namespace and id
    Add,
}

/// A renderable marker: a triangle list with one color per vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub header: Header,
    pub ns: String,
    pub id: i32,
    #[serde(rename = "type")]
    pub marker_type: MarkerType,
    pub action: MarkerAction,
    pub scale: Scale,
    pub color: ColorRgba,
    /// Vertices, three per triangle
    pub points: Vec<Point>,
    /// Parallel to `points`
    pub colors: Vec<ColorRgba>,
}

impl Marker {
    /// Number of triangles described by `points`
    pub fn triangle_count(&self) -> usize {
        self.points.len() / 3
    }
}
