use std::fmt;

use serde::{Deserialize, Serialize};

/// Which bounding surface of the mapping slice a marker represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceLimitKind {
    TopSliceLimit,
    BottomSliceLimit,
    /// Any raw value that is neither of the two limits
    Unknown,
}

impl SliceLimitKind {
    /// Classify a raw numeric kind. Unrecognized codes map to `Unknown`.
    pub fn from_code(code: i32) -> SliceLimitKind {
        match code {
            0 => SliceLimitKind::TopSliceLimit,
            1 => SliceLimitKind::BottomSliceLimit,
            _ => SliceLimitKind::Unknown,
        }
    }

    /// Classify a textual kind such as `"top"` or `"bottom_slice_limit"`
    pub fn from_tag(tag: &str) -> SliceLimitKind {
        match tag {
            "top" | "top_slice_limit" => SliceLimitKind::TopSliceLimit,
            "bottom" | "bottom_slice_limit" => SliceLimitKind::BottomSliceLimit,
            _ => SliceLimitKind::Unknown,
        }
    }

    /// Namespace label used for markers of this kind
    pub fn label(self) -> &'static str {
        match self {
            SliceLimitKind::TopSliceLimit => "top_slice_limit",
            SliceLimitKind::BottomSliceLimit => "bottom_slice_limit",
            SliceLimitKind::Unknown => "unknown_type",
        }
    }
}

impl fmt::Display for SliceLimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
