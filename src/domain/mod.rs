pub mod plane;
pub mod slice_limit;

pub use plane::SlicePlane;
pub use slice_limit::SliceLimitKind;
