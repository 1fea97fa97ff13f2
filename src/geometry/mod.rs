pub mod transform;

pub use transform::{RigidTransform, TransformPoint};
