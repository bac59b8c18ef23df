pub mod complex;
pub mod quaternion;

pub use complex::Complex;
pub use quaternion::Quaternion;
#[allow(unused_imports)]
pub use quaternion::{lerp, nlerp, rotate, slerp};
