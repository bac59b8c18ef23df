pub mod complex_fns;
pub mod metric;
pub mod quaternion_fns;

pub use complex_fns::{ComplexFunction, ValueFunction};
pub use metric::MetricFunction;
pub use quaternion_fns::QuaternionFunction;
