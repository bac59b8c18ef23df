pub mod grid;

pub use grid::{
    render_complex, render_metric, render_quaternion, PixelBuffer, RenderParams,
    DEFAULT_COMPLEX_SCALE, DEFAULT_QUATERNION_SCALE,
};
