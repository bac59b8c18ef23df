pub mod hsv;

pub use hsv::hsv_to_rgb;
