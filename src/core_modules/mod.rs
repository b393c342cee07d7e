pub mod frame;
pub mod heatmap;
pub mod luminance;
pub mod pixel;
