// THEORY:
// This file is the main entry point for the `vibe_core` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (the capture loop and the
// broadcast/orchestration layer around it).
//
// The primary goal is to export the `MotionEngine` and its associated data
// structures (`MotionSample`, `HeatmapGrid`, `FrameView`) as the clean,
// high-level interface for the engine. The internal building blocks
// (`core_modules`) stay encapsulated so the caller only ever sees
// "frame in, heatmap and mean energy out."

pub mod core_modules;
pub mod engine;
pub mod error;

pub use core_modules::frame::FrameView;
pub use core_modules::heatmap::HeatmapGrid;
pub use engine::{MotionEngine, MotionSample};
pub use error::{MotionError, MotionResult};
