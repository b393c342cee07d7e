//! Drives the motion engine over synthetic frames and prints one JSON sample
//! per frame, the same shape a broadcast layer would push to subscribers.
//!
//! Run with `cargo run --example heatmap_demo`. Set `RUST_LOG=debug` to see
//! the priming and re-priming events.

use vibe_core::{FrameView, MotionEngine, MotionResult};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const FRAMES: u32 = 24;

/// A black frame with a bright 40x40 square whose position depends on `tick`.
fn synthetic_frame(tick: u32) -> Vec<u8> {
    let mut data = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    let x0 = (tick * 12) % (WIDTH - 40);
    let y0 = (tick * 8) % (HEIGHT - 40);
    for y in y0..y0 + 40 {
        for x in x0..x0 + 40 {
            let base = ((y * WIDTH + x) * 3) as usize;
            data[base] = 255;
            data[base + 1] = 255;
            data[base + 2] = 255;
        }
    }
    data
}

fn main() -> MotionResult<()> {
    use tracing_subscriber::{EnvFilter, fmt};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    let mut engine = MotionEngine::new(8, 8)?;

    for tick in 0..FRAMES {
        let data = synthetic_frame(tick);
        let frame = FrameView::new(&data, WIDTH, HEIGHT)?;
        let sample = engine.process(&frame);

        let payload = serde_json::json!({
            "frame": tick,
            "meanEnergy": sample.mean_energy,
            "heatmap": sample.heatmap.to_nested(),
        });
        println!("{payload}");
    }

    Ok(())
}
