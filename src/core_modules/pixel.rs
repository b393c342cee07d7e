// THEORY:
// The `Pixel` module is the most fundamental unit of the motion engine. It is a
// "dumb" data container for a single packed-RGB sample plus the one heuristic the
// engine needs from it: luminance. Motion differencing is driven by intensity
// change, not hue, so collapsing the three color channels into a single Rec. 601
// luminance value cuts the per-frame comparison cost by roughly 3x while keeping
// the signal the heatmap cares about.
//
// Key architectural principles:
// 1.  **Single-pixel scope**: Nothing here reads neighbors or history. Anything
//     that needs another pixel or another frame lives in higher-level modules.
// 2.  **Dumb container**: `Pixel` holds channel bytes and knows how to summarize
//     itself. It does not know how to compare itself to other pixels.

pub mod pixel {
    pub type Byte = u8;
    pub type Channel = Byte;
    pub type Luminance = f64;

    /// Number of channels in the packed color format the engine accepts.
    pub const CHANNELS: usize = 3;

    /// A "dumb" data container representing a single RGB pixel.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel { red, green, blue }
        }

        /// Rec. 601 luma, in the same 0-255 range as the input channels.
        pub fn luminance(&self) -> Luminance {
            0.299 * self.red as f64 + 0.587 * self.green as f64 + 0.114 * self.blue as f64
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            // Callers feed this through `chunks_exact(CHANNELS)`, so the length
            // invariant holds by construction.
            debug_assert_eq!(bytes.len(), CHANNELS);
            Pixel::new(bytes[0], bytes[1], bytes[2])
        }
    }
}
