use crate::keying::KeyMode;

/// Forces every foreground pixel to opaque white.
///
/// Meant for overlays that are a black and white text mask, where any pixel
/// that is not near-black belongs to the glyphs.
pub struct WhiteMode;

impl WhiteMode {
    pub const NAME: &'static str = "white";

    pub fn new() -> Self {
        Self
    }
}

impl Default for WhiteMode {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMode for WhiteMode {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Key out near-black pixels and force everything else to opaque white"
    }

    fn foreground(&self, _pixel: [u8; 4]) -> [u8; 4] {
        [255, 255, 255, 255]
    }
}
