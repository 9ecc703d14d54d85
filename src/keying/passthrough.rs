use crate::keying::KeyMode;

/// Keeps foreground pixels exactly as they are, alpha included.
///
/// Meant for overlays that carry their own color or gradient.
pub struct PassthroughMode;

impl PassthroughMode {
    pub const NAME: &'static str = "passthrough";

    pub fn new() -> Self {
        Self
    }
}

impl Default for PassthroughMode {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMode for PassthroughMode {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Key out near-black pixels and keep everything else unchanged"
    }

    fn foreground(&self, pixel: [u8; 4]) -> [u8; 4] {
        pixel
    }
}
