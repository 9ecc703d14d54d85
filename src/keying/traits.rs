/// Policy applied to overlay pixels that survive the near-black key.
///
/// Background pixels are always replaced with transparent black by
/// [`declassify`](crate::keying::declassify); a mode only decides what a
/// foreground pixel becomes.
pub trait KeyMode: Send + Sync {
    /// Returns the unique name of this mode
    fn name(&self) -> &str;

    /// Returns a human-readable description of this mode
    fn description(&self) -> &str;

    /// Map a foreground pixel (RGBA) to its output value
    fn foreground(&self, pixel: [u8; 4]) -> [u8; 4];
}
