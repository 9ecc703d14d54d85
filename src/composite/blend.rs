use crate::error::{CompositeError, Result};
use crate::raster::Canvas;

/// Porter-Duff source-over of `overlay` onto `background`.
///
/// Both canvases must have the same dimensions; call
/// [`resize_to_match`](crate::composite::resize_to_match) first. A mismatch is
/// reported as [`CompositeError::DimensionMismatch`] rather than cropped or padded.
pub fn composite_over(background: &Canvas, overlay: &Canvas) -> Result<Canvas> {
    if background.dimensions() != overlay.dimensions() {
        return Err(CompositeError::DimensionMismatch {
            background: background.dimensions(),
            overlay: overlay.dimensions(),
        }
        .into());
    }

    Ok(Canvas::from_fn(background.width(), background.height(), |x, y| {
        blend_pixel(background.get_pixel(x, y), overlay.get_pixel(x, y))
    }))
}

/// Source-over for a single pixel, on straight (non-premultiplied) RGBA.
///
/// `a_out = a_s + a_d (1 - a_s)` and
/// `c_out = (c_s a_s + c_d a_d (1 - a_s)) / a_out`, with everything zero when
/// `a_out` is zero.
pub fn blend_pixel(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let src_alpha = normalize(src[3]);
    let dst_alpha = normalize(dst[3]);
    let dst_weight = dst_alpha * (1.0 - src_alpha);
    let out_alpha = src_alpha + dst_weight;

    if out_alpha <= 0.0 {
        return [0, 0, 0, 0];
    }

    let channel = |i: usize| {
        let value = (normalize(src[i]) * src_alpha + normalize(dst[i]) * dst_weight) / out_alpha;
        denormalize(value)
    };

    [channel(0), channel(1), channel(2), denormalize(out_alpha)]
}

fn normalize(value: u8) -> f32 {
    value as f32 / 255.0
}

fn denormalize(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompositorError;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn test_opaque_source_replaces_destination() {
        assert_eq!(blend_pixel(RED, [12, 34, 56, 255]), [12, 34, 56, 255]);
    }

    #[test]
    fn test_transparent_source_keeps_destination() {
        assert_eq!(blend_pixel(RED, [0, 0, 0, 0]), RED);
        assert_eq!(blend_pixel([9, 8, 7, 100], [255, 255, 255, 0]), [9, 8, 7, 100]);
    }

    #[test]
    fn test_half_alpha_over_opaque() {
        // 128/255 white over opaque red
        assert_eq!(blend_pixel(RED, [255, 255, 255, 128]), [255, 128, 128, 255]);
    }

    #[test]
    fn test_translucent_over_transparent_keeps_source_color() {
        assert_eq!(blend_pixel([0, 0, 0, 0], [200, 100, 50, 128]), [200, 100, 50, 128]);
    }

    #[test]
    fn test_both_transparent() {
        assert_eq!(blend_pixel([40, 40, 40, 0], [90, 90, 90, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_dimension_mismatch_is_reported() {
        let background = Canvas::new_filled(4, 4, RED);
        let overlay = Canvas::new_filled(4, 3, [0, 0, 0, 0]);

        match composite_over(&background, &overlay) {
            Err(CompositorError::Composite(CompositeError::DimensionMismatch {
                background,
                overlay,
            })) => {
                assert_eq!(background, (4, 4));
                assert_eq!(overlay, (4, 3));
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_composite_is_deterministic() {
        let background = Canvas::from_fn(9, 9, |x, y| [(x * 28) as u8, (y * 28) as u8, 90, 255]);
        let overlay = Canvas::from_fn(9, 9, |x, y| [200, (x * y) as u8, 30, ((x + y) * 14) as u8]);

        let first = composite_over(&background, &overlay).unwrap();
        let second = composite_over(&background, &overlay).unwrap();

        assert_eq!(first.as_rgba_bytes(), second.as_rgba_bytes());
        assert_eq!(first.dimensions(), (9, 9));
    }
}
