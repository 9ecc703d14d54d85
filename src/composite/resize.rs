use image::{
    imageops::{self, FilterType},
    ImageBuffer, Rgba,
};
use tracing::info;

use crate::raster::Canvas;

/// Resample `overlay` to exactly `target`'s dimensions.
///
/// Same-size input is returned as a plain copy. Otherwise the overlay is
/// stretched with Lanczos3, without preserving its aspect ratio.
pub fn resize_to_match(overlay: &Canvas, target: &Canvas) -> Canvas {
    resize_to(overlay, target.dimensions())
}

/// Resample `canvas` to `(width, height)` with Lanczos3
///
/// Filtering runs on premultiplied alpha, so the color of fully transparent
/// pixels never bleeds into their visible neighbours.
pub fn resize_to(canvas: &Canvas, (width, height): (u32, u32)) -> Canvas {
    if canvas.dimensions() == (width, height) {
        return canvas.clone();
    }

    let premultiplied: ImageBuffer<Rgba<f32>, Vec<f32>> =
        ImageBuffer::from_fn(canvas.width(), canvas.height(), |x, y| {
            Rgba(premultiply(canvas.get_pixel(x, y)))
        });
    let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    info!(
        "Resized overlay from {}x{} to {}x{}",
        canvas.width(),
        canvas.height(),
        width,
        height
    );

    Canvas::from_fn(width, height, |x, y| unpremultiply(resized.get_pixel(x, y).0))
}

fn premultiply([r, g, b, a]: [u8; 4]) -> [f32; 4] {
    let alpha = a as f32 / 255.0;
    [
        r as f32 / 255.0 * alpha,
        g as f32 / 255.0 * alpha,
        b as f32 / 255.0 * alpha,
        alpha,
    ]
}

fn unpremultiply([r, g, b, a]: [f32; 4]) -> [u8; 4] {
    let alpha = to_channel(a);
    if alpha == 0 {
        return [0, 0, 0, 0];
    }
    [to_channel(r / a), to_channel(g / a), to_channel(b / a), alpha]
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keying::{classify, PixelClass};

    #[test]
    fn test_matching_dimensions_is_noop() {
        let overlay = Canvas::from_fn(4, 4, |x, y| [x as u8, y as u8, 0, 255]);
        let target = Canvas::new_filled(4, 4, [255, 0, 0, 255]);

        let resized = resize_to_match(&overlay, &target);
        assert_eq!(resized, overlay);
    }

    #[test]
    fn test_output_takes_target_dimensions() {
        let target = Canvas::new_filled(7, 5, [0, 0, 0, 255]);
        for (w, h) in [(1, 1), (3, 9), (7, 5), (20, 2), (64, 64)] {
            let overlay = Canvas::new_filled(w, h, [255, 255, 255, 255]);
            assert_eq!(resize_to_match(&overlay, &target).dimensions(), (7, 5));
        }
    }

    #[test]
    fn test_uniform_color_survives_resampling() {
        let overlay = Canvas::new_filled(8, 8, [255, 255, 255, 255]);
        let resized = resize_to(&overlay, (16, 4));

        assert_eq!(resized.dimensions(), (16, 4));
        // Lanczos weights are normalized, so a flat field stays flat up to rounding
        assert!(resized.pixels().all(|(_, _, p)| p.iter().all(|&c| c >= 254)));
    }

    #[test]
    fn test_transparent_pixels_do_not_tint_neighbours() {
        // Invisible white next to opaque black, as exported by some editors
        let overlay = Canvas::from_fn(8, 1, |x, _| {
            if x < 4 {
                [255, 255, 255, 0]
            } else {
                [0, 0, 0, 255]
            }
        });
        let resized = resize_to(&overlay, (2, 1));

        for (_, _, pixel) in resized.pixels() {
            assert_eq!(classify(pixel), PixelClass::Background, "pixel {:?}", pixel);
        }
    }

    #[test]
    fn test_flat_color_survives_varying_alpha() {
        let overlay = Canvas::from_fn(6, 6, |x, _| {
            if x < 3 {
                [200, 40, 10, 200]
            } else {
                [200, 40, 10, 100]
            }
        });
        let resized = resize_to(&overlay, (12, 12));

        for (_, _, [r, g, b, a]) in resized.pixels() {
            assert!(a > 0);
            assert!((r as i32 - 200).abs() <= 2, "red {}", r);
            assert!((g as i32 - 40).abs() <= 2, "green {}", g);
            assert!((b as i32 - 10).abs() <= 2, "blue {}", b);
        }
    }
}
