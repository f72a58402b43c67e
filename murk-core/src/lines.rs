//! Decoy line strokes drawn behind and in front of the text layer.

use image::RgbImage;
use imageproc::drawing::draw_line_segment_mut;
use rand::Rng;

use crate::color::Rgb;

/// Draw `count` random line strokes onto `canvas`.
///
/// Each stroke picks its color from a per-line palette of `text_weight`
/// copies of the text color plus one freshly sampled bright color. Mixing
/// the text color in makes pure color filtering useless for separating
/// lines from glyphs; back lines use weight 1, front lines weight 2 so
/// overlapping strokes blend with the text more often. Thickness is
/// uniform in 1..=2 px, endpoints uniform within the canvas.
pub fn draw_lines<R: Rng>(
    canvas: &mut RgbImage,
    count: u32,
    text_color: Rgb,
    text_weight: u32,
    rng: &mut R,
) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    for _ in 0..count {
        let color = if rng.gen_range(0..=text_weight) < text_weight {
            text_color
        } else {
            Rgb::random_bright(rng)
        };
        let thickness = rng.gen_range(1..=2);
        let start = (
            rng.gen_range(0..width) as f32,
            rng.gen_range(0..height) as f32,
        );
        let end = (
            rng.gen_range(0..width) as f32,
            rng.gen_range(0..height) as f32,
        );
        draw_stroke(canvas, start, end, thickness, color);
    }
}

/// Rasterize one stroke as `thickness` adjacent 1 px segments, offset
/// along the minor axis so the stroke thickens instead of lengthening.
fn draw_stroke(
    canvas: &mut RgbImage,
    start: (f32, f32),
    end: (f32, f32),
    thickness: u32,
    color: Rgb,
) {
    let shallow = (end.0 - start.0).abs() >= (end.1 - start.1).abs();
    for offset in 0..thickness {
        let offset = offset as f32;
        let (s, e) = if shallow {
            ((start.0, start.1 + offset), (end.0, end.1 + offset))
        } else {
            ((start.0 + offset, start.1), (end.0 + offset, end.1))
        };
        draw_line_segment_mut(canvas, s, e, color.into());
    }
}
