use image::{Rgba, RgbaImage};

use crate::error::IconError;

// Material Design palette shared by every render
pub const GREEN: Rgba<u8> = Rgba([76, 175, 80, 255]); // Green 500, background / basic level
pub const LIGHT_GREEN: Rgba<u8> = Rgba([139, 195, 74, 255]); // Light Green 500, first dot
pub const RED: Rgba<u8> = Rgba([244, 67, 54, 255]); // Red 500, good level
pub const PURPLE: Rgba<u8> = Rgba([156, 39, 176, 255]); // Purple 500, excellent level
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// How the checkmark strokes are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStrokes {
    /// Whole mark drawn in the stem color.
    Single,
    /// Stem and tip drawn in their own colors; the tip owns the corner.
    TwoTone,
}

/// Style knobs that distinguish the icon design iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    pub check_scale: f32, // checkmark span as a fraction of the canvas
    pub strokes: CheckStrokes,
    pub stem_color: Rgba<u8>,
    pub tip_color: Rgba<u8>,
    pub rounded_caps: bool, // filled circles smoothing the stroke ends
    pub dot_colors: [Rgba<u8>; 3],
}

impl Default for IconStyle {
    /// The final rounded design: two-tone checkmark, smooth caps,
    /// one dot per habit level.
    fn default() -> Self {
        IconStyle {
            check_scale: 0.78,
            strokes: CheckStrokes::TwoTone,
            stem_color: RED,
            tip_color: PURPLE,
            rounded_caps: true,
            dot_colors: [LIGHT_GREEN, RED, PURPLE],
        }
    }
}

/// Geometric landmarks of one icon, all fixed fractions of `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmarks {
    pub center: (f32, f32),
    pub disc_radius: f32,
    pub left: (f32, f32),
    pub corner: (f32, f32),
    pub right: (f32, f32),
    pub stroke_width: f32,
    pub cap_radius: f32,
    pub dots: [(f32, f32); 3],
    pub dot_radius: f32,
}

pub fn landmarks(size: u32, style: &IconStyle) -> Landmarks {
    let s = size as f32;
    let cx = s * 0.5;
    let cy = s * 0.5;
    let margin = s * 0.05;
    let check = s * style.check_scale;
    // Floor of 4 px keeps the mark legible at the smallest densities
    let stroke_width = (size / 18).max(4) as f32;
    let dot_y = s * 0.85;
    let dot_dx = s * 0.08;
    Landmarks {
        center: (cx, cy),
        disc_radius: s * 0.5 - margin,
        left: (cx - check * 0.3, cy),
        corner: (cx - check * 0.1, cy + check * 0.2),
        right: (cx + check * 0.35, cy - check * 0.25),
        stroke_width,
        cap_radius: stroke_width * 0.5,
        dots: [(cx - dot_dx, dot_y), (cx, dot_y), (cx + dot_dx, dot_y)],
        dot_radius: s * 0.03,
    }
}

/// Render one checkmark launcher icon: green background disc, two-tone
/// checkmark, three status dots, transparent everywhere else.
///
/// Deterministic: the same `size` and `style` always produce a
/// bit-identical image.
pub fn generate_icon(size: u32, style: &IconStyle) -> Result<RgbaImage, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }

    let lm = landmarks(size, style);
    let (stem_color, tip_color) = match style.strokes {
        CheckStrokes::Single => (style.stem_color, style.stem_color),
        CheckStrokes::TwoTone => (style.stem_color, style.tip_color),
    };
    let half_stroke = lm.stroke_width * 0.5;

    let mut img = RgbaImage::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        let mut color = TRANSPARENT;

        // Background disc, painted first so the strokes land on top
        if dist(px, py, lm.center) <= lm.disc_radius {
            color = GREEN;
        }

        // Checkmark stem, with a cap at its free end
        if dist_to_segment(px, py, lm.left, lm.corner) <= half_stroke
            || (style.rounded_caps && dist(px, py, lm.left) <= lm.cap_radius)
        {
            color = stem_color;
        }

        // Checkmark tip, painted after the stem so it owns the shared
        // corner; caps at the free end and over the corner join
        if dist_to_segment(px, py, lm.corner, lm.right) <= half_stroke
            || (style.rounded_caps
                && (dist(px, py, lm.right) <= lm.cap_radius
                    || dist(px, py, lm.corner) <= lm.cap_radius))
        {
            color = tip_color;
        }

        // Three status dots along the bottom
        for (dot, dot_color) in lm.dots.iter().zip(style.dot_colors) {
            if dist(px, py, *dot) <= lm.dot_radius {
                color = dot_color;
            }
        }

        *pixel = color;
    }
    Ok(img)
}

/// Clip an icon's corners to the inscribed circle of its canvas.
///
/// Pixels outside the circle become fully transparent; pixels inside
/// keep their color and alpha unchanged.
pub fn round_variant(icon: &RgbaImage) -> RgbaImage {
    let (w, h) = icon.dimensions();
    let center = (w as f32 * 0.5, h as f32 * 0.5);
    let radius = w.min(h) as f32 * 0.5;
    let mut out = icon.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        if dist(x as f32 + 0.5, y as f32 + 0.5, center) > radius {
            *pixel = TRANSPARENT;
        }
    }
    out
}

#[inline]
fn dist(px: f32, py: f32, to: (f32, f32)) -> f32 {
    let dx = px - to.0;
    let dy = py - to.1;
    (dx * dx + dy * dy).sqrt()
}

fn dist_to_segment(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (ax, ay) = a;
    let (bx, by) = b;
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return dist(px, py, a);
    }
    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    dist(px, py, (ax + abx * t, ay + aby * t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        let style = IconStyle::default();
        assert!(matches!(
            generate_icon(0, &style),
            Err(IconError::InvalidSize(0))
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let style = IconStyle::default();
        let a = generate_icon(96, &style).unwrap();
        let b = generate_icon(96, &style).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_landmarks_scale_linearly() {
        let style = IconStyle::default();
        // Sizes chosen above the 4 px stroke floor
        let small = landmarks(144, &style);
        let big = landmarks(288, &style);
        assert_eq!(big.center.0, small.center.0 * 2.0);
        assert_eq!(big.disc_radius, small.disc_radius * 2.0);
        assert_eq!(big.left, (small.left.0 * 2.0, small.left.1 * 2.0));
        assert_eq!(big.corner, (small.corner.0 * 2.0, small.corner.1 * 2.0));
        assert_eq!(big.right, (small.right.0 * 2.0, small.right.1 * 2.0));
        assert_eq!(big.stroke_width, small.stroke_width * 2.0);
        assert_eq!(big.dot_radius, small.dot_radius * 2.0);
        for (d_big, d_small) in big.dots.iter().zip(small.dots.iter()) {
            assert_eq!(*d_big, (d_small.0 * 2.0, d_small.1 * 2.0));
        }
    }

    #[test]
    fn test_stroke_width_floor() {
        let style = IconStyle::default();
        // 48 / 18 would be 2; the floor keeps it at 4
        assert_eq!(landmarks(48, &style).stroke_width, 4.0);
        assert_eq!(landmarks(192, &style).stroke_width, 10.0);
    }

    #[test]
    fn test_background_disc_and_corners() {
        let img = generate_icon(192, &IconStyle::default()).unwrap();
        assert_eq!(img.dimensions(), (192, 192));
        // Just inside the top of the disc: base color, fully opaque
        assert_eq!(*img.get_pixel(96, 10), GREEN);
        // Canvas corners stay transparent
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(191, 191)[3], 0);
    }

    #[test]
    fn test_center_pixel_is_background() {
        // The checkmark passes near but not through dead-center, so the
        // center pixel shows the background disc
        let img = generate_icon(192, &IconStyle::default()).unwrap();
        assert_eq!(*img.get_pixel(96, 96), GREEN);
    }

    #[test]
    fn test_stroke_and_cap_colors() {
        let img = generate_icon(192, &IconStyle::default()).unwrap();
        // Midpoint of the stem segment
        assert_eq!(*img.get_pixel(66, 110), RED);
        // Midpoint of the tip segment
        assert_eq!(*img.get_pixel(114, 92), PURPLE);
        // The shared corner is owned by the tip (painted last)
        assert_eq!(*img.get_pixel(81, 125), PURPLE);
    }

    #[test]
    fn test_status_dot_colors() {
        let img = generate_icon(192, &IconStyle::default()).unwrap();
        assert_eq!(*img.get_pixel(80, 163), LIGHT_GREEN);
        assert_eq!(*img.get_pixel(96, 163), RED);
        assert_eq!(*img.get_pixel(111, 163), PURPLE);
    }

    #[test]
    fn test_single_stroke_style() {
        let style = IconStyle {
            strokes: CheckStrokes::Single,
            stem_color: WHITE,
            ..IconStyle::default()
        };
        let img = generate_icon(192, &style).unwrap();
        // Both segments and the corner render in the one stroke color
        assert_eq!(*img.get_pixel(66, 110), WHITE);
        assert_eq!(*img.get_pixel(114, 92), WHITE);
        assert_eq!(*img.get_pixel(81, 125), WHITE);
    }

    #[test]
    fn test_palette_closure() {
        let palette = [GREEN, LIGHT_GREEN, RED, PURPLE, WHITE, TRANSPARENT];
        let img = generate_icon(96, &IconStyle::default()).unwrap();
        for pixel in img.pixels() {
            assert!(palette.contains(pixel), "off-palette pixel {:?}", pixel);
        }
    }

    #[test]
    fn test_round_variant_clips_corners_only() {
        let img = generate_icon(64, &IconStyle::default()).unwrap();
        let round = round_variant(&img);
        // Corners fall outside the inscribed circle
        assert_eq!(round.get_pixel(0, 0)[3], 0);
        assert_eq!(round.get_pixel(63, 0)[3], 0);
        assert_eq!(round.get_pixel(0, 63)[3], 0);
        assert_eq!(round.get_pixel(63, 63)[3], 0);
        // Inside the circle the original pixels survive untouched,
        // including ones that were already transparent
        assert_eq!(round.get_pixel(32, 32), img.get_pixel(32, 32));
        assert_eq!(*round.get_pixel(32, 32), GREEN);
        assert_eq!(round.get_pixel(32, 2), img.get_pixel(32, 2));
        assert_eq!(round.get_pixel(32, 2)[3], 0);
    }
}
