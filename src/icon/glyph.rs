//! Microphone glyph geometry and rasterization
//!
//! All coordinates are fractions of the canvas size truncated to whole
//! pixels. Boxes are inclusive pixel ranges: a box from 2 to 12 covers the
//! pixels 2..=12, i.e. the continuous span `[2, 13)`.

use crate::error::{MurmurError, Result};
use image::RgbaImage;

/// Fill color of the microphone body
pub const BODY_COLOR: &str = "#dcdcdc";

/// Stroke color of the stand, stem and base
pub const STROKE_COLOR: &str = "#b4b4b4";

/// Inclusive pixel box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// Segment between two pixel positions, endpoints included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: (u32, u32),
    pub to: (u32, u32),
}

/// Microphone glyph laid out for one canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub size: u32,
    /// Rounded rectangle body
    pub body: PixelBox,
    pub body_radius: u32,
    /// Bounding box of the stand ellipse; only the lower half is drawn
    pub stand: PixelBox,
    pub stand_width: u32,
    pub stem: Segment,
    pub base: Segment,
    pub line_width: u32,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // fractions of a small positive size
fn frac(size: u32, f: f64) -> u32 {
    (f64::from(size) * f) as u32
}

impl Glyph {
    #[must_use]
    pub fn for_size(size: u32) -> Self {
        let bx = frac(size, 0.33);
        let bw = frac(size, 0.34);
        let body = PixelBox {
            left: bx,
            top: frac(size, 0.08),
            right: bx + bw,
            bottom: frac(size, 0.58),
        };

        let ax = frac(size, 0.18);
        let aw = frac(size, 0.64);
        let stand = PixelBox {
            left: ax,
            top: frac(size, 0.48),
            right: ax + aw,
            bottom: frac(size, 0.80),
        };

        let cx = size / 2;
        let foot = frac(size, 0.90);

        Self {
            size,
            body,
            body_radius: bw / 2,
            stand,
            stand_width: frac(size, 0.07).max(1),
            stem: Segment {
                from: (cx, frac(size, 0.78)),
                to: (cx, foot),
            },
            base: Segment {
                from: (frac(size, 0.28), foot),
                to: (frac(size, 0.72), foot),
            },
            line_width: frac(size, 0.06).max(1),
        }
    }

    /// SVG document drawing this glyph on a transparent `size`x`size` canvas
    #[must_use]
    pub fn to_svg(&self) -> String {
        let s = self.size;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}" shape-rendering="crispEdges">"#
        );

        let b = self.body;
        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{BODY_COLOR}"/>"#,
            b.left,
            b.top,
            b.right - b.left + 1,
            b.bottom - b.top + 1,
            self.body_radius,
        ));

        // Lower half of the ellipse inscribed in the stand box, stroked inside it
        let a = self.stand;
        let half = f64::from(self.stand_width) / 2.0;
        let cx = f64::from(a.left + a.right + 1) / 2.0;
        let cy = f64::from(a.top + a.bottom + 1) / 2.0;
        let rx = f64::from(a.right + 1 - a.left) / 2.0 - half;
        let ry = f64::from(a.bottom + 1 - a.top) / 2.0 - half;
        svg.push_str(&format!(
            r#"<path d="M {} {cy} A {rx} {ry} 0 0 1 {} {cy}" fill="none" stroke="{STROKE_COLOR}" stroke-width="{}"/>"#,
            cx + rx,
            cx - rx,
            self.stand_width,
        ));

        for seg in [self.stem, self.base] {
            push_line(&mut svg, seg, self.line_width);
        }

        svg.push_str("</svg>");
        svg
    }
}

fn push_line(svg: &mut String, seg: Segment, width: u32) {
    // Pixel centers; square caps cover the endpoint pixels
    svg.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{STROKE_COLOR}" stroke-width="{width}" stroke-linecap="square"/>"#,
        f64::from(seg.from.0) + 0.5,
        f64::from(seg.from.1) + 0.5,
        f64::from(seg.to.0) + 0.5,
        f64::from(seg.to.1) + 0.5,
    ));
}

/// Rasterize the glyph for `size` into a straight-alpha RGBA canvas
#[allow(clippy::cast_precision_loss)] // icon sizes fit in f32 mantissa
pub fn render_glyph(size: u32) -> Result<RgbaImage> {
    let svg = Glyph::for_size(size).to_svg();

    let opts = resvg::usvg::Options::default();
    let tree = resvg::usvg::Tree::from_data(svg.as_bytes(), &opts)
        .map_err(|e| MurmurError::Render(format!("Invalid glyph SVG for size {size}: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| MurmurError::Render(format!("Cannot allocate {size}x{size} canvas")))?;

    let render_ts = resvg::tiny_skia::Transform::from_scale(
        size as f32 / tree.size().width(),
        size as f32 / tree.size().height(),
    );
    resvg::render(&tree, render_ts, &mut pixmap.as_mut());

    // tiny_skia stores premultiplied RGBA, icons want straight alpha
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    RgbaImage::from_raw(size, size, rgba)
        .ok_or_else(|| MurmurError::Render(format!("Pixel buffer mismatch for size {size}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_16() {
        let g = Glyph::for_size(16);
        assert_eq!(
            g.body,
            PixelBox {
                left: 5,
                top: 1,
                right: 10,
                bottom: 9
            }
        );
        assert_eq!(g.body_radius, 2);
        assert_eq!(
            g.stand,
            PixelBox {
                left: 2,
                top: 7,
                right: 12,
                bottom: 12
            }
        );
        assert_eq!(g.stand_width, 1);
        assert_eq!(g.line_width, 1);
        assert_eq!(g.stem.from, (8, 12));
        assert_eq!(g.stem.to, (8, 14));
        assert_eq!(g.base.from, (4, 14));
        assert_eq!(g.base.to, (11, 14));
    }

    #[test]
    fn test_geometry_48() {
        let g = Glyph::for_size(48);
        assert_eq!(g.body.left, 15);
        assert_eq!(g.body.right, 31);
        assert_eq!(g.body_radius, 8);
        assert_eq!(g.stand_width, 3);
        assert_eq!(g.line_width, 2);
        assert_eq!(g.stem.to, (24, 43));
    }

    #[test]
    fn test_glyph_within_canvas() {
        for size in crate::icon::ICON_SIZES {
            let g = Glyph::for_size(size);
            assert!(g.body.right < size && g.body.bottom < size);
            assert!(g.stand.right < size && g.stand.bottom < size);
            assert!(g.base.to.0 < size && g.base.to.1 < size);
        }
    }

    #[test]
    fn test_svg_is_svg() {
        let svg = Glyph::for_size(32).to_svg();
        assert!(svg.starts_with("<svg"), "Glyph should be SVG format");
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(BODY_COLOR));
        assert!(svg.contains(STROKE_COLOR));
    }

    #[test]
    fn test_render_glyph_dimensions() {
        let img = render_glyph(32).expect("Failed to render glyph");
        assert_eq!(img.width(), 32);
        assert_eq!(img.height(), 32);
        assert_eq!(img.as_raw().len(), 32 * 32 * 4);
    }

    #[test]
    fn test_render_glyph_transparent_corners() {
        for size in crate::icon::ICON_SIZES {
            let img = render_glyph(size).unwrap();
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(img.get_pixel(x, y)[3], 0, "Corner ({x},{y}) of {size}px");
            }
        }
    }

    #[test]
    fn test_render_glyph_body_opaque() {
        let img = render_glyph(48).unwrap();
        let px = img.get_pixel(24, 14);
        assert_eq!(px.0, [220, 220, 220, 255]);
    }

    #[test]
    fn test_render_glyph_hard_edges() {
        for size in crate::icon::ICON_SIZES {
            let img = render_glyph(size).unwrap();
            let partial = img.pixels().filter(|p| p[3] != 0 && p[3] != 255).count();
            assert_eq!(partial, 0, "{size}px glyph has {partial} partially transparent pixels");
        }
    }

    #[test]
    fn test_svg_disables_antialiasing() {
        let svg = Glyph::for_size(16).to_svg();
        assert!(svg.contains(r#"shape-rendering="crispEdges""#));
    }
}
