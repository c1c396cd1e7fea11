//! Scanline rasterization of stroke primitives.
//!
//! Both fills use the same coverage rule: a pixel is painted when its
//! center lies inside the shape, with spans half-open on the right so
//! two shapes meeting at an edge never double-paint a pixel. All
//! geometry arrives in world space; there is no transform state here.

use crate::color::Rgb;

use super::canvas::Canvas;

/// Fill a convex quad given its corners in winding order.
///
/// Classic scanline fill: for each row crossing the quad, intersect the
/// row's center line with the edges, sort the crossings and paint the
/// enclosed spans. Horizontal edges produce no crossings and vertices
/// count for exactly one of their edges, so spans always pair up.
pub fn fill_quad(canvas: &mut Canvas, corners: &[(f32, f32); 4], color: Rgb, alpha: u16) {
    if alpha == 0 {
        return;
    }

    let min_y = corners.iter().map(|c| c.1).fold(f32::INFINITY, f32::min);
    let max_y = corners.iter().map(|c| c.1).fold(f32::NEG_INFINITY, f32::max);
    let y_start = (min_y.floor() as i32).max(0);
    let y_end = (max_y.ceil() as i32).min(canvas.height() as i32);

    let mut crossings = [0f32; 4];
    for y in y_start..y_end {
        let yf = y as f32 + 0.5;

        let mut n = 0;
        for i in 0..4 {
            let (x1, y1) = corners[i];
            let (x2, y2) = corners[(i + 1) % 4];
            if (y1 <= yf && y2 > yf) || (y2 <= yf && y1 > yf) {
                let t = (yf - y1) / (y2 - y1);
                crossings[n] = x1 + t * (x2 - x1);
                n += 1;
            }
        }

        let xs = &mut crossings[..n];
        xs.sort_unstable_by(f32::total_cmp);
        for pair in xs.chunks_exact(2) {
            let x_start = ((pair[0] - 0.5).ceil() as i32).max(0);
            let x_end = ((pair[1] - 0.5).ceil() as i32).min(canvas.width() as i32);
            for x in x_start..x_end {
                canvas.blend_pixel(x, y, color, alpha);
            }
        }
    }
}

/// Fill a rotated ellipse centered at `(cx, cy)` with radii `rx` along
/// the rotated axis and `ry` across it.
///
/// Walks the tight bounding box of the rotated ellipse and tests each
/// pixel center in the ellipse's own frame (rotate by `-rotation`,
/// compare against the unit circle). Degenerate radii paint nothing.
pub fn fill_ellipse(
    canvas: &mut Canvas,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    rotation: f32,
    color: Rgb,
    alpha: u16,
) {
    if alpha == 0 || !(rx > 0.0) || !(ry > 0.0) {
        return;
    }

    let (sin, cos) = rotation.sin_cos();
    // Extents of the rotated ellipse along the image axes.
    let half_w = ((rx * cos).powi(2) + (ry * sin).powi(2)).sqrt();
    let half_h = ((rx * sin).powi(2) + (ry * cos).powi(2)).sqrt();

    let x_start = (((cx - half_w) - 0.5).ceil() as i32).max(0);
    let x_end = (((cx + half_w) - 0.5).ceil() as i32 + 1).min(canvas.width() as i32);
    let y_start = (((cy - half_h) - 0.5).ceil() as i32).max(0);
    let y_end = (((cy + half_h) - 0.5).ceil() as i32 + 1).min(canvas.height() as i32);

    let inv_rx2 = 1.0 / (rx * rx);
    let inv_ry2 = 1.0 / (ry * ry);

    for y in y_start..y_end {
        let dy = y as f32 + 0.5 - cy;
        for x in x_start..x_end {
            let dx = x as f32 + 0.5 - cx;
            // Pixel center in the ellipse frame.
            let u = dx * cos + dy * sin;
            let v = dy * cos - dx * sin;
            if u * u * inv_rx2 + v * v * inv_ry2 <= 1.0 {
                canvas.blend_pixel(x, y, color, alpha);
            }
        }
    }
}
