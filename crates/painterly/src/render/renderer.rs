//! Stroke compositing onto the canvas.

use crate::color::Rgb;
use crate::stroke::{DabShape, StrokeDescriptor};

use super::canvas::Canvas;
use super::raster::{fill_ellipse, fill_quad};

/// Clear the canvas to opaque black, then paint every stroke in order.
///
/// Iteration order is z order: later strokes land on top. Each dab's
/// world geometry is computed from scratch from its stroke's anchor and
/// rotation, so no transform or alpha state carries from one primitive
/// to the next.
pub fn render_strokes<I>(canvas: &mut Canvas, strokes: I)
where
    I: IntoIterator<Item = StrokeDescriptor>,
{
    canvas.fill(Rgb::BLACK);
    for stroke in strokes {
        draw_stroke(canvas, &stroke);
    }
}

/// Paint one stroke's dabs.
fn draw_stroke(canvas: &mut Canvas, stroke: &StrokeDescriptor) {
    let (sin, cos) = stroke.rotation.sin_cos();

    for dab in &stroke.dabs {
        // Stroke-local (along, across) rotated into world space.
        let cx = stroke.x + dab.along * cos - dab.across * sin;
        let cy = stroke.y + dab.along * sin + dab.across * cos;
        let alpha = (dab.alpha.clamp(0.0, 1.0) * 255.0).round() as u16;

        match dab.shape {
            DabShape::Rect => {
                // Half-vectors of the rotated rectangle.
                let ax = dab.half_length * cos;
                let ay = dab.half_length * sin;
                let bx = -dab.half_thickness * sin;
                let by = dab.half_thickness * cos;
                let corners = [
                    (cx - ax - bx, cy - ay - by),
                    (cx + ax - bx, cy + ay - by),
                    (cx + ax + bx, cy + ay + by),
                    (cx - ax + bx, cy - ay + by),
                ];
                fill_quad(canvas, &corners, dab.color, alpha);
            }
            DabShape::Ellipse => {
                fill_ellipse(
                    canvas,
                    cx,
                    cy,
                    dab.half_length,
                    dab.half_thickness,
                    stroke.rotation,
                    dab.color,
                    alpha,
                );
            }
        }
    }
}
