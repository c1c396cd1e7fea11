//! The stroke generator.
//!
//! One generator drives all three brush styles: the outer loop (pick a
//! random anchor, sample its posterized color, derive a footprint from
//! the base size) is shared, and the per-style constants live on the
//! [`StrokeStyle`] variant. Generation order is paint order; later
//! strokes cover earlier ones.
//!
//! The generator owns its random source, so a caller that wants
//! reproducible output seeds an rng and hands it over. Every random
//! draw goes through that source in a fixed order, which makes stroke
//! sequences (and therefore rendered images) a pure function of
//! (buffer, style, params, seed).

use std::f32::consts::TAU;

use rand::Rng;

use crate::color::{vary_brightness, Rgb};
use crate::preprocess::PosterizedBuffer;

use super::descriptor::{Dab, DabShape, StrokeDescriptor};
use super::params::StrokeParams;
use super::style::{BristleStyle, DabStyle, FlatRectStyle, StrokeStyle};

/// Iterator producing the stroke sequence for one render pass.
///
/// The stroke count is fixed up front from the buffer dimensions, the
/// style's coverage factor and the density parameter; iteration then
/// yields exactly that many descriptors. An empty buffer yields none.
pub struct StrokeGenerator<'a, R: Rng> {
    buffer: &'a PosterizedBuffer,
    style: StrokeStyle,
    params: StrokeParams,
    rng: R,
    remaining: usize,
}

impl<'a, R: Rng> StrokeGenerator<'a, R> {
    /// Plan a render pass over `buffer`.
    pub fn new(
        buffer: &'a PosterizedBuffer,
        style: StrokeStyle,
        params: StrokeParams,
        rng: R,
    ) -> Self {
        let remaining = if buffer.is_empty() {
            0
        } else {
            style.stroke_count(buffer.width(), buffer.height(), params.density)
        };
        Self {
            buffer,
            style,
            params,
            rng,
            remaining,
        }
    }

    /// Strokes not yet emitted.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn next_stroke(&mut self) -> StrokeDescriptor {
        let x = self.rng.gen::<f32>() * self.buffer.width() as f32;
        let y = self.rng.gen::<f32>() * self.buffer.height() as f32;
        let base_color = self.buffer.sample_color(x, y);

        match self.style {
            StrokeStyle::Bristle(style) => self.bristle_stroke(x, y, base_color, style),
            StrokeStyle::Dab(style) => self.dab_stroke(x, y, base_color, style),
            StrokeStyle::FlatRect(style) => self.flat_rect_stroke(x, y, base_color, style),
        }
    }

    /// A fan of thin rectangles spread across the stroke axis, each with
    /// its own brightness, opacity, length and position wobble.
    fn bristle_stroke(
        &mut self,
        x: f32,
        y: f32,
        base_color: Rgb,
        style: BristleStyle,
    ) -> StrokeDescriptor {
        let size = self.params.base_size * style.size.sample(&mut self.rng);
        let length = size * style.length.sample(&mut self.rng);
        let rotation = self.rng.gen::<f32>() * TAU;
        let (min, max) = style.bristles;
        let bristles = self.rng.gen_range(min..=max);

        let mut dabs = Vec::with_capacity(bristles as usize);
        for j in 0..bristles {
            let across = (j as f32 - bristles as f32 / 2.0) * (size / bristles as f32);
            let brightness = style.brightness.sample(&mut self.rng);
            let alpha = style.alpha.sample(&mut self.rng);
            let bristle_length = length * style.length_jitter.sample(&mut self.rng);
            let thickness = size * style.thickness.sample(&mut self.rng);
            let along = length * style.along_jitter.sample(&mut self.rng);
            dabs.push(Dab {
                along,
                across,
                half_length: bristle_length / 2.0,
                half_thickness: thickness / 2.0,
                shape: DabShape::Rect,
                color: vary_brightness(base_color, brightness),
                alpha,
            });
        }

        StrokeDescriptor {
            x,
            y,
            rotation,
            length,
            thickness: size,
            base_color,
            dabs,
        }
    }

    /// A chain of small ellipses laid end to end along the stroke axis.
    fn dab_stroke(
        &mut self,
        x: f32,
        y: f32,
        base_color: Rgb,
        style: DabStyle,
    ) -> StrokeDescriptor {
        let size = self.params.base_size * style.size.sample(&mut self.rng);
        let length = size * style.length.sample(&mut self.rng);
        let thickness = size * style.thickness.sample(&mut self.rng);
        let rotation = self.rng.gen::<f32>() * TAU;
        let (min, max) = style.dabs;
        let count = self.rng.gen_range(min..=max);

        let mut dabs = Vec::with_capacity(count as usize);
        for d in 0..count {
            // A lone dab sits mid-stroke; otherwise spread evenly over the
            // stroke length.
            let t = if count > 1 {
                d as f32 / (count - 1) as f32
            } else {
                0.5
            };
            let along_jitter = length * style.along_jitter.sample(&mut self.rng);
            let across = thickness * style.across_jitter.sample(&mut self.rng);
            let brightness = style.brightness.sample(&mut self.rng);
            let rx = (thickness / 2.0) * style.rx.sample(&mut self.rng);
            let ry = rx * style.ry.sample(&mut self.rng);
            let alpha = style.alpha.sample(&mut self.rng);
            dabs.push(Dab {
                along: (t - 0.5) * length + along_jitter,
                across,
                half_length: rx,
                half_thickness: ry,
                shape: DabShape::Ellipse,
                color: vary_brightness(base_color, brightness),
                alpha,
            });
        }

        StrokeDescriptor {
            x,
            y,
            rotation,
            length,
            thickness,
            base_color,
            dabs,
        }
    }

    /// One high-opacity rectangle in the sampled color, unjittered.
    fn flat_rect_stroke(
        &mut self,
        x: f32,
        y: f32,
        base_color: Rgb,
        style: FlatRectStyle,
    ) -> StrokeDescriptor {
        let size = self.params.base_size * style.size.sample(&mut self.rng);
        let length = size * style.length.sample(&mut self.rng);
        let rotation = self.rng.gen::<f32>() * TAU;
        let alpha = style.alpha.sample(&mut self.rng);

        let dab = Dab {
            along: 0.0,
            across: 0.0,
            half_length: length / 2.0,
            half_thickness: size / 2.0,
            shape: DabShape::Rect,
            color: base_color,
            alpha,
        };

        StrokeDescriptor {
            x,
            y,
            rotation,
            length,
            thickness: size,
            base_color,
            dabs: vec![dab],
        }
    }
}

impl<R: Rng> Iterator for StrokeGenerator<'_, R> {
    type Item = StrokeDescriptor;

    fn next(&mut self) -> Option<StrokeDescriptor> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.next_stroke())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for StrokeGenerator<'_, R> {}
