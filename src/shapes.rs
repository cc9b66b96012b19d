//! Rasterization of strokes and two-point shapes.
//!
//! Every shape is described by the point where the gesture started (`anchor`)
//! and where the pointer is now (`current`). Outlines are drawn with round
//! caps and joins by stamping discs along each segment. All drawing clips at
//! the buffer edge.

use std::f32::consts::TAU;

use egui::{Pos2, Rect, pos2};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::pixel_buffer::PixelBuffer;

/// Geometry drawn by the shape tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Triangle,
}

/// Color and width used for strokes and shape interiors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    pub color: Color,
    /// Stroke width in pixels, at least 1
    pub width: u32,
}

impl Brush {
    pub fn new(color: Color, width: u32) -> Self {
        Self {
            color,
            width: width.max(1),
        }
    }

    fn radius(&self) -> f32 {
        self.width.max(1) as f32 / 2.0
    }
}

/// Draws `kind` spanning `anchor` → `current`.
///
/// When `filled` is set the interior is painted first; the outline is always
/// stroked on top. Lines ignore `filled`.
pub fn draw_shape(
    target: &mut PixelBuffer,
    kind: ShapeKind,
    anchor: Pos2,
    current: Pos2,
    brush: Brush,
    filled: bool,
) {
    match kind {
        ShapeKind::Line => draw_segment(target, anchor, current, brush),
        ShapeKind::Rectangle => {
            let bounds = rect_bounds(anchor, current);
            if filled {
                fill_rect(target, bounds, brush.color);
            }
            stroke_closed(
                target,
                &[
                    bounds.left_top(),
                    bounds.right_top(),
                    bounds.right_bottom(),
                    bounds.left_bottom(),
                ],
                brush,
            );
        }
        ShapeKind::Circle => {
            let radius = anchor.distance(current);
            if filled {
                fill_circle(target, anchor, radius, brush.color);
            }
            stroke_closed(target, &circle_outline(anchor, radius), brush);
        }
        ShapeKind::Triangle => {
            let vertices = triangle_vertices(anchor, current);
            if filled {
                fill_polygon(target, &vertices, brush.color);
            }
            stroke_closed(target, &vertices, brush);
        }
    }
}

/// The isosceles triangle with apex `anchor` and a horizontal base at
/// `current.y`, mirrored about the vertical through `anchor`.
pub fn triangle_vertices(anchor: Pos2, current: Pos2) -> [Pos2; 3] {
    [
        anchor,
        current,
        pos2(anchor.x - (current.x - anchor.x), current.y),
    ]
}

/// Normalized box between two corners; either extent may be negative.
pub fn rect_bounds(anchor: Pos2, current: Pos2) -> Rect {
    Rect::from_two_pos(anchor, current)
}

/// Thick segment with round caps.
pub fn draw_segment(target: &mut PixelBuffer, from: Pos2, to: Pos2, brush: Brush) {
    let radius = brush.radius();
    let margin = radius + 1.0;
    let clip = Rect::from_min_max(
        pos2(-margin, -margin),
        pos2(
            target.width() as f32 + margin,
            target.height() as f32 + margin,
        ),
    );
    let Some((from, to)) = clip_segment(from, to, clip) else {
        return;
    };

    let (mut x0, mut y0) = to_pixel(from);
    let (x1, y1) = to_pixel(to);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp_disc(target, x0, y0, brush.width, brush.color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

fn stroke_closed(target: &mut PixelBuffer, points: &[Pos2], brush: Brush) {
    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        draw_segment(target, from, to, brush);
    }
}

fn to_pixel(point: Pos2) -> (i32, i32) {
    (point.x.floor() as i32, point.y.floor() as i32)
}

/// Paints the pixels whose centres lie within a disc of diameter `width`.
///
/// Odd widths centre the disc on pixel `(cx, cy)`, even widths on its
/// top-left corner, so a stroke is exactly `width` pixels across.
fn stamp_disc(target: &mut PixelBuffer, cx: i32, cy: i32, width: u32, color: Color) {
    let radius = width.max(1) as f32 / 2.0;
    let offset = if width % 2 == 1 { 0.5 } else { 0.0 };
    let (centre_x, centre_y) = (cx as f32 + offset, cy as f32 + offset);
    let reach = radius.ceil() as i32;
    let r2 = radius * radius;
    for y in (cy - reach)..=(cy + reach) {
        let dy = y as f32 + 0.5 - centre_y;
        let rest = r2 - dy * dy;
        if rest < 0.0 {
            continue;
        }
        let half = rest.sqrt();
        let left = (centre_x - half - 0.5).ceil() as i32;
        let right = (centre_x + half - 0.5).floor() as i32;
        if left <= right {
            target.hline(left, right, y, color);
        }
    }
}

fn fill_rect(target: &mut PixelBuffer, bounds: Rect, color: Color) {
    let (x0, y0) = to_pixel(bounds.min);
    let (x1, y1) = to_pixel(bounds.max);
    let top = y0.max(0);
    let bottom = y1.min(target.height() as i32 - 1);
    for y in top..=bottom {
        target.hline(x0, x1, y, color);
    }
}

fn fill_circle(target: &mut PixelBuffer, center: Pos2, radius: f32, color: Color) {
    let (cx, cy) = to_pixel(center);
    let reach = radius.ceil() as i32;
    let top = cy.saturating_sub(reach).max(0);
    let bottom = cy.saturating_add(reach).min(target.height() as i32 - 1);
    let r2 = radius * radius;
    for y in top..=bottom {
        let dy = (y - cy) as f32;
        let rest = r2 - dy * dy;
        if rest < 0.0 {
            continue;
        }
        let half = rest.sqrt().floor() as i32;
        target.hline(cx.saturating_sub(half), cx.saturating_add(half), y, color);
    }
}

/// Points on the circle, close enough together that chords are invisible.
fn circle_outline(center: Pos2, radius: f32) -> Vec<Pos2> {
    let steps = (TAU * radius / 4.0).ceil().clamp(24.0, 2048.0) as usize;
    (0..steps)
        .map(|i| {
            let angle = TAU * i as f32 / steps as f32;
            pos2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Scanline fill, sampling each row at its pixel centre.
fn fill_polygon(target: &mut PixelBuffer, vertices: &[Pos2], color: Color) {
    if vertices.len() < 3 {
        return;
    }

    let (min_y, max_y) = vertices
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v.y), hi.max(v.y)));
    let top = (min_y.floor() as i32).max(0);
    let bottom = (max_y.ceil() as i32).min(target.height() as i32 - 1);

    let mut crossings = Vec::with_capacity(vertices.len());
    for y in top..=bottom {
        crossings.clear();
        let yf = y as f32 + 0.5;
        for (i, a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            if (a.y <= yf && b.y > yf) || (b.y <= yf && a.y > yf) {
                crossings.push(a.x + (yf - a.y) / (b.y - a.y) * (b.x - a.x));
            }
        }
        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            target.hline(pair[0].floor() as i32, pair[1].floor() as i32, y, color);
        }
    }
}

/// Liang-Barsky clip of a segment against `clip`.
fn clip_segment(from: Pos2, to: Pos2, clip: Rect) -> Option<(Pos2, Pos2)> {
    let delta = to - from;
    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;

    for (p, q) in [
        (-delta.x, from.x - clip.min.x),
        (delta.x, clip.max.x - from.x),
        (-delta.y, from.y - clip.min.y),
        (delta.y, clip.max.y - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((from + delta * t0, from + delta * t1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn test_triangle_vertices_mirror_about_anchor() {
        let vertices = triangle_vertices(pos2(100.0, 100.0), pos2(150.0, 200.0));
        assert_eq!(
            vertices,
            [pos2(100.0, 100.0), pos2(150.0, 200.0), pos2(50.0, 200.0)]
        );
    }

    #[test]
    fn test_rect_bounds_accept_negative_extent() {
        let bounds = rect_bounds(pos2(50.0, 50.0), pos2(10.0, 10.0));
        assert_eq!(bounds.min, pos2(10.0, 10.0));
        assert_eq!(bounds.max, pos2(50.0, 50.0));
    }

    #[test]
    fn test_segment_has_round_caps() {
        let mut buffer = PixelBuffer::new(40, 40);
        draw_segment(&mut buffer, pos2(10.0, 20.0), pos2(30.0, 20.0), Brush::new(RED, 6));

        assert_eq!(buffer.get_pixel(10, 20), Some(RED));
        assert_eq!(buffer.get_pixel(30, 20), Some(RED));
        // Cap extends past the endpoint by the radius
        assert_eq!(buffer.get_pixel(7, 20), Some(RED));
        assert_eq!(buffer.get_pixel(5, 20), Some(Color::WHITE));
        // Rounded: the corner of the cap's bounding square stays white
        assert_eq!(buffer.get_pixel(7, 17), Some(Color::WHITE));
    }

    #[test]
    fn test_stroke_is_exactly_brush_width_across() {
        for width in 1..=20 {
            let mut buffer = PixelBuffer::new(40, 40);
            draw_segment(&mut buffer, pos2(10.0, 20.0), pos2(30.0, 20.0), Brush::new(RED, width));
            let covered = (0..40)
                .filter(|&y| buffer.get_pixel(20, y) == Some(RED))
                .count();
            assert_eq!(covered, width as usize, "width {width}");
        }
    }

    #[test]
    fn test_segment_off_canvas_is_clipped() {
        let mut buffer = PixelBuffer::new(20, 20);
        draw_segment(
            &mut buffer,
            pos2(-1.0e9, 5.0),
            pos2(1.0e9, 5.0),
            Brush::new(RED, 1),
        );
        assert_eq!(buffer.get_pixel(0, 5), Some(RED));
        assert_eq!(buffer.get_pixel(19, 5), Some(RED));
        assert_eq!(buffer.get_pixel(10, 6), Some(Color::WHITE));

        let before = buffer.clone();
        draw_segment(&mut buffer, pos2(-50.0, -50.0), pos2(-10.0, -40.0), Brush::new(RED, 3));
        assert!(buffer == before);
    }

    #[test]
    fn test_filled_circle_covers_interior_only() {
        let mut buffer = PixelBuffer::new(50, 50);
        draw_shape(
            &mut buffer,
            ShapeKind::Circle,
            pos2(25.0, 25.0),
            pos2(35.0, 25.0),
            Brush::new(RED, 1),
            true,
        );
        assert_eq!(buffer.get_pixel(25, 25), Some(RED));
        assert_eq!(buffer.get_pixel(31, 29), Some(RED));
        assert_eq!(buffer.get_pixel(33, 33), Some(Color::WHITE));
        assert_eq!(buffer.get_pixel(2, 2), Some(Color::WHITE));
    }

    #[test]
    fn test_unfilled_shapes_leave_interior_untouched() {
        for kind in [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Triangle] {
            let mut buffer = PixelBuffer::new(120, 120);
            draw_shape(
                &mut buffer,
                kind,
                pos2(60.0, 20.0),
                pos2(100.0, 100.0),
                Brush::new(RED, 2),
                false,
            );
            // (75, 70) is inside all three shapes and well away from the outlines
            assert_eq!(buffer.get_pixel(75, 70), Some(Color::WHITE), "{kind:?}");
        }
    }

    #[test]
    fn test_filled_triangle_spans_its_base() {
        let mut buffer = PixelBuffer::new(120, 120);
        draw_shape(
            &mut buffer,
            ShapeKind::Triangle,
            pos2(60.0, 20.0),
            pos2(100.0, 100.0),
            Brush::new(RED, 1),
            true,
        );
        assert_eq!(buffer.get_pixel(60, 99), Some(RED));
        assert_eq!(buffer.get_pixel(25, 98), Some(RED));
        assert_eq!(buffer.get_pixel(95, 98), Some(RED));
        assert_eq!(buffer.get_pixel(25, 30), Some(Color::WHITE));
    }
}
