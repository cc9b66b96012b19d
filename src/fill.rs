//! Seeded region fill over a [`PixelBuffer`].

use egui::Pos2;

use crate::color::{Color, FILL_TOLERANCE, color_match};
use crate::pixel_buffer::PixelBuffer;

/// Fills the 4-connected region around `seed` with `fill_color`, using the
/// default [`FILL_TOLERANCE`]. Returns how many pixels were written.
///
/// Callers that want undo must snapshot the buffer before calling this.
pub fn flood_fill(buffer: &mut PixelBuffer, seed: Pos2, fill_color: Color) -> usize {
    flood_fill_with_tolerance(buffer, seed, fill_color, FILL_TOLERANCE)
}

/// Same as [`flood_fill`] with an explicit tolerance.
///
/// A seed outside the buffer, or a seed whose color already matches
/// `fill_color`, is a no-op. Traversal uses an explicit stack, so large
/// regions cannot overflow the call stack.
pub fn flood_fill_with_tolerance(
    buffer: &mut PixelBuffer,
    seed: Pos2,
    fill_color: Color,
    tolerance: u8,
) -> usize {
    let Some((seed_x, seed_y)) = buffer.pixel_at(seed) else {
        log::debug!("Fill seed {:?} is outside the canvas", seed);
        return 0;
    };
    let Some(target) = buffer.get_pixel(seed_x, seed_y) else {
        return 0;
    };

    // Written pixels stop matching `target` only because of this check.
    if color_match(target, fill_color, tolerance) {
        return 0;
    }

    let mut filled = 0;
    let mut stack: Vec<(i32, i32)> = Vec::with_capacity(1024);
    stack.push((seed_x, seed_y));

    while let Some((x, y)) = stack.pop() {
        match buffer.get_pixel(x, y) {
            Some(current) if color_match(current, target, tolerance) => {}
            _ => continue,
        }

        buffer.set_pixel(x, y, fill_color);
        filled += 1;

        stack.push((x + 1, y));
        stack.push((x - 1, y));
        stack.push((x, y + 1));
        stack.push((x, y - 1));
    }

    log::debug!(
        "Filled {} pixels from ({}, {}) with {}",
        filled,
        seed_x,
        seed_y,
        fill_color.to_hex()
    );
    filled
}
