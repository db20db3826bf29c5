use std::collections::VecDeque;

use image::{GrayImage, Luma, Rgb};

use crate::{
    error::{ColoringError, Result},
    types::ColoringPage,
};

/// Flood-fill the region around `seed` with `color`.
///
/// The region is the 4-connected set of pixels matching the seed pixel's
/// color, bounded by anything else (outline pixels included). A scratch visit
/// mask sized `(height + 2, width + 2)` guards against revisits, so filling a
/// region that already has the target color terminates and changes nothing.
///
/// Returns the number of pixels painted. A seed outside the page is a
/// `FillFailed` error and leaves the page untouched.
pub fn flood_fill(page: &mut ColoringPage, seed: (i32, i32), color: Rgb<u8>) -> Result<u64> {
    let (sx, sy) = seed;
    if !page.contains(sx, sy) {
        return Err(ColoringError::FillFailed(format!(
            "seed point ({sx}, {sy}) outside page bounds {}x{}",
            page.width(),
            page.height()
        )));
    }
    let (sx, sy) = (sx as u32, sy as u32);

    // One-pixel border all around, as the fill engine expects.
    let mut visited = GrayImage::new(page.width() + 2, page.height() + 2);
    let seed_color = *page.image().get_pixel(sx, sy);

    let mut painted = 0u64;
    let mut queue = VecDeque::new();
    queue.push_back((sx, sy));
    visited.put_pixel(sx + 1, sy + 1, Luma([255]));

    while let Some((x, y)) = queue.pop_front() {
        page.image_mut().put_pixel(x, y, color);
        painted += 1;

        let neighbors = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in neighbors {
            if nx >= page.width() || ny >= page.height() {
                continue;
            }
            if visited.get_pixel(nx + 1, ny + 1)[0] != 0 {
                continue;
            }
            if *page.image().get_pixel(nx, ny) != seed_color {
                continue;
            }
            visited.put_pixel(nx + 1, ny + 1, Luma([255]));
            queue.push_back((nx, ny));
        }
    }

    Ok(painted)
}
