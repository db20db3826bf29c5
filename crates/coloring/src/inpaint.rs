use std::collections::VecDeque;

use image::{GrayImage, Rgb};

use crate::{
    error::{ColoringError, Result},
    traits::RegionInpainter,
    types::ColoringPage,
};

/// Telea-style fast-marching inpainter.
///
/// Unknown pixels are reconstructed in increasing distance order from the
/// known boundary; each pixel becomes the inverse-distance-weighted average
/// of already-known neighbors within `radius` (Chebyshev). Pixels are fed in
/// a fixed (distance, y, x) order, so the result is deterministic.
#[derive(Debug, Clone)]
pub struct TeleaInpainter {
    pub radius: u32,
}

impl Default for TeleaInpainter {
    fn default() -> Self {
        Self { radius: 3 }
    }
}

impl RegionInpainter for TeleaInpainter {
    fn inpaint(&self, page: &mut ColoringPage, mask: &GrayImage) -> Result<()> {
        let (width, height) = (page.width(), page.height());
        if mask.dimensions() != (width, height) {
            return Err(ColoringError::PipelineFailed(format!(
                "inpaint mask size {:?} does not match page size {:?}",
                mask.dimensions(),
                (width, height)
            )));
        }

        const UNKNOWN: u32 = u32::MAX;
        let idx = |x: u32, y: u32| (y * width + x) as usize;

        // Multi-source BFS from every known pixel bordering the region gives
        // each unknown pixel its marching order.
        let mut dist = vec![UNKNOWN; (width * height) as usize];
        let mut frontier = VecDeque::new();
        for y in 0..height {
            for x in 0..width {
                if mask.get_pixel(x, y)[0] == 0 {
                    dist[idx(x, y)] = 0;
                    frontier.push_back((x, y));
                }
            }
        }

        let mut unknown = Vec::new();
        while let Some((x, y)) = frontier.pop_front() {
            let d = dist[idx(x, y)];
            for (nx, ny) in neighbors4(x, y, width, height) {
                if dist[idx(nx, ny)] == UNKNOWN {
                    dist[idx(nx, ny)] = d + 1;
                    unknown.push((nx, ny));
                    frontier.push_back((nx, ny));
                }
            }
        }
        unknown.sort_by_key(|&(x, y)| (dist[idx(x, y)], y, x));

        let mut known: Vec<bool> = (0..(width * height) as usize)
            .map(|i| dist[i] == 0)
            .collect();

        let radius = self.radius as i64;
        for &(x, y) in &unknown {
            let mut sum = [0.0f64; 3];
            let mut weight_total = 0.0f64;

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);
                    if !known[idx(nx, ny)] {
                        continue;
                    }
                    let d2 = (dx * dx + dy * dy) as f64;
                    let weight = 1.0 / (d2 + 1.0);
                    let pixel = page.image().get_pixel(nx, ny);
                    for c in 0..3 {
                        sum[c] += weight * pixel[c] as f64;
                    }
                    weight_total += weight;
                }
            }

            // BFS ordering guarantees a reconstructed or known 4-neighbor.
            if weight_total > 0.0 {
                let value = Rgb([
                    (sum[0] / weight_total).round() as u8,
                    (sum[1] / weight_total).round() as u8,
                    (sum[2] / weight_total).round() as u8,
                ]);
                page.image_mut().put_pixel(x, y, value);
            }
            known[idx(x, y)] = true;
        }

        Ok(())
    }
}

fn neighbors4(x: u32, y: u32, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let (x, y) = (x as i64, y as i64);
    [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
        .into_iter()
        .filter(move |&(nx, ny)| nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64)
        .map(|(nx, ny)| (nx as u32, ny as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_inpaint_hole_in_uniform_image_is_invisible() {
        let mut page = ColoringPage::new(image::RgbImage::from_pixel(
            20,
            20,
            Rgb([80, 160, 240]),
        ));
        let mut mask = GrayImage::new(20, 20);
        for y in 8..12 {
            for x in 8..12 {
                mask.put_pixel(x, y, Luma([255]));
                page.image_mut().put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }

        TeleaInpainter::default().inpaint(&mut page, &mask).unwrap();

        let expected = image::RgbImage::from_pixel(20, 20, Rgb([80, 160, 240]));
        assert_eq!(*page.image(), expected);
    }

    #[test]
    fn test_empty_mask_is_noop() {
        let mut page = ColoringPage::blank(10, 10);
        let before = page.clone();
        let mask = GrayImage::new(10, 10);
        TeleaInpainter::default().inpaint(&mut page, &mask).unwrap();
        assert_eq!(page, before);
    }

    #[test]
    fn test_mask_size_mismatch_is_an_error() {
        let mut page = ColoringPage::blank(10, 10);
        let mask = GrayImage::new(8, 8);
        let err = TeleaInpainter::default().inpaint(&mut page, &mask);
        assert!(matches!(err, Err(ColoringError::PipelineFailed(_))));
    }
}
