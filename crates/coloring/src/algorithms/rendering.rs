use image::{GrayImage, Luma};
use imageproc::{distance_transform::Norm, point::Point};

use crate::types::Contour;

/// Radius of the small closing pass that smooths stroke joints (5x5 kernel).
pub const JOINT_CLOSING_RADIUS: u8 = 2;

/// Contour vertices as drawable polygon points, or `None` when the ring is
/// degenerate. `draw_polygon_mut` rejects rings that repeat the first vertex
/// at the end, so duplicates are stripped here.
fn polygon_points(contour: &Contour) -> Option<Vec<Point<i32>>> {
    let mut points: Vec<Point<i32>> = Vec::with_capacity(contour.points.len());
    for &[x, y] in &contour.points {
        let p = Point::new(x, y);
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return None;
    }
    Some(points)
}

/// Rasterize a single contour as a filled white region on a black mask.
pub fn fill_contour_mask(width: u32, height: u32, contour: &Contour) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if let Some(points) = polygon_points(contour) {
        imageproc::drawing::draw_polygon_mut(&mut mask, &points, Luma([255]));
    }
    mask
}

/// Stroke a contour in black onto the accumulating outline mask, then apply
/// the small joint-smoothing closing pass over the whole mask.
pub fn stroke_contour(mask: &mut GrayImage, contour: &Contour) {
    if let Some(points) = polygon_points(contour) {
        imageproc::drawing::draw_polygon_mut(mask, &points, Luma([0]));
    }
    *mask = imageproc::morphology::close(mask, Norm::LInf, JOINT_CLOSING_RADIUS);
}

/// Union of all contours, filled, on a single mask.
pub fn union_fill_mask(width: u32, height: u32, contours: &[Contour]) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    for contour in contours {
        if let Some(points) = polygon_points(contour) {
            imageproc::drawing::draw_polygon_mut(&mut mask, &points, Luma([255]));
        }
    }
    mask
}

/// Per-pixel intersection of two equally sized masks.
pub fn intersect_masks(a: &GrayImage, b: &GrayImage) -> GrayImage {
    let mut out = GrayImage::new(a.width(), a.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let v = a.get_pixel(x, y)[0].min(b.get_pixel(x, y)[0]);
        *pixel = Luma([v]);
    }
    out
}
