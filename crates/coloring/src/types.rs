use geo_types::{Coord, LineString, Polygon};
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// The editable coloring page: a single owned RGB bitmap.
///
/// Exactly one page exists per session; pipeline stages replace it wholesale,
/// edit operations mutate it in place. Snapshots for the history stack are
/// deep copies so undo never aliases the live bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoringPage {
    image: RgbImage,
}

impl ColoringPage {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    /// A solid white page of the given size.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb([255, 255, 255])),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether a (possibly negative) pixel coordinate lies on the page.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Deep copy for the history stack.
    pub fn snapshot(&self) -> ColoringPage {
        self.clone()
    }
}

/// A closed polygon approximation of a connected outline region.
///
/// Points are integer pixel coordinates in contour order; `is_hole` and
/// `parent` carry the extraction hierarchy. Contours are ephemeral pipeline
/// data — they drive filtering and gap healing and are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contour {
    /// Ring vertices; the closing edge back to the first point is implicit.
    pub points: Vec<[i32; 2]>,
    /// True when this contour bounds a hole rather than an outer region.
    pub is_hole: bool,
    /// Index of the enclosing contour in the extraction result, if any.
    pub parent: Option<usize>,
}

impl Contour {
    /// Convert to a geo-types Polygon for geometric operations.
    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .points
            .iter()
            .map(|&[x, y]| Coord {
                x: x as f64,
                y: y as f64,
            })
            .collect();

        Polygon::new(LineString::new(coords), vec![])
    }

    /// Enclosed area in square pixels.
    pub fn area(&self) -> f64 {
        use geo::Area;
        self.to_geo_polygon().unsigned_area()
    }

    /// Ring length in pixels, including the implicit closing edge.
    pub fn perimeter(&self) -> f64 {
        let mut total = 0.0;
        let n = self.points.len();
        for i in 0..n {
            let [x0, y0] = self.points[i];
            let [x1, y1] = self.points[(i + 1) % n];
            let dx = (x1 - x0) as f64;
            let dy = (y1 - y0) as f64;
            total += (dx * dx + dy * dy).sqrt();
        }
        total
    }

    /// Axis-aligned bounding box as `([min_x, min_y], [max_x, max_y])`.
    pub fn bounding_box(&self) -> ([i32; 2], [i32; 2]) {
        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;

        for &[x, y] in &self.points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        ([min_x, min_y], [max_x, max_y])
    }

    /// Arithmetic mean of the ring vertices.
    pub fn centroid(&self) -> [f64; 2] {
        if self.points.is_empty() {
            return [0.0, 0.0];
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &[x, y]| (sx + x as f64, sy + y as f64));
        [sx / n, sy / n]
    }
}
