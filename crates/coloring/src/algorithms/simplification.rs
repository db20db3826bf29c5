use geo_types::{Coord, LineString};

use crate::{error::Result, traits::ContourPostProcessor, types::Contour};

/// Drops contours whose enclosed area falls below a minimum.
#[derive(Debug, Clone)]
pub struct MinimumAreaFilter {
    pub min_area: f64,
}

impl Default for MinimumAreaFilter {
    fn default() -> Self {
        Self { min_area: 150.0 }
    }
}

impl ContourPostProcessor for MinimumAreaFilter {
    fn process(&self, contours: &mut Vec<Contour>) -> Result<()> {
        contours.retain(|contour| contour.area() >= self.min_area);
        Ok(())
    }
}

/// Douglas-Peucker ring simplifier using the geo crate's implementation.
///
/// Trades fidelity for fewer segments; a coarse tolerance turns jagged
/// pixel-level edges into clean line art.
#[derive(Debug, Clone)]
pub struct DouglasPeuckerSimplifier {
    pub tolerance: f64,
}

impl Default for DouglasPeuckerSimplifier {
    fn default() -> Self {
        Self { tolerance: 30.0 }
    }
}

impl ContourPostProcessor for DouglasPeuckerSimplifier {
    fn process(&self, contours: &mut Vec<Contour>) -> Result<()> {
        use geo::Simplify;

        for contour in contours.iter_mut() {
            if contour.points.len() < 3 {
                continue;
            }

            // Close the ring so the implicit final edge participates, then
            // drop the duplicate endpoint again after simplification.
            let mut coords: Vec<Coord<f64>> = contour
                .points
                .iter()
                .map(|&[x, y]| Coord {
                    x: x as f64,
                    y: y as f64,
                })
                .collect();
            coords.push(coords[0]);

            let simplified = LineString::new(coords).simplify(&self.tolerance);

            let mut points: Vec<[i32; 2]> = simplified
                .coords()
                .map(|c| [c.x.round() as i32, c.y.round() as i32])
                .collect();
            if points.len() > 1 && points.first() == points.last() {
                points.pop();
            }

            contour.points = points;
        }

        Ok(())
    }
}
