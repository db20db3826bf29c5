use image::GrayImage;
use imageproc::contours::BorderType;

use crate::{error::Result, traits::ContourExtractor, types::Contour};

/// Imageproc-based contour extractor.
///
/// Returns the full contour tree: outer borders and hole borders, each with
/// the index of its enclosing contour.
#[derive(Debug, Clone, Default)]
pub struct ImageprocContourExtractor;

impl ContourExtractor for ImageprocContourExtractor {
    fn extract_contours(&self, binary: &GrayImage) -> Result<Vec<Contour>> {
        let contours = imageproc::contours::find_contours::<i32>(binary);

        let result = contours
            .into_iter()
            .map(|contour| Contour {
                points: contour.points.iter().map(|p| [p.x, p.y]).collect(),
                is_hole: contour.border_type == BorderType::Hole,
                parent: contour.parent,
            })
            .collect();

        Ok(result)
    }
}
