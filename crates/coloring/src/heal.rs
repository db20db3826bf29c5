use tracing::debug;

use crate::{
    algorithms::rendering,
    error::Result,
    inpaint::TeleaInpainter,
    traits::RegionInpainter,
    types::{ColoringPage, Contour},
};

/// Inpaints small spurious contour regions out of a generated page.
///
/// Thresholding can leave tiny false islands or pinholes inside larger
/// shapes; reconstructing those regions from neighboring pixels removes the
/// artifact without leaving a visible patch. Regions are disjoint by
/// construction, so healing order is irrelevant; the contour vector order is
/// used for determinism.
pub struct GapHealer {
    pub gap_area_threshold: f64,
    inpainter: Box<dyn RegionInpainter>,
}

impl GapHealer {
    pub fn new(gap_area_threshold: f64, inpainter: Box<dyn RegionInpainter>) -> Self {
        Self {
            gap_area_threshold,
            inpainter,
        }
    }

    /// Heal every sub-threshold contour region in place. Returns the number
    /// of regions healed.
    pub fn heal(&self, page: &mut ColoringPage, contours: &[Contour]) -> Result<usize> {
        let mut healed = 0;
        for contour in contours {
            if contour.area() >= self.gap_area_threshold {
                continue;
            }
            let mask = rendering::fill_contour_mask(page.width(), page.height(), contour);
            self.inpainter.inpaint(page, &mask)?;
            healed += 1;
        }
        if healed > 0 {
            debug!(healed, "inpainted gap regions");
        }
        Ok(healed)
    }
}

impl Default for GapHealer {
    fn default() -> Self {
        Self {
            gap_area_threshold: 50.0,
            inpainter: Box::new(TeleaInpainter::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn speck(x: i32, y: i32, side: i32) -> Contour {
        Contour {
            points: vec![[x, y], [x + side, y], [x + side, y + side], [x, y + side]],
            is_hole: false,
            parent: None,
        }
    }

    #[test]
    fn test_small_black_speck_is_healed_away() {
        let mut page = ColoringPage::blank(40, 40);
        for y in 10..15 {
            for x in 10..15 {
                page.image_mut().put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }

        let healed = GapHealer::default()
            .heal(&mut page, &[speck(9, 9, 6)])
            .unwrap();

        assert_eq!(healed, 1);
        assert_eq!(page, ColoringPage::blank(40, 40));
    }

    #[test]
    fn test_large_contours_are_left_alone() {
        let mut page = ColoringPage::blank(40, 40);
        for y in 10..15 {
            for x in 10..15 {
                page.image_mut().put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        let before = page.clone();

        let healed = GapHealer::default()
            .heal(&mut page, &[speck(5, 5, 30)])
            .unwrap();

        assert_eq!(healed, 0);
        assert_eq!(page, before);
    }
}
