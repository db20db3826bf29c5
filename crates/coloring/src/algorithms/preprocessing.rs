use image::GrayImage;
use imageproc::distance_transform::Norm;

use crate::{error::Result, traits::ImagePreprocessor};

/// Mean-based adaptive threshold with inverted polarity.
///
/// Each pixel is compared against the mean of its local window
/// (`2 * block_radius + 1` square); pixels darker than `mean - bias` become
/// foreground (255), everything else background (0). The window is large
/// enough to ignore shading gradients while keeping edge detail.
#[derive(Debug, Clone)]
pub struct AdaptiveThresholdPreprocessor {
    pub block_radius: u32,
    pub bias: i16,
}

impl Default for AdaptiveThresholdPreprocessor {
    fn default() -> Self {
        // 15x15 window, bias 10.
        Self {
            block_radius: 7,
            bias: 10,
        }
    }
}

impl ImagePreprocessor for AdaptiveThresholdPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        let means = imageproc::filter::box_filter(image, self.block_radius, self.block_radius);

        let mut binary = GrayImage::new(image.width(), image.height());
        for (x, y, pixel) in image.enumerate_pixels() {
            let mean = means.get_pixel(x, y)[0] as i16;
            let value = if (pixel[0] as i16) <= mean - self.bias {
                255
            } else {
                0
            };
            binary.put_pixel(x, y, image::Luma([value]));
        }

        Ok(binary)
    }
}

/// Morphological closing (dilate then erode) with a square structuring
/// element of side `2 * radius + 1`.
///
/// Removes speckle noise and bridges small gaps in strokes; closing is not
/// exactly shape-preserving, minor boundary growth is accepted.
#[derive(Debug, Clone)]
pub struct ClosingPreprocessor {
    pub radius: u8,
}

impl Default for ClosingPreprocessor {
    fn default() -> Self {
        // ~30x30 kernel.
        Self { radius: 15 }
    }
}

impl ImagePreprocessor for ClosingPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        let dilated = imageproc::morphology::dilate(image, Norm::LInf, self.radius);
        Ok(imageproc::morphology::erode(&dilated, Norm::LInf, self.radius))
    }
}
