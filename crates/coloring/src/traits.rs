use image::{GrayImage, RgbImage};

use crate::{
    error::Result,
    pipeline::GeneratedPage,
    types::{ColoringPage, Contour},
};

/// Trait for binary-mask preprocessing stages (thresholding, morphology).
pub trait ImagePreprocessor: Send + Sync {
    /// Transform the input into a new single-channel image.
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for contour extraction algorithms.
pub trait ContourExtractor: Send + Sync {
    /// Extract contours (with hierarchy) from a binary image.
    fn extract_contours(&self, binary: &GrayImage) -> Result<Vec<Contour>>;
}

/// Trait for contour post-processing (filtering, simplification).
pub trait ContourPostProcessor: Send + Sync {
    /// Mutate the contour set in place; may drop contours.
    fn process(&self, contours: &mut Vec<Contour>) -> Result<()>;
}

/// Trait for region inpainting algorithms.
pub trait RegionInpainter: Send + Sync {
    /// Reconstruct the masked region of `page` from surrounding pixels.
    /// Mask convention: non-zero marks pixels to inpaint.
    fn inpaint(&self, page: &mut ColoringPage, mask: &GrayImage) -> Result<()>;
}

/// Main trait for photo-to-coloring-page generation.
pub trait PageGenerator: Send + Sync {
    /// Run the full outline pipeline on a photo, fitting the result into
    /// `bounds` (width, height).
    fn generate(&self, photo: &RgbImage, bounds: (u32, u32)) -> Result<GeneratedPage>;
}
