pub mod builder;

use image::{GrayImage, Rgb, RgbImage, imageops};
use imageproc::distance_transform::Norm;
use tracing::debug;

use crate::{
    algorithms::rendering,
    error::{ColoringError, Result},
    geometry,
    traits::{ContourExtractor, ContourPostProcessor, ImagePreprocessor, PageGenerator},
    types::{ColoringPage, Contour},
};

/// Output of a pipeline run.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    /// The visible coloring page: white with the raw threshold mask in black.
    pub page: ColoringPage,
    /// Filtered and simplified contours; these drive gap healing.
    pub contours: Vec<Contour>,
    /// The stroked-and-intersected outline mask. The displayed page is
    /// deliberately recomposed from the raw threshold mask instead, so this
    /// artifact is diagnostic only; it is kept because the contour work also
    /// feeds the healing step.
    pub refined_mask: GrayImage,
}

/// The photo-to-outline pipeline with named processing stages.
///
/// Unlike a single ordered preprocessor list, the threshold and denoise
/// slots are distinct because the final recomposition needs the raw
/// threshold mask after the closing pass has already produced the cleaned
/// one.
pub struct Pipeline {
    thresholder: Box<dyn ImagePreprocessor>,
    denoiser: Box<dyn ImagePreprocessor>,
    contour_extractor: Box<dyn ContourExtractor>,
    postprocessors: Vec<Box<dyn ContourPostProcessor>>,
}

impl Pipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    pub fn new(
        thresholder: Box<dyn ImagePreprocessor>,
        denoiser: Box<dyn ImagePreprocessor>,
        contour_extractor: Box<dyn ContourExtractor>,
        postprocessors: Vec<Box<dyn ContourPostProcessor>>,
    ) -> Self {
        Self {
            thresholder,
            denoiser,
            contour_extractor,
            postprocessors,
        }
    }

    /// Run the full pipeline, fitting the output into `bounds`.
    pub fn process(&self, photo: &RgbImage, bounds: (u32, u32)) -> Result<GeneratedPage> {
        let (bound_width, bound_height) = bounds;
        let (width, height) =
            geometry::fit_within(photo.width(), photo.height(), bound_width, bound_height);
        if width == 0 || height == 0 {
            return Err(ColoringError::PipelineFailed(format!(
                "degenerate target size {width}x{height} for photo {}x{} in bounds {bound_width}x{bound_height}",
                photo.width(),
                photo.height()
            )));
        }

        // Fit to the bound, then to the exact target size; the second resize
        // is idempotent when the sizes already agree.
        let resized = imageops::resize(photo, width, height, imageops::FilterType::Triangle);
        let resized = imageops::resize(&resized, width, height, imageops::FilterType::Triangle);
        debug!(width, height, "resized photo");

        let gray = imageops::grayscale(&resized);
        let raw_mask = self.thresholder.preprocess(&gray)?;
        let cleaned = self.denoiser.preprocess(&raw_mask)?;

        let mut contours = self.contour_extractor.extract_contours(&cleaned)?;
        let extracted = contours.len();
        for postprocessor in &self.postprocessors {
            postprocessor.process(&mut contours)?;
        }
        debug!(extracted, retained = contours.len(), "contours processed");

        // Stroke the simplified contours over the cleaned mask with a joint
        // smoothing pass per contour, then keep only pixels belonging to a
        // retained contour.
        let mut outline_mask = cleaned;
        for contour in &contours {
            rendering::stroke_contour(&mut outline_mask, contour);
        }
        let fill_mask = rendering::union_fill_mask(width, height, &contours);
        let fill_mask =
            imageproc::morphology::close(&fill_mask, Norm::LInf, rendering::JOINT_CLOSING_RADIUS);
        let refined_mask = rendering::intersect_masks(&outline_mask, &fill_mask);

        // The visible outline is the raw thresholded silhouette, not the
        // contour-filtered version; contour filtering only informs healing.
        let mut page = ColoringPage::blank(width, height);
        for (x, y, pixel) in raw_mask.enumerate_pixels() {
            if pixel[0] != 0 {
                page.image_mut().put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }

        Ok(GeneratedPage {
            page,
            contours,
            refined_mask,
        })
    }
}

impl PageGenerator for Pipeline {
    fn generate(&self, photo: &RgbImage, bounds: (u32, u32)) -> Result<GeneratedPage> {
        self.process(photo, bounds)
    }
}
