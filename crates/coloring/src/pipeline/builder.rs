use crate::{
    algorithms::{
        AdaptiveThresholdPreprocessor, ClosingPreprocessor, DouglasPeuckerSimplifier,
        ImageprocContourExtractor, MinimumAreaFilter,
    },
    pipeline::Pipeline,
    traits::{ContourExtractor, ContourPostProcessor, ImagePreprocessor},
};

/// Builder for outline pipelines with a fluent API.
pub struct PipelineBuilder {
    thresholder: Option<Box<dyn ImagePreprocessor>>,
    denoiser: Option<Box<dyn ImagePreprocessor>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
    postprocessors: Vec<Box<dyn ContourPostProcessor>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            thresholder: None,
            denoiser: None,
            contour_extractor: None,
            postprocessors: Vec::new(),
        }
    }

    /// Set the binarization stage (replaces any existing one).
    pub fn set_thresholder<P>(mut self, thresholder: P) -> Self
    where
        P: ImagePreprocessor + 'static,
    {
        self.thresholder = Some(Box::new(thresholder));
        self
    }

    /// Set the denoising stage (replaces any existing one).
    pub fn set_denoiser<P>(mut self, denoiser: P) -> Self
    where
        P: ImagePreprocessor + 'static,
    {
        self.denoiser = Some(Box::new(denoiser));
        self
    }

    /// Set the contour extractor (replaces any existing one).
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    /// Add a contour post-processor.
    pub fn add_postprocessor<P>(mut self, postprocessor: P) -> Self
    where
        P: ContourPostProcessor + 'static,
    {
        self.postprocessors.push(Box::new(postprocessor));
        self
    }

    /// Add a minimum-area contour filter.
    pub fn with_area_filter(self, min_area: f64) -> Self {
        self.add_postprocessor(MinimumAreaFilter { min_area })
    }

    /// Add Douglas-Peucker ring simplification.
    pub fn with_simplification(self, tolerance: f64) -> Self {
        self.add_postprocessor(DouglasPeuckerSimplifier { tolerance })
    }

    /// Build the pipeline, filling unset stages with the standard components.
    /// When no post-processor was added, the standard area filter and
    /// simplifier pair is used.
    pub fn build(self) -> Pipeline {
        let thresholder = self
            .thresholder
            .unwrap_or_else(|| Box::new(AdaptiveThresholdPreprocessor::default()));
        let denoiser = self
            .denoiser
            .unwrap_or_else(|| Box::new(ClosingPreprocessor::default()));
        let contour_extractor = self
            .contour_extractor
            .unwrap_or_else(|| Box::new(ImageprocContourExtractor));

        let postprocessors = if self.postprocessors.is_empty() {
            vec![
                Box::new(MinimumAreaFilter::default()) as Box<dyn ContourPostProcessor>,
                Box::new(DouglasPeuckerSimplifier::default()) as Box<dyn ContourPostProcessor>,
            ]
        } else {
            self.postprocessors
        };

        Pipeline::new(thresholder, denoiser, contour_extractor, postprocessors)
    }

    /// Build the standard coloring-page pipeline.
    pub fn build_standard() -> Pipeline {
        Self::new().build()
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
