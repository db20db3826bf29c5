pub mod extraction;
pub mod preprocessing;
pub mod rendering;
pub mod simplification;

pub use extraction::ImageprocContourExtractor;
pub use preprocessing::{AdaptiveThresholdPreprocessor, ClosingPreprocessor};
pub use simplification::{DouglasPeuckerSimplifier, MinimumAreaFilter};
