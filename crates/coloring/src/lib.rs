//! # Coloring Page Generation Library
//!
//! Turns an arbitrary photograph into a line-art coloring page and supports
//! interactive recoloring (free-hand strokes, bucket fill) with multi-step
//! undo. The outline pipeline is composable: thresholding, morphological
//! denoising, contour extraction, filtering and simplification are trait
//! seams with imageproc/geo-backed defaults.
//!
//! ## Core Features
//!
//! - **Trait-based Architecture**: swap any pipeline stage by implementing a trait
//! - **Pipeline System**: builder-assembled outline extraction stages
//! - **Gap Healing**: fast-marching inpainting of small noise regions
//! - **Edit Session**: stroke/fill state machine with snapshot history and undo
//! - **Scriptable Commands**: serializable edit commands with a JSON schema
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coloring::{Session, SaveFormat};
//!
//! let photo = coloring::io::load_photo("photo.jpg")?;
//!
//! let mut session = Session::new();
//! session.generate(&photo, (800, 600))?;
//!
//! session.set_color(image::Rgb([220, 40, 40]));
//! session.fill((400, 300), session.color())?;
//! session.save("page.png", SaveFormat::Png)?;
//! # Ok::<(), coloring::ColoringError>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use coloring::{Pipeline, Session, algorithms::*};
//!
//! let pipeline = Pipeline::builder()
//!     .set_thresholder(AdaptiveThresholdPreprocessor { block_radius: 5, bias: 6 })
//!     .set_denoiser(ClosingPreprocessor { radius: 9 })
//!     .with_area_filter(100.0)
//!     .with_simplification(10.0)
//!     .build();
//!
//! let session = Session::with_pipeline(pipeline);
//! ```

// Core modules
pub mod algorithms;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod heal;
pub mod history;
pub mod inpaint;
pub mod io;
pub mod pipeline;
pub mod session;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use error::{ColoringError, Result};
pub use heal::GapHealer;
pub use history::HistoryStack;
pub use inpaint::TeleaInpainter;
pub use io::SaveFormat;
pub use pipeline::{GeneratedPage, Pipeline, builder::PipelineBuilder};
pub use session::{EditCommand, EditState, Session};
pub use traits::*;
pub use types::{ColoringPage, Contour};

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    /// 400x300 white photo with a solid black circle, radius 50, centered.
    fn create_circle_photo() -> RgbImage {
        let mut img = RgbImage::from_pixel(400, 300, Rgb([255, 255, 255]));
        let (cx, cy, r) = (200.0f32, 150.0f32, 50.0f32);
        for y in 0..300 {
            for x in 0..400 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if dx * dx + dy * dy <= r * r {
                    img.put_pixel(x, y, Rgb([0, 0, 0]));
                }
            }
        }
        img
    }

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn test_generate_circle_yields_outline_page() {
        let photo = create_circle_photo();
        let generated = Pipeline::builder()
            .build()
            .process(&photo, (400, 300))
            .expect("pipeline should succeed");

        let page = &generated.page;
        assert_eq!((page.width(), page.height()), (400, 300));

        // Uniform regions threshold to background: white center and corners.
        assert_eq!(*page.image().get_pixel(200, 150), WHITE);
        assert_eq!(*page.image().get_pixel(5, 5), WHITE);
        assert_eq!(*page.image().get_pixel(395, 295), WHITE);

        // The circle edge leaves a black outline band just inside the rim.
        let band_has_black = (150..170).any(|x| *page.image().get_pixel(x, 150) == BLACK);
        assert!(band_has_black, "expected outline pixels near the circle rim");

        // The retained contours all trace the circle.
        assert!(!generated.contours.is_empty());
        assert!(generated.contours.len() <= 4);
        for contour in &generated.contours {
            let [cx, cy] = contour.centroid();
            assert!(
                (cx - 200.0).abs() < 25.0 && (cy - 150.0).abs() < 25.0,
                "contour centroid ({cx}, {cy}) far from circle center"
            );
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let photo = create_circle_photo();
        let pipeline = Pipeline::builder().build();

        let first = pipeline.process(&photo, (400, 300)).unwrap();
        let second = pipeline.process(&photo, (400, 300)).unwrap();

        assert_eq!(first.page, second.page);
        assert_eq!(first.contours, second.contours);
        assert_eq!(first.refined_mask, second.refined_mask);
    }

    #[test]
    fn test_fill_inside_circle_then_undo() {
        let photo = create_circle_photo();
        let mut session = Session::new();
        session.generate(&photo, (400, 300)).unwrap();
        let outline_only = session.page().unwrap().clone();

        let red = Rgb([255, 0, 0]);
        session.fill((200, 150), red).unwrap();

        let page = session.page().unwrap();
        assert_eq!(*page.image().get_pixel(200, 150), red);
        // The fill is bounded by the outline: the exterior stays white.
        assert_eq!(*page.image().get_pixel(5, 5), WHITE);
        assert_eq!(*page.image().get_pixel(395, 295), WHITE);

        let restored = session.undo().unwrap();
        assert_eq!(restored, &outline_only);
    }

    #[test]
    fn test_failed_generate_keeps_previous_page() {
        let photo = create_circle_photo();
        let mut session = Session::new();
        session.generate(&photo, (400, 300)).unwrap();
        let before = session.page().unwrap().clone();

        let err = session.generate(&photo, (0, 0));
        assert!(matches!(err, Err(ColoringError::PipelineFailed(_))));
        assert_eq!(session.page().unwrap(), &before);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_generate_fits_large_photo_into_bounds() {
        let mut big = RgbImage::from_pixel(800, 600, Rgb([255, 255, 255]));
        for y in 200..400 {
            for x in 300..500 {
                big.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }

        let mut session = Session::new();
        let page = session.generate(&big, (400, 200)).unwrap();
        assert!(page.width() <= 400 && page.height() <= 200);
    }
}
