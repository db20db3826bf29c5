/// Fit a source size into a bounding box, preserving aspect ratio.
///
/// Width-first: the result takes the full bound width unless the implied
/// height overflows, in which case it takes the full bound height instead.
/// The result always fits within the bound, with the aspect ratio preserved
/// to within integer rounding. Zero-size inputs yield zero-size output; the
/// caller must guard degenerate bounds.
pub fn fit_within(
    source_width: u32,
    source_height: u32,
    bound_width: u32,
    bound_height: u32,
) -> (u32, u32) {
    if source_width == 0 || source_height == 0 {
        return (0, 0);
    }

    let aspect_ratio = source_width as f64 / source_height as f64;
    let mut target_width = bound_width;
    let mut target_height = (target_width as f64 / aspect_ratio) as u32;

    if target_height > bound_height {
        target_height = bound_height;
        target_width = (target_height as f64 * aspect_ratio) as u32;
    }

    (target_width, target_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_source_fills_bound_width() {
        let (w, h) = fit_within(400, 300, 800, 600);
        assert_eq!((w, h), (800, 600));
    }

    #[test]
    fn test_tall_source_fills_bound_height() {
        let (w, h) = fit_within(300, 600, 800, 400);
        assert_eq!(h, 400);
        assert_eq!(w, 200);
    }

    #[test]
    fn test_zero_source_yields_zero() {
        assert_eq!(fit_within(0, 100, 800, 600), (0, 0));
        assert_eq!(fit_within(100, 0, 800, 600), (0, 0));
    }

    #[test]
    fn test_fit_properties() {
        // Result fits the bound and preserves the ratio for a spread of sizes.
        for &(sw, sh) in &[(1u32, 1u32), (400, 300), (123, 457), (1920, 1080), (90, 160)] {
            for &(bw, bh) in &[(800u32, 600u32), (64, 64), (300, 1000)] {
                let (tw, th) = fit_within(sw, sh, bw, bh);
                assert!(tw <= bw, "{tw} > bound width {bw}");
                assert!(th <= bh, "{th} > bound height {bh}");
                assert!(tw > 0 && th > 0);

                let source_ratio = sw as f64 / sh as f64;
                let target_ratio = tw as f64 / th as f64;
                // Integer rounding bounds the ratio error by one pixel on the
                // shorter target edge.
                let epsilon = source_ratio / th.min(tw) as f64 + 1.0 / th.min(tw) as f64;
                assert!(
                    (target_ratio - source_ratio).abs() <= epsilon,
                    "ratio {target_ratio} vs {source_ratio} for {sw}x{sh} in {bw}x{bh}"
                );
            }
        }
    }
}
