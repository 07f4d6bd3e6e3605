//! Aspect-preserving fit and pan/scale placement.

use super::{Dimensions, Offset, Rect};

/// Size an image to the viewport while preserving its aspect ratio.
///
/// The image is fitted to the viewport width when it is strictly wider than
/// the viewport (by aspect ratio), otherwise to the viewport height. Equal
/// aspect ratios therefore take the height branch.
///
/// # Arguments
///
/// * `viewport` - Editing surface size
/// * `image` - Natural size of the source image (both sides non-zero)
///
/// # Returns
///
/// Tuple of (draw_width, draw_height). The dimension that was fitted equals
/// the viewport dimension exactly.
///
/// # Example
///
/// ```
/// use framecrop_core::geometry::{fit, Dimensions};
///
/// // Wide panorama fits to width
/// let (w, h) = fit(Dimensions::new(960, 540), Dimensions::new(4000, 1000));
/// assert_eq!(w, 960.0);
/// assert_eq!(h, 240.0);
/// ```
pub fn fit(viewport: Dimensions, image: Dimensions) -> (f64, f64) {
    let image_aspect = image.aspect();
    let viewport_aspect = viewport.aspect();

    if image_aspect > viewport_aspect {
        let width = viewport.width as f64;
        (width, width / image_aspect)
    } else {
        let height = viewport.height as f64;
        (height * image_aspect, height)
    }
}

/// Place a fitted image in the viewport, applying pan then scale.
///
/// The fitted rectangle is first centered in the viewport, then translated
/// by `offset`, then scaled about its translated center. Scaling never moves
/// the center.
///
/// ```text
/// center     = (viewport - draw) / 2 + offset + draw / 2
/// scaled     = draw * scale
/// top_left   = center - scaled / 2
/// ```
///
/// # Arguments
///
/// * `viewport` - Editing surface size
/// * `draw` - Fitted size from [`fit`]
/// * `offset` - Pan offset in viewport units
/// * `scale` - Positive scale factor
pub fn place(viewport: Dimensions, draw: (f64, f64), offset: Offset, scale: f64) -> Rect {
    let (draw_w, draw_h) = draw;

    let center_x = (viewport.width as f64 - draw_w) / 2.0 + offset.x + draw_w / 2.0;
    let center_y = (viewport.height as f64 - draw_h) / 2.0 + offset.y + draw_h / 2.0;

    let scaled_w = draw_w * scale;
    let scaled_h = draw_h * scale;

    Rect::new(
        center_x - scaled_w / 2.0,
        center_y - scaled_h / 2.0,
        scaled_w,
        scaled_h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Dimensions = Dimensions::new(960, 540);

    #[test]
    fn test_fit_equal_aspect_fills_viewport() {
        let (w, h) = fit(VIEWPORT, Dimensions::new(1920, 1080));
        assert!((w - 960.0).abs() < 1e-9);
        assert_eq!(h, 540.0);
    }

    #[test]
    fn test_fit_wide_image_uses_width() {
        let (w, h) = fit(VIEWPORT, Dimensions::new(2000, 500));
        assert_eq!(w, 960.0);
        assert!((h - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_tall_image_uses_height() {
        let (w, h) = fit(VIEWPORT, Dimensions::new(500, 1000));
        assert_eq!(h, 540.0);
        assert!((w - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_square_image() {
        let (w, h) = fit(VIEWPORT, Dimensions::new(300, 300));
        assert_eq!(h, 540.0);
        assert!((w - 540.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_upscales_small_image() {
        // Small images are enlarged to fill, not left at natural size
        let (w, h) = fit(VIEWPORT, Dimensions::new(96, 54));
        assert!((w - 960.0).abs() < 1e-9);
        assert_eq!(h, 540.0);
    }

    #[test]
    fn test_place_centered_at_identity() {
        let rect = place(VIEWPORT, (540.0, 540.0), Offset::ZERO, 1.0);
        assert_eq!(rect, Rect::new(210.0, 0.0, 540.0, 540.0));
    }

    #[test]
    fn test_place_offset_translates() {
        let rect = place(VIEWPORT, (960.0, 540.0), Offset::new(100.0, -20.0), 1.0);
        assert_eq!(rect, Rect::new(100.0, -20.0, 960.0, 540.0));
    }

    #[test]
    fn test_place_scale_about_center() {
        let rect = place(VIEWPORT, (960.0, 540.0), Offset::ZERO, 0.5);
        assert_eq!(rect, Rect::new(240.0, 135.0, 480.0, 270.0));
    }

    #[test]
    fn test_place_scale_about_offset_center() {
        // Offset is applied before scaling, so the scaled rect stays centered
        // on the translated center
        let rect = place(VIEWPORT, (960.0, 540.0), Offset::new(100.0, 0.0), 2.0);
        assert_eq!(rect.center(), (580.0, 270.0));
        assert_eq!(rect.width, 1920.0);
        assert_eq!(rect.height, 1080.0);
    }

    #[test]
    fn test_place_minimum_scale() {
        let rect = place(VIEWPORT, (960.0, 540.0), Offset::ZERO, 0.1);
        assert!((rect.width - 96.0).abs() < 1e-9);
        assert!((rect.height - 54.0).abs() < 1e-9);
        let (cx, cy) = rect.center();
        assert!((cx - 480.0).abs() < 1e-9);
        assert!((cy - 270.0).abs() < 1e-9);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = Dimensions> {
        (1u32..=8000, 1u32..=8000).prop_map(|(w, h)| Dimensions::new(w, h))
    }

    fn offset_strategy() -> impl Strategy<Value = Offset> {
        (-480.0f64..=480.0, -270.0f64..=270.0).prop_map(|(x, y)| Offset::new(x, y))
    }

    proptest! {
        /// Property: fit preserves the image aspect ratio.
        #[test]
        fn prop_fit_preserves_aspect(
            viewport in dimensions_strategy(),
            image in dimensions_strategy(),
        ) {
            let (w, h) = fit(viewport, image);
            let ratio = (w / h) / image.aspect();
            prop_assert!((ratio - 1.0).abs() < 1e-9, "aspect drifted: {}", ratio);
        }

        /// Property: at least one fitted side equals the viewport side exactly.
        #[test]
        fn prop_fit_touches_viewport(
            viewport in dimensions_strategy(),
            image in dimensions_strategy(),
        ) {
            let (w, h) = fit(viewport, image);
            prop_assert!(w == viewport.width as f64 || h == viewport.height as f64);
        }

        /// Property: fitted size never exceeds the viewport.
        #[test]
        fn prop_fit_within_viewport(
            viewport in dimensions_strategy(),
            image in dimensions_strategy(),
        ) {
            let (w, h) = fit(viewport, image);
            prop_assert!(w <= viewport.width as f64 * (1.0 + 1e-12));
            prop_assert!(h <= viewport.height as f64 * (1.0 + 1e-12));
        }

        /// Property: identity transform centers the fitted image.
        #[test]
        fn prop_place_identity_centers(
            viewport in dimensions_strategy(),
            image in dimensions_strategy(),
        ) {
            let draw = fit(viewport, image);
            let rect = place(viewport, draw, Offset::ZERO, 1.0);
            let expected_x = (viewport.width as f64 - draw.0) / 2.0;
            let expected_y = (viewport.height as f64 - draw.1) / 2.0;
            prop_assert!((rect.x - expected_x).abs() < 1e-9);
            prop_assert!((rect.y - expected_y).abs() < 1e-9);
            prop_assert_eq!(rect.width, draw.0);
            prop_assert_eq!(rect.height, draw.1);
        }

        /// Property: at scale 1 the center moves by exactly the offset.
        #[test]
        fn prop_place_offset_moves_center(
            image in dimensions_strategy(),
            offset in offset_strategy(),
        ) {
            let viewport = Dimensions::new(960, 540);
            let draw = fit(viewport, image);
            let (cx0, cy0) = place(viewport, draw, Offset::ZERO, 1.0).center();
            let (cx, cy) = place(viewport, draw, offset, 1.0).center();
            prop_assert!((cx - (cx0 + offset.x)).abs() < 1e-9);
            prop_assert!((cy - (cy0 + offset.y)).abs() < 1e-9);
        }

        /// Property: scaling keeps the center and multiplies the size.
        #[test]
        fn prop_place_scale_keeps_center(
            image in dimensions_strategy(),
            offset in offset_strategy(),
            scale in 0.1f64..=2.0,
        ) {
            let viewport = Dimensions::new(960, 540);
            let draw = fit(viewport, image);
            let base = place(viewport, draw, offset, 1.0);
            let scaled = place(viewport, draw, offset, scale);

            let (bx, by) = base.center();
            let (sx, sy) = scaled.center();
            prop_assert!((bx - sx).abs() < 1e-9);
            prop_assert!((by - sy).abs() < 1e-9);
            prop_assert!((scaled.width - base.width * scale).abs() < 1e-9);
            prop_assert!((scaled.height - base.height * scale).abs() < 1e-9);
        }
    }
}
