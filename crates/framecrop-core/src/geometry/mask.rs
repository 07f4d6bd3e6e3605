//! Crop window placement and the dimmed area surrounding it.

use super::{Dimensions, Rect};

/// The crop window, centered in the viewport.
///
/// `x = (viewport_w - mask_w) / 2`, `y = (viewport_h - mask_h) / 2`. Odd
/// differences give half-unit origins.
pub fn mask_rect(viewport: Dimensions, mask: Dimensions) -> Rect {
    Rect::new(
        (viewport.width as f64 - mask.width as f64) / 2.0,
        (viewport.height as f64 - mask.height as f64) / 2.0,
        mask.width as f64,
        mask.height as f64,
    )
}

/// The four strips covering the viewport outside `mask`.
///
/// Returned in order top, bottom, left, right. Top and bottom span the full
/// viewport width; left and right span only the mask's height. Strips are
/// derived from the mask's own edges, so they tile the complement for any
/// mask contained in the viewport, centered or not. A strip may be empty
/// (zero width or height) when the mask touches that viewport edge.
pub fn mask_complement(viewport: Dimensions, mask: &Rect) -> [Rect; 4] {
    let vw = viewport.width as f64;
    let vh = viewport.height as f64;

    let top = Rect::new(0.0, 0.0, vw, mask.y);
    let bottom = Rect::new(0.0, mask.bottom(), vw, vh - mask.bottom());
    let left = Rect::new(0.0, mask.y, mask.x, mask.height);
    let right = Rect::new(mask.right(), mask.y, vw - mask.right(), mask.height);

    [top, bottom, left, right]
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Viewport plus a mask that fits inside it.
    fn viewport_and_mask() -> impl Strategy<Value = (Dimensions, Dimensions)> {
        (1u32..=400, 1u32..=400).prop_flat_map(|(vw, vh)| {
            (Just(Dimensions::new(vw, vh)), (1u32..=vw, 1u32..=vh))
                .prop_map(|(viewport, (mw, mh))| (viewport, Dimensions::new(mw, mh)))
        })
    }

    proptest! {
        /// Property: strips and mask cover exactly the viewport area.
        #[test]
        fn prop_strips_tile_complement((viewport, mask_dims) in viewport_and_mask()) {
            let mask = mask_rect(viewport, mask_dims);
            let strips = mask_complement(viewport, &mask);

            let covered: f64 = strips.iter().map(Rect::area).sum::<f64>() + mask.area();
            prop_assert!((covered - viewport.pixel_count() as f64).abs() < 1e-6);
        }

        /// Property: no two pieces (four strips + mask) overlap.
        #[test]
        fn prop_strips_do_not_overlap((viewport, mask_dims) in viewport_and_mask()) {
            let mask = mask_rect(viewport, mask_dims);
            let strips = mask_complement(viewport, &mask);

            let mut pieces = strips.to_vec();
            pieces.push(mask);
            for i in 0..pieces.len() {
                for j in (i + 1)..pieces.len() {
                    prop_assert!(
                        pieces[i].intersection(&pieces[j]).is_none(),
                        "{:?} overlaps {:?}", pieces[i], pieces[j]
                    );
                }
            }
        }

        /// Property: every sampled viewport point is in exactly one piece.
        #[test]
        fn prop_points_covered_once(
            (viewport, mask_dims) in viewport_and_mask(),
            fx in 0.0f64..1.0,
            fy in 0.0f64..1.0,
        ) {
            let mask = mask_rect(viewport, mask_dims);
            let strips = mask_complement(viewport, &mask);
            let x = fx * viewport.width as f64;
            let y = fy * viewport.height as f64;

            let hits = strips
                .iter()
                .chain(std::iter::once(&mask))
                .filter(|r| r.contains_point(x, y))
                .count();
            prop_assert_eq!(hits, 1);
        }

        /// Property: the mask is centered on the viewport.
        #[test]
        fn prop_mask_centered((viewport, mask_dims) in viewport_and_mask()) {
            let mask = mask_rect(viewport, mask_dims);
            let (cx, cy) = mask.center();
            prop_assert!((cx - viewport.width as f64 / 2.0).abs() < 1e-9);
            prop_assert!((cy - viewport.height as f64 / 2.0).abs() < 1e-9);
        }
    }
}
