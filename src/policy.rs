use crate::{SmoothScrollOptions, Viewport};

/// Decides whether the animated effect should be active for the given
/// measurements.
///
/// Inactive when the page is too short to benefit (`content_height <=
/// viewport_height * min_page_height_ratio`; the boundary is inclusive of
/// disable) or the viewport is narrower than `mobile_breakpoint` (small
/// devices rely on native touch scrolling).
///
/// Pure function of the measurements; re-evaluated on load and on
/// (debounced) resize by the controller.
pub fn decide(viewport: Viewport, content_height: u64, options: &SmoothScrollOptions) -> bool {
    let min_height = viewport.height as f64 * options.min_page_height_ratio;
    if content_height as f64 <= min_height {
        return false;
    }
    if viewport.width < options.mobile_breakpoint {
        return false;
    }
    true
}
