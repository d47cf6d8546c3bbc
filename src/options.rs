use alloc::sync::Arc;

use crate::Modifiers;
use crate::controller::SmoothScroll;

/// A callback fired when the controller's state changes.
///
/// The second argument is `animating`. Notifications are coalesced: one
/// input event or tick produces at most one call (see
/// [`SmoothScroll::batch_update`]).
pub type OnChangeCallback = Arc<dyn Fn(&SmoothScroll, bool) + Send + Sync>;

/// Configuration for [`SmoothScroll`]. Immutable after init.
#[derive(Clone)]
pub struct SmoothScrollOptions {
    /// Fraction of the `current`/`target` gap closed per frame, in `(0, 1]`.
    pub ease: f64,
    /// Pixel distance below which an animation run is considered converged.
    pub stop_threshold: f64,
    /// Scaling applied to normalized wheel deltas.
    pub scroll_multiplier: f64,
    /// Viewport width below which the effect is disabled.
    pub mobile_breakpoint: u32,
    /// Content-to-viewport height ratio at or below which the effect is
    /// disabled (the page is too short to benefit).
    pub min_page_height_ratio: f64,
    /// Fixed pixel offset subtracted when jumping to an anchor (e.g. for a
    /// fixed navigation bar).
    pub anchor_offset: f64,
    /// Wheel events holding any modifier in this set are not intercepted,
    /// preserving native gestures such as ctrl-wheel zoom.
    pub bypass_modifiers: Modifiers,
    /// Pixels per text line for [`crate::WheelDeltaMode::Line`] deltas.
    pub line_height: f64,
    /// Debounce applied to resize-driven mode re-evaluation.
    pub resize_debounce_ms: u64,
    /// Optional callback fired when the controller's state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl SmoothScrollOptions {
    pub fn new() -> Self {
        Self {
            ease: 0.12,
            stop_threshold: 0.1,
            scroll_multiplier: 1.0,
            mobile_breakpoint: 768,
            min_page_height_ratio: 1.05,
            anchor_offset: 0.0,
            bypass_modifiers: Modifiers::CTRL_META,
            line_height: 16.0,
            resize_debounce_ms: 120,
            on_change: None,
        }
    }

    pub fn with_ease(mut self, ease: f64) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_stop_threshold(mut self, stop_threshold: f64) -> Self {
        self.stop_threshold = stop_threshold;
        self
    }

    pub fn with_scroll_multiplier(mut self, scroll_multiplier: f64) -> Self {
        self.scroll_multiplier = scroll_multiplier;
        self
    }

    pub fn with_mobile_breakpoint(mut self, mobile_breakpoint: u32) -> Self {
        self.mobile_breakpoint = mobile_breakpoint;
        self
    }

    pub fn with_min_page_height_ratio(mut self, min_page_height_ratio: f64) -> Self {
        self.min_page_height_ratio = min_page_height_ratio;
        self
    }

    pub fn with_anchor_offset(mut self, anchor_offset: f64) -> Self {
        self.anchor_offset = anchor_offset;
        self
    }

    pub fn with_bypass_modifiers(mut self, bypass_modifiers: Modifiers) -> Self {
        self.bypass_modifiers = bypass_modifiers;
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_resize_debounce_ms(mut self, resize_debounce_ms: u64) -> Self {
        self.resize_debounce_ms = resize_debounce_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&SmoothScroll, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SmoothScrollOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SmoothScrollOptions")
            .field("ease", &self.ease)
            .field("stop_threshold", &self.stop_threshold)
            .field("scroll_multiplier", &self.scroll_multiplier)
            .field("mobile_breakpoint", &self.mobile_breakpoint)
            .field("min_page_height_ratio", &self.min_page_height_ratio)
            .field("anchor_offset", &self.anchor_offset)
            .field("bypass_modifiers", &self.bypass_modifiers)
            .field("line_height", &self.line_height)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .finish_non_exhaustive()
    }
}
