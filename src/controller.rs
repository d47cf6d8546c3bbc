use core::cell::Cell;

use crate::{
    InputResponse, InteractionSource, Modifiers, NavKey, ScrollState, SmoothScrollOptions,
    Viewport, WheelDeltaMode, policy,
};

/// A pending resize measurement awaiting the debounce deadline.
#[derive(Clone, Copy, Debug)]
struct PendingResize {
    viewport: Viewport,
    content_height: u64,
    deadline_ms: u64,
}

/// A headless smooth-scrolling controller.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by forwarding input events, measurements, and a
///   frame clock.
/// - Each [`tick`](Self::tick) returns the pixel offset the adapter must
///   commit through the host's lowest-level scroll primitive (never a
///   host-side smooth-scroll behavior, which would compound animations).
///
/// While enabled, the animation loop is the sole writer of the viewport's
/// scroll offset; every other writer (keyboard paging, scrollbar drags,
/// other code) is observed via the resynchronization handlers, never raced
/// against.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    options: SmoothScrollOptions,
    viewport: Viewport,
    content_height: u64,
    current: f64,
    target: f64,
    enabled: bool,
    animating: bool,
    dragging: bool,
    last_source: Option<InteractionSource>,
    pending_resize: Option<PendingResize>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl SmoothScroll {
    /// Creates a disabled controller from options.
    ///
    /// Call [`set_viewport`](Self::set_viewport) with the initial
    /// measurements and then [`apply_mode`](Self::apply_mode) to run the
    /// initial mode decision.
    pub fn new(options: SmoothScrollOptions) -> Self {
        ssdebug!(
            ease = options.ease,
            stop_threshold = options.stop_threshold,
            mobile_breakpoint = options.mobile_breakpoint,
            "SmoothScroll::new"
        );
        Self {
            options,
            viewport: Viewport::default(),
            content_height: 0,
            current: 0.0,
            target: 0.0,
            enabled: false,
            animating: false,
            dragging: false,
            last_source: None,
            pending_resize: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &SmoothScrollOptions {
        &self.options
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn content_height(&self) -> u64 {
        self.content_height
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn last_source(&self) -> Option<InteractionSource> {
        self.last_source
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn status(&self) -> ScrollState {
        ScrollState {
            current: self.current,
            target: self.target,
            enabled: self.enabled,
            animating: self.animating,
        }
    }

    pub fn max_scroll(&self) -> u64 {
        self.content_height
            .saturating_sub(self.viewport.height as u64)
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll() as f64)
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.animating);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Input handlers use this internally so that one event (which may touch
    /// `target`, `animating`, and the interaction source together) produces
    /// at most one callback.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Applies a viewport/content measurement update immediately.
    ///
    /// This does not re-run the mode decision; call
    /// [`apply_mode`](Self::apply_mode) (load) or
    /// [`on_resize`](Self::on_resize) (interactive resize) for that.
    pub fn set_viewport(&mut self, viewport: Viewport, content_height: u64) {
        if self.viewport == viewport && self.content_height == content_height {
            return;
        }
        self.viewport = viewport;
        self.content_height = content_height;
        self.notify();
    }

    /// Runs the mode decision on the current measurements and applies the
    /// resulting transition.
    ///
    /// `observed_offset` is the viewport's true scroll offset, used to
    /// snapshot `current`/`target` when the transition enables the effect.
    /// Returns the resulting `enabled` state.
    pub fn apply_mode(&mut self, observed_offset: f64) -> bool {
        let active = policy::decide(self.viewport, self.content_height, &self.options);
        if active {
            self.enable_at(observed_offset);
        } else {
            self.disable();
        }
        active
    }

    /// Enables the effect, snapshotting `current = target = observed_offset`.
    ///
    /// Re-entrant calls are no-ops.
    pub fn enable_at(&mut self, observed_offset: f64) {
        if self.enabled {
            return;
        }
        ssdebug!(observed_offset, "enable");
        let offset = self.clamp_offset(observed_offset);
        self.batch_update(|s| {
            s.enabled = true;
            s.current = offset;
            s.target = offset;
            s.animating = false;
            s.dragging = false;
            s.notify();
        });
    }

    /// Disables the effect, cancelling any in-flight animation.
    ///
    /// The viewport's scroll offset is left untouched; native scrolling
    /// resumes from wherever it was. Re-entrant calls are no-ops.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        ssdebug!("disable");
        self.batch_update(|s| {
            s.enabled = false;
            s.animating = false;
            s.target = s.current;
            s.last_source = None;
            s.notify();
        });
    }

    /// Records a resize and (re)arms the debounce timer.
    ///
    /// The timer is a single slot: a resize arriving before the previous
    /// deadline replaces it, so interactive resizing re-evaluates the mode
    /// only once it settles. The adapter calls
    /// [`poll_resize`](Self::poll_resize) from its frame/timer loop.
    pub fn on_resize(&mut self, viewport: Viewport, content_height: u64, now_ms: u64) {
        let deadline_ms = now_ms.saturating_add(self.options.resize_debounce_ms);
        sstrace!(
            width = viewport.width,
            height = viewport.height,
            content_height,
            deadline_ms,
            "on_resize"
        );
        self.pending_resize = Some(PendingResize {
            viewport,
            content_height,
            deadline_ms,
        });
    }

    /// Fires the debounced resize handling once the deadline has passed.
    ///
    /// Applies the pending measurements and re-runs the mode decision.
    /// Returns `Some(enabled)` when this flipped the controller's state,
    /// `None` otherwise (no pending resize, deadline not reached, or the
    /// decision is unchanged).
    pub fn poll_resize(&mut self, now_ms: u64, observed_offset: f64) -> Option<bool> {
        let pending = self.pending_resize?;
        if now_ms < pending.deadline_ms {
            return None;
        }
        self.pending_resize = None;

        let was_enabled = self.enabled;
        self.batch_update(|s| {
            s.set_viewport(pending.viewport, pending.content_height);
            s.apply_mode(observed_offset);
        });
        (self.enabled != was_enabled).then_some(self.enabled)
    }

    /// Handles a wheel event.
    ///
    /// Returns [`InputResponse::PassThrough`] (do not suppress the host's
    /// default scroll) when the controller is disabled, a scrollbar drag is
    /// in progress, or a bypass modifier is held. Otherwise the delta is
    /// normalized, scaled, and accumulated into the clamped `target`.
    pub fn on_wheel(
        &mut self,
        delta_y: f64,
        mode: WheelDeltaMode,
        modifiers: Modifiers,
    ) -> InputResponse {
        if !self.enabled || self.dragging {
            return InputResponse::PassThrough;
        }
        if modifiers.intersects(&self.options.bypass_modifiers) {
            return InputResponse::PassThrough;
        }

        let delta = match mode {
            WheelDeltaMode::Pixel => delta_y,
            WheelDeltaMode::Line => delta_y * self.options.line_height,
            WheelDeltaMode::Page => delta_y * self.viewport.height as f64,
        };

        self.batch_update(|s| {
            s.target = s.clamp_offset(s.target + delta * s.options.scroll_multiplier);
            s.animating = s.target != s.current;
            s.last_source = Some(InteractionSource::Wheel);
            s.notify();
        });
        sstrace!(delta_y, target = self.target, "on_wheel");
        InputResponse::Intercept
    }

    /// Handles a scroll offset change through a channel the controller does
    /// not own (keyboard paging, scrollbar drag, host-native anchor jump,
    /// programmatic scroll by other code).
    ///
    /// When no animation is in flight, `current` and `target` are snapped to
    /// `observed_offset` so the next wheel tick starts from the true
    /// position. While an animation is in flight the event is deliberately
    /// ignored: the animation's own commits echo back through this channel,
    /// and resyncing against them would oscillate.
    pub fn on_native_scroll(&mut self, observed_offset: f64) {
        if !self.enabled {
            return;
        }
        if self.animating && !self.dragging {
            return;
        }
        self.batch_update(|s| {
            s.current = observed_offset;
            s.target = observed_offset;
            s.last_source = Some(InteractionSource::NativeScroll);
            s.notify();
        });
    }

    /// Marks the start of a scrollbar drag, cancelling any in-flight
    /// animation and suppressing the loop until the drag ends.
    pub fn on_drag_start(&mut self) {
        if !self.enabled || self.dragging {
            return;
        }
        self.batch_update(|s| {
            s.dragging = true;
            s.animating = false;
            s.target = s.current;
            s.last_source = Some(InteractionSource::ScrollbarDrag);
            s.notify();
        });
    }

    /// Marks the end of a scrollbar drag, resynchronizing to the observed
    /// offset.
    pub fn on_drag_end(&mut self, observed_offset: f64) {
        if !self.enabled || !self.dragging {
            return;
        }
        self.batch_update(|s| {
            s.dragging = false;
            s.current = observed_offset;
            s.target = observed_offset;
            s.last_source = Some(InteractionSource::ScrollbarDrag);
            s.notify();
        });
    }

    /// Handles a discrete navigation key (arrows, paging, Home/End, Space).
    ///
    /// The controller never reimplements these motions: it cancels any
    /// in-flight animation, resynchronizes to the observed offset, and
    /// defers to native behavior for that single navigation.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn on_key_nav(&mut self, key: NavKey, observed_offset: f64) {
        if !self.enabled {
            return;
        }
        sstrace!(key = ?key, observed_offset, "on_key_nav");
        self.batch_update(|s| {
            s.animating = false;
            s.current = observed_offset;
            s.target = observed_offset;
            s.last_source = Some(InteractionSource::Keyboard);
            s.notify();
        });
    }

    /// Handles an anchor-link activation whose target element sits at
    /// `anchor_top` (document-relative pixels).
    ///
    /// Cancels any in-flight animation and retargets to
    /// `anchor_top - options.anchor_offset`, clamped to the valid range.
    /// Returns [`InputResponse::PassThrough`] when the controller is
    /// disabled, in which case the host's default jump proceeds.
    pub fn on_anchor_activate(&mut self, anchor_top: f64) -> InputResponse {
        if !self.enabled {
            return InputResponse::PassThrough;
        }
        let target = self.clamp_offset(anchor_top - self.options.anchor_offset);
        ssdebug!(anchor_top, target, "on_anchor_activate");
        self.batch_update(|s| {
            s.target = target;
            s.animating = s.target != s.current;
            s.last_source = Some(InteractionSource::Anchor);
            s.notify();
        });
        InputResponse::Intercept
    }

    /// Advances the animation by one frame.
    ///
    /// Closes `ease` of the `current`/`target` gap (exponential ease-out; a
    /// first-order low-pass filter with no discontinuity at the end of
    /// travel and no explicit duration). While in flight, returns the
    /// whole-pixel offset the adapter must commit. Returns `None` once
    /// converged (gap below `stop_threshold`), when idle, or while
    /// suppressed by a drag; a `None` return means: do not schedule another
    /// frame.
    pub fn tick(&mut self) -> Option<u64> {
        if !self.enabled || !self.animating || self.dragging {
            return None;
        }

        let diff = self.target - self.current;
        if diff.abs() < self.options.stop_threshold {
            self.batch_update(|s| {
                s.current = s.target;
                s.animating = false;
                s.notify();
            });
            return None;
        }

        self.batch_update(|s| {
            s.current += diff * s.options.ease;
            s.notify();
        });
        Some((self.current.max(0.0) + 0.5) as u64)
    }
}
