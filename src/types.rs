/// Viewport geometry in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Modifier keys held during a wheel event.
///
/// Also used as a *set* in [`crate::SmoothScrollOptions::bypass_modifiers`]:
/// a wheel event passes through untouched when any modifier held by the user
/// is also present in the configured bypass set (e.g. ctrl-wheel zoom).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const CTRL_META: Self = Self {
        ctrl: true,
        meta: true,
        ..Self::NONE
    };

    /// Returns `true` when any modifier in `self` is also set in `set`.
    pub fn intersects(&self, set: &Self) -> bool {
        (self.ctrl && set.ctrl)
            || (self.alt && set.alt)
            || (self.shift && set.shift)
            || (self.meta && set.meta)
    }
}

/// Unit of a wheel event's delta, mirroring host `deltaMode` semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WheelDeltaMode {
    /// Delta is already in pixels.
    #[default]
    Pixel,
    /// Delta is in text lines; scaled by `options.line_height`.
    Line,
    /// Delta is in pages; scaled by the viewport height.
    Page,
}

/// Keys that natively page the viewport.
///
/// The controller never reimplements their motion: it cancels any in-flight
/// animation, resynchronizes, and defers to the host for that navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
    Space,
}

/// Which input channel last mutated the target offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionSource {
    Wheel,
    NativeScroll,
    Keyboard,
    ScrollbarDrag,
    Anchor,
}

/// Whether the host must suppress its default action for an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the host must suppress its default action on Intercept"]
pub enum InputResponse {
    /// The controller consumed the event; prevent the host's default action.
    Intercept,
    /// The controller ignored the event; let native behavior proceed.
    PassThrough,
}

impl InputResponse {
    pub fn is_intercept(&self) -> bool {
        matches!(self, Self::Intercept)
    }
}
