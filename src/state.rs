/// A lightweight snapshot of the controller's scroll state.
///
/// `current` and `target` are offsets in viewport pixels along the vertical
/// axis. Invariant: when `animating` is `false`, `current == target`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// The offset actually committed to the viewport this frame.
    pub current: f64,
    /// The offset the viewport is animating toward.
    pub target: f64,
    /// Whether input is intercepted at all.
    pub enabled: bool,
    /// Whether an animation run is in flight.
    pub animating: bool,
}
