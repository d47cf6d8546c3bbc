use alloc::string::String;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type TargetMap = HashMap<String, f64>;
#[cfg(not(feature = "std"))]
type TargetMap = BTreeMap<String, f64>;

/// Extracts the fragment name from a navigational reference.
///
/// Only references that begin with `#` and name a non-empty fragment
/// participate in anchor interception; everything else is left to the host.
pub fn fragment_name(href: &str) -> Option<&str> {
    let name = href.strip_prefix('#')?;
    (!name.is_empty()).then_some(name)
}

/// A registry of in-page anchor targets (fragment name → document-relative
/// top in pixels).
///
/// The adapter populates this from the host document and resolves anchor
/// activations through it. A missing target resolves to `None`, which means
/// "do not intercept": native behavior (or a no-op) proceeds.
#[derive(Clone, Debug, Default)]
pub struct AnchorTargets {
    targets: TargetMap,
}

impl AnchorTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, top: f64) {
        self.targets.insert(name.into(), top);
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.targets.remove(name)
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Resolves a navigational reference (e.g. `"#section-2"`) to the
    /// registered target's top offset.
    pub fn resolve(&self, href: &str) -> Option<f64> {
        let name = fragment_name(href)?;
        self.targets.get(name).copied()
    }
}
