use serde::{Deserialize, Serialize};

/// Default breakpoint in logical pixels. Widths at or below it are mobile.
pub const DEFAULT_BREAKPOINT: f32 = 768.0;

/// Coarse classification of the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    /// Build a class from the boolean "is mobile" signal.
    pub fn from_is_mobile(is_mobile: bool) -> Self {
        if is_mobile {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportClass::Mobile)
    }
}

/// Single width threshold separating the mobile and desktop classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(f32);

impl Breakpoint {
    pub fn new(width: f32) -> Self {
        Self(width)
    }

    pub fn width(self) -> f32 {
        self.0
    }

    /// Classify a logical window width. The boundary itself is mobile.
    pub fn classify(self, width: f32) -> ViewportClass {
        ViewportClass::from_is_mobile(width <= self.0)
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DEFAULT_BREAKPOINT)
    }
}

/// Source of the "is the viewport currently mobile" signal.
///
/// Implementations must report a stable value at mount and only change
/// their answer when the class boundary is actually crossed.
pub trait ViewportSignal {
    fn is_mobile(&self) -> bool;

    fn class(&self) -> ViewportClass {
        ViewportClass::from_is_mobile(self.is_mobile())
    }
}

/// Turns a stream of window widths into class-boundary crossings.
#[derive(Debug, Clone)]
pub struct ViewportClassifier {
    breakpoint: Breakpoint,
    current: ViewportClass,
}

impl ViewportClassifier {
    /// Seed the classifier with the width known at mount.
    pub fn new(breakpoint: Breakpoint, initial_width: f32) -> Self {
        Self {
            breakpoint,
            current: breakpoint.classify(initial_width),
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn current(&self) -> ViewportClass {
        self.current
    }

    /// Record a new width and return the new class only when it crossed
    /// the breakpoint.
    pub fn observe(&mut self, width: f32) -> Option<ViewportClass> {
        let class = self.breakpoint.classify(width);
        if class == self.current {
            return None;
        }

        log::debug!(
            "viewport crossed breakpoint {}: {:?} -> {:?} at width {width}",
            self.breakpoint.width(),
            self.current,
            class
        );
        self.current = class;
        Some(class)
    }
}

impl ViewportSignal for ViewportClassifier {
    fn is_mobile(&self) -> bool {
        self.current.is_mobile()
    }
}

/// A viewport signal pinned to one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub ViewportClass);

impl ViewportSignal for FixedViewport {
    fn is_mobile(&self) -> bool {
        self.0.is_mobile()
    }
}
