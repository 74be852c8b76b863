//! Host inputs read once per frame: range controls and the pointer.

use std::collections::HashMap;

/// Read-only access to the page's numeric controls.
pub trait Controls {
    /// Current value of the control with DOM id `id`, or `None` if the
    /// control is absent or its value is not a number.
    fn value(&self, id: &str) -> Option<f32>;
}

/// No controls at all; every binding falls back to its default.
impl Controls for () {
    fn value(&self, _id: &str) -> Option<f32> {
        None
    }
}

impl Controls for HashMap<&str, f32> {
    fn value(&self, id: &str) -> Option<f32> {
        self.get(id).copied()
    }
}

/// Pointer position in surface pixels, top-left origin (DOM convention).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same point with a bottom-left origin, as `gl_FragCoord` expects.
    pub fn flipped(self, height: f32) -> [f32; 2] {
        [self.x, height - self.y]
    }
}
