//! Slider-to-uniform range mapping.

/// Closed numeric interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub lo: f32,
    pub hi: f32,
}

impl Range {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, v: f32) -> bool {
        let (min, max) = if self.lo <= self.hi {
            (self.lo, self.hi)
        } else {
            (self.hi, self.lo)
        };
        v >= min && v <= max
    }
}

/// Linearly remap `v` from `src` to `dst`.
///
/// Input outside `src` is clamped first, so the result always lies inside
/// `dst`. A zero-width source maps everything to `dst.lo`.
pub fn remap(v: f32, src: Range, dst: Range) -> f32 {
    let span = src.hi - src.lo;
    if span == 0.0 || !span.is_finite() {
        return dst.lo;
    }
    let t = ((v - src.lo) / span).clamp(0.0, 1.0);
    if t == 0.0 {
        return dst.lo;
    }
    if t == 1.0 {
        return dst.hi;
    }
    dst.lo + (dst.hi - dst.lo) * t
}

/// One HTML range control bound to one shader parameter.
///
/// Bindings are declared as `'static` tables in [`crate::effects`], so the
/// target range cannot change after setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlBinding {
    /// DOM id of the `<input type="range">`.
    pub element_id: &'static str,
    /// Uniform that receives the remapped value.
    pub uniform: &'static str,
    pub source: Range,
    pub target: Range,
    /// Used when the control is missing or its value does not parse.
    pub default: f32,
}

impl ControlBinding {
    /// Resolve the uniform value for a raw control reading.
    pub fn resolve(&self, raw: Option<f32>) -> f32 {
        match raw {
            Some(v) if v.is_finite() => remap(v, self.source, self.target),
            _ => self.default,
        }
    }
}
