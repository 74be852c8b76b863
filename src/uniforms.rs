//! Per-frame uniform values.

pub const U_TIME: &str = "uTime";
pub const U_RESOLUTION: &str = "uResolution";
pub const U_MOUSE: &str = "uMouse";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
}

/// Name → value map rebuilt every frame.
///
/// Kept as a small vector so writes go out in insertion order; setting an
/// existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformSet {
    entries: Vec<(&'static str, UniformValue)>,
}

impl UniformSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &'static str, value: UniformValue) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn set_float(&mut self, name: &'static str, v: f32) {
        self.set(name, UniformValue::Float(v));
    }

    pub fn set_vec2(&mut self, name: &'static str, x: f32, y: f32) {
        self.set(name, UniformValue::Vec2([x, y]));
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name)? {
            UniformValue::Float(v) => Some(v),
            UniformValue::Vec2(_) => None,
        }
    }

    pub fn vec2(&self, name: &str) -> Option<[f32; 2]> {
        match self.get(name)? {
            UniformValue::Vec2(v) => Some(v),
            UniformValue::Float(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, UniformValue)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
