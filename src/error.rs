use std::fmt;

/// Which half of the program failed to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SketchError {
    #[error("failed to compile {stage} shader: {log}")]
    Compile { stage: Stage, log: String },
    #[error("failed to link program: {0}")]
    Link(String),
    #[error("rendering context unavailable: {0}")]
    Context(String),
    #[error("missing #{0} element")]
    MissingElement(String),
}

#[cfg(target_arch = "wasm32")]
impl From<SketchError> for wasm_bindgen::JsValue {
    fn from(err: SketchError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
