//! Slider-driven full-screen shader sketches for the browser.
//!
//! The core (remapping, uniform sets, the sketch state machine) is plain
//! Rust and builds on any target; the DOM and WebGL2 binding lives in
//! `wasm` and is only compiled for `wasm32`.

pub mod effects;
pub mod error;
pub mod input;
pub mod remap;
pub mod shaders;
pub mod sketch;
pub mod uniforms;

pub use effects::Effect;
pub use error::{SketchError, Stage};
pub use input::{Controls, Pointer};
pub use remap::{remap, ControlBinding, Range};
pub use sketch::{Backend, Sketch, SketchState};
pub use uniforms::{UniformSet, UniformValue};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod dom;
    pub mod gl;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("shader sketches starting");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        render::start(document)?;
        Ok(())
    }
}
