//! One canvas, one program: setup, per-frame update, resize.

use crate::effects::Effect;
use crate::error::SketchError;
use crate::input::{Controls, Pointer};
use crate::uniforms::{UniformSet, UniformValue};

/// Drawing surface plus shader-capable context.
///
/// Implemented by the WebGL2 binding in the browser and by a recording mock
/// in tests.
pub trait Backend {
    type Program;

    fn compile(&mut self, vertex: &str, fragment: &str) -> Result<Self::Program, SketchError>;
    /// Make `program` current; called once per frame before any uniform write.
    fn begin(&mut self, program: &Self::Program);
    fn set_uniform(&mut self, program: &mut Self::Program, name: &str, value: UniformValue);
    /// One quad covering the whole surface.
    fn draw_quad(&mut self, program: &Self::Program);
    fn resize(&mut self, width: u32, height: u32);
    fn size(&self) -> (u32, u32);
    /// Free a program built by [`Backend::compile`].
    fn release(&mut self, program: Self::Program);
}

pub enum SketchState<P> {
    Uncompiled,
    Compiled(P),
    /// Program failed to build; frames are no-ops from here on.
    Inert,
}

pub struct Sketch<B: Backend> {
    effect: Effect,
    backend: B,
    state: SketchState<B::Program>,
}

impl<B: Backend> Sketch<B> {
    pub fn new(backend: B, effect: Effect) -> Self {
        Self {
            effect,
            backend,
            state: SketchState::Uncompiled,
        }
    }

    /// Size the surface and build the program. A build failure is logged and
    /// leaves the sketch inert; it is never returned.
    pub fn setup(&mut self, width: u32, height: u32) {
        if !matches!(self.state, SketchState::Uncompiled) {
            log::warn!("{}: setup called twice, ignoring", self.effect.name);
            return;
        }
        self.backend.resize(width, height);
        self.state = match self.backend.compile(self.effect.vertex, self.effect.fragment) {
            Ok(program) => {
                log::info!("{}: program ready at {}x{}", self.effect.name, width, height);
                SketchState::Compiled(program)
            }
            Err(err) => {
                log::error!("{}: {}", self.effect.name, err);
                SketchState::Inert
            }
        };
    }

    /// Push this frame's uniforms and draw. Returns the set that was pushed,
    /// or `None` if there is no program.
    pub fn frame(
        &mut self,
        controls: &dyn Controls,
        elapsed_secs: f32,
        pointer: Pointer,
    ) -> Option<UniformSet> {
        let SketchState::Compiled(program) = &mut self.state else {
            return None;
        };
        let set = self
            .effect
            .uniforms(controls, elapsed_secs, self.backend.size(), pointer);
        self.backend.begin(program);
        for (name, value) in set.iter() {
            self.backend.set_uniform(program, name, value);
        }
        self.backend.draw_quad(program);
        Some(set)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.backend.size() != (width, height) {
            log::debug!("{}: resize to {}x{}", self.effect.name, width, height);
        }
        self.backend.resize(width, height);
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self.state, SketchState::Compiled(_))
    }

    pub fn is_inert(&self) -> bool {
        matches!(self.state, SketchState::Inert)
    }
}

impl<B: Backend> Drop for Sketch<B> {
    fn drop(&mut self) {
        if let SketchState::Compiled(program) =
            std::mem::replace(&mut self.state, SketchState::Inert)
        {
            self.backend.release(program);
        }
    }
}
