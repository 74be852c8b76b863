use std::collections::HashMap;

use js_sys::Float32Array;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::{Backend, SketchError, Stage, UniformValue};

const POSITION_ATTRIB: u32 = 0;

// Triangle strip over [0,1]^2; the vertex shader stretches it to clip space.
const QUAD: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];

pub struct GlProgram {
    program: WebGlProgram,
    // `None` entries are uniforms the driver optimised out.
    locations: HashMap<String, Option<WebGlUniformLocation>>,
}

/// WebGL2 context on one canvas with a full-screen quad ready to draw.
pub struct WebGlBackend {
    canvas: HtmlCanvasElement,
    gl: GL,
    vao: WebGlVertexArrayObject,
    quad: WebGlBuffer,
}

impl WebGlBackend {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SketchError> {
        let gl: GL = canvas
            .get_context("webgl2")
            .ok()
            .flatten()
            .ok_or_else(|| SketchError::Context("WebGL2 not supported".into()))?
            .dyn_into()
            .map_err(|_| SketchError::Context("context is not WebGL2".into()))?;

        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| SketchError::Context("failed to create VAO".into()))?;
        gl.bind_vertex_array(Some(&vao));

        let quad = gl
            .create_buffer()
            .ok_or_else(|| SketchError::Context("failed to create quad buffer".into()))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&quad));
        // `view` must not outlive QUAD and nothing allocates before upload.
        unsafe {
            let view = Float32Array::view(&QUAD);
            gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);
        }
        gl.vertex_attrib_pointer_with_i32(POSITION_ATTRIB, 2, GL::FLOAT, false, 0, 0);
        gl.enable_vertex_attrib_array(POSITION_ATTRIB);
        gl.bind_vertex_array(None);

        gl.disable(GL::DEPTH_TEST);
        gl.disable(GL::CULL_FACE);

        Ok(Self {
            canvas,
            gl,
            vao,
            quad,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn compile_shader(&self, stage: Stage, source: &str) -> Result<WebGlShader, SketchError> {
        let kind = match stage {
            Stage::Vertex => GL::VERTEX_SHADER,
            Stage::Fragment => GL::FRAGMENT_SHADER,
        };
        let shader = self
            .gl
            .create_shader(kind)
            .ok_or_else(|| SketchError::Context(format!("failed to create {stage} shader")))?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);
        if self
            .gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(shader)
        } else {
            let log = self
                .gl
                .get_shader_info_log(&shader)
                .unwrap_or_else(|| "unknown shader error".to_string());
            self.gl.delete_shader(Some(&shader));
            Err(SketchError::Compile { stage, log })
        }
    }
}

impl Backend for WebGlBackend {
    type Program = GlProgram;

    fn compile(&mut self, vertex: &str, fragment: &str) -> Result<GlProgram, SketchError> {
        let vs = self.compile_shader(Stage::Vertex, vertex)?;
        let fs = match self.compile_shader(Stage::Fragment, fragment) {
            Ok(fs) => fs,
            Err(err) => {
                self.gl.delete_shader(Some(&vs));
                return Err(err);
            }
        };
        let program = self
            .gl
            .create_program()
            .ok_or_else(|| SketchError::Context("failed to create program".into()))?;
        self.gl.attach_shader(&program, &vs);
        self.gl.attach_shader(&program, &fs);
        self.gl.bind_attrib_location(&program, POSITION_ATTRIB, "aPosition");
        self.gl.link_program(&program);

        let linked = self
            .gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        self.gl.detach_shader(&program, &vs);
        self.gl.detach_shader(&program, &fs);
        self.gl.delete_shader(Some(&vs));
        self.gl.delete_shader(Some(&fs));

        if !linked {
            let info = self
                .gl
                .get_program_info_log(&program)
                .unwrap_or_else(|| "unknown program error".to_string());
            self.gl.delete_program(Some(&program));
            return Err(SketchError::Link(info));
        }
        Ok(GlProgram {
            program,
            locations: HashMap::new(),
        })
    }

    fn begin(&mut self, program: &GlProgram) {
        self.gl.use_program(Some(&program.program));
    }

    fn set_uniform(&mut self, program: &mut GlProgram, name: &str, value: UniformValue) {
        if !program.locations.contains_key(name) {
            let location = self.gl.get_uniform_location(&program.program, name);
            program.locations.insert(name.to_string(), location);
        }
        let Some(Some(location)) = program.locations.get(name) else {
            return;
        };
        match value {
            UniformValue::Float(v) => self.gl.uniform1f(Some(location), v),
            UniformValue::Vec2([x, y]) => self.gl.uniform2f(Some(location), x, y),
        }
    }

    fn draw_quad(&mut self, _program: &GlProgram) {
        let (w, h) = self.size();
        self.gl.viewport(0, 0, w as i32, h as i32);
        self.gl.bind_vertex_array(Some(&self.vao));
        self.gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
        self.gl.bind_vertex_array(None);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn release(&mut self, program: GlProgram) {
        self.gl.use_program(None);
        self.gl.delete_program(Some(&program.program));
    }
}

impl Drop for WebGlBackend {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(Some(&self.vao));
        self.gl.delete_buffer(Some(&self.quad));
    }
}
