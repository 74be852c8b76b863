#![cfg(target_arch = "wasm32")]

use shader_sketches::wasm::dom::{DomControls, PointerTracker};
use shader_sketches::wasm::render::{mount, resize_all};
use shader_sketches::{effects, Controls, Effect, Pointer, SketchError};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement, MouseEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn container(id: &str, w: u32, h: u32) -> HtmlElement {
    let doc = document();
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let el = doc
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    el.set_id(id);
    el.set_attribute("style", &format!("width:{w}px;height:{h}px"))
        .unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn missing_container_is_reported() {
    let doc = document();
    let effect = Effect {
        container_id: "no-such-demo",
        ..effects::TUNNEL
    };
    match mount(&doc, effect) {
        Err(SketchError::MissingElement(id)) => assert_eq!(id, "no-such-demo"),
        other => panic!("expected missing element, got {:?}", other.map(|_| ())),
    }
}

#[wasm_bindgen_test]
fn canvas_matches_container_and_follows_resize() {
    let el = container("tunnel-demo", 320, 200);
    let doc = document();
    let mut sketch = mount(&doc, effects::TUNNEL).unwrap();
    assert!(sketch.is_compiled());
    assert_eq!((sketch.backend().canvas().width(), sketch.backend().canvas().height()), (320, 200));

    el.set_attribute("style", "width:150px;height:90px").unwrap();
    resize_all(&doc, std::slice::from_mut(&mut sketch));
    assert_eq!((sketch.backend().canvas().width(), sketch.backend().canvas().height()), (150, 90));
    el.remove();
}

#[wasm_bindgen_test]
fn broken_shader_leaves_sketch_inert() {
    let el = container("broken-demo", 64, 64);
    let effect = Effect {
        container_id: "broken-demo",
        fragment: "#version 300 es\nthis is not glsl",
        ..effects::PORTAL
    };
    let mut sketch = mount(&document(), effect).unwrap();
    assert!(sketch.is_inert());
    assert!(sketch.frame(&(), 1.0, Pointer::default()).is_none());
    el.remove();
}

#[wasm_bindgen_test]
fn absent_slider_falls_back_to_default() {
    let controls = DomControls::new(document());
    assert_eq!(controls.value("particle-slider"), None);

    let set = effects::PORTAL.uniforms(&controls, 0.0, (10, 10), Pointer::default());
    assert_eq!(set.float("uIntensity"), Some(1.0));
}

#[wasm_bindgen_test]
fn link_failure_leaves_sketch_inert() {
    let el = container("unlinked-demo", 64, 64);
    // Each stage compiles on its own; the varying types disagree at link time.
    let effect = Effect {
        container_id: "unlinked-demo",
        vertex: "#version 300 es
in vec2 aPosition;
out vec2 vUv;
void main() { vUv = aPosition; gl_Position = vec4(aPosition, 0.0, 1.0); }
",
        fragment: "#version 300 es
precision mediump float;
in vec3 vUv;
out vec4 fragColor;
void main() { fragColor = vec4(vUv, 1.0); }
",
        ..effects::TUNNEL
    };
    let mut sketch = mount(&document(), effect).unwrap();
    assert!(sketch.is_inert());
    assert!(sketch.frame(&(), 1.0, Pointer::default()).is_none());
    el.remove();
}

#[wasm_bindgen_test]
fn slider_value_is_read_and_remapped() {
    let doc = document();
    let input = doc
        .create_element("input")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    input.set_type("range");
    input.set_id("particle-slider");
    input.set_min("50");
    input.set_max("300");
    input.set_value("300");
    doc.body().unwrap().append_child(&input).unwrap();

    let controls = DomControls::new(doc);
    assert_eq!(controls.value("particle-slider"), Some(300.0));
    let set = effects::PORTAL.uniforms(&controls, 0.0, (10, 10), Pointer::default());
    assert_eq!(set.float("uIntensity"), Some(2.0));
    input.remove();
}

#[wasm_bindgen_test]
fn pointer_sits_at_canvas_origin_until_first_move() {
    let el = container("pointer-demo", 40, 40);
    let tracker = PointerTracker::default();
    assert_eq!(tracker.relative_to(&el), Pointer::default());

    let event = MouseEvent::new("mousemove").unwrap();
    tracker.record(&event);
    let rect = el.get_bounding_client_rect();
    assert_eq!(
        tracker.relative_to(&el),
        Pointer::new(-rect.left() as f32, -rect.top() as f32)
    );
    el.remove();
}
