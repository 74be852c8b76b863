use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlCanvasElement, MouseEvent};

use super::dom::{container_size, DomControls, PointerTracker};
use super::gl::WebGlBackend;
use crate::{effects, Effect, Sketch, SketchError};

pub type WebSketch = Sketch<WebGlBackend>;

/// Create a canvas inside the effect's container, sized to it, and build the
/// program. A shader failure still yields a (inert) sketch; only a missing
/// container or context is an error.
pub fn mount(document: &Document, effect: Effect) -> Result<WebSketch, SketchError> {
    let container = document
        .get_element_by_id(effect.container_id)
        .ok_or_else(|| SketchError::MissingElement(effect.container_id.to_string()))?;
    let (w, h) = container_size(document, effect.container_id)
        .ok_or_else(|| SketchError::MissingElement(effect.container_id.to_string()))?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| SketchError::Context(format!("{e:?}")))?
        .dyn_into()
        .map_err(|_| SketchError::Context("created element is not a canvas".into()))?;
    container
        .append_child(&canvas)
        .map_err(|e| SketchError::Context(format!("{e:?}")))?;

    let mut sketch = Sketch::new(WebGlBackend::new(canvas)?, effect);
    sketch.setup(w, h);
    Ok(sketch)
}

/// Re-query every container and resize its canvas to match.
pub fn resize_all(document: &Document, sketches: &mut [WebSketch]) {
    for sketch in sketches {
        match container_size(document, sketch.effect().container_id) {
            Some((w, h)) => sketch.resize(w, h),
            None => log::warn!("{}: container gone, keeping size", sketch.effect().name),
        }
    }
}

/// Mount every effect on the page and drive them from one animation loop.
pub fn start(document: Document) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;

    let mut mounted = Vec::new();
    for effect in effects::ALL {
        match mount(&document, effect) {
            Ok(sketch) => mounted.push(sketch),
            Err(err) => log::error!("{}: not started: {}", effect.name, err),
        }
    }
    if mounted.is_empty() {
        log::warn!("no sketch containers on this page");
        return Ok(());
    }
    let sketches = Rc::new(RefCell::new(mounted));

    // Resize canvases to fit their containers
    let resize_closure = {
        let document = document.clone();
        let sketches = sketches.clone();
        Closure::wrap(Box::new(move || {
            resize_all(&document, &mut sketches.borrow_mut());
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let pointer = PointerTracker::default();
    let pointer_closure = {
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| pointer.record(&event))
            as Box<dyn FnMut(MouseEvent)>)
    };
    window.add_event_listener_with_callback(
        "mousemove",
        pointer_closure.as_ref().unchecked_ref(),
    )?;
    pointer_closure.forget();

    let performance = window.performance().ok_or("no performance clock")?;
    let origin = performance.now();
    let controls = DomControls::new(document);

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let loop_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = ((performance.now() - origin) / 1000.0) as f32;
        for sketch in sketches.borrow_mut().iter_mut() {
            let at = pointer.relative_to(sketch.backend().canvas());
            sketch.frame(&controls, elapsed, at);
        }

        // schedule next
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(err) = loop_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("animation loop stopped: {:?}", err);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }

    Ok(())
}
