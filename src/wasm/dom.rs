use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, MouseEvent};

use crate::{Controls, Pointer};

/// Reads `<input type="range">` values straight from the document each frame.
pub struct DomControls {
    document: Document,
}

impl DomControls {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Controls for DomControls {
    fn value(&self, id: &str) -> Option<f32> {
        let input = self
            .document
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        input.value().trim().parse().ok()
    }
}

/// Current pixel size of the element with id `id`.
pub fn container_size(document: &Document, id: &str) -> Option<(u32, u32)> {
    let el = document
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some((el.offset_width().max(0) as u32, el.offset_height().max(0) as u32))
}

/// Last known pointer position in viewport (client) coordinates; `None`
/// until the first `mousemove`.
#[derive(Clone, Default)]
pub struct PointerTracker {
    client: Rc<Cell<Option<(f64, f64)>>>,
}

impl PointerTracker {
    pub fn record(&self, event: &MouseEvent) {
        self.client
            .set(Some((f64::from(event.client_x()), f64::from(event.client_y()))));
    }

    /// Pointer relative to `el`'s top-left corner. Before any movement this
    /// is the element's origin.
    pub fn relative_to(&self, el: &web_sys::Element) -> Pointer {
        let Some((cx, cy)) = self.client.get() else {
            return Pointer::default();
        };
        let rect = el.get_bounding_client_rect();
        Pointer::new((cx - rect.left()) as f32, (cy - rect.top()) as f32)
    }
}
