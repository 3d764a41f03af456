use parallax_core::{LayerConfig, LoadGate};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One image handle per configured layer, in registry order.
pub fn create_images(configs: &[LayerConfig]) -> Result<Vec<web::HtmlImageElement>, JsValue> {
    configs.iter().map(|_| web::HtmlImageElement::new()).collect()
}

/// Start loading every layer image and invoke `on_ready` exactly once when
/// all of them have settled. A failed load is logged and counted as settled
/// so a missing asset cannot stall the effect indefinitely.
pub fn begin_load(
    images: &[web::HtmlImageElement],
    configs: &[LayerConfig],
    on_ready: impl FnOnce() + 'static,
) {
    let gate = Rc::new(RefCell::new(LoadGate::new(images.len())));
    let ready: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_ready))));

    for (image, config) in images.iter().zip(configs) {
        let src = config.src;
        // A slot settles at most once even if the element fires both events.
        let settled = Rc::new(Cell::new(false));

        let on_load = {
            let gate = gate.clone();
            let ready = ready.clone();
            let settled = settled.clone();
            Closure::wrap(Box::new(move || {
                if settled.replace(true) {
                    return;
                }
                settle_one(&gate, &ready);
            }) as Box<dyn FnMut()>)
        };
        let on_error = {
            let gate = gate.clone();
            let ready = ready.clone();
            let settled = settled.clone();
            Closure::wrap(Box::new(move || {
                if settled.replace(true) {
                    return;
                }
                log::error!("failed to load layer image {}", src);
                settle_one(&gate, &ready);
            }) as Box<dyn FnMut()>)
        };
        _ = image.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        _ = image.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_load.forget();
        on_error.forget();

        image.set_src(src);
    }
}

fn settle_one(gate: &Rc<RefCell<LoadGate>>, ready: &Rc<RefCell<Option<Box<dyn FnOnce()>>>>) {
    if gate.borrow_mut().settle() {
        if let Some(on_ready) = ready.borrow_mut().take() {
            on_ready();
        }
    }
}
