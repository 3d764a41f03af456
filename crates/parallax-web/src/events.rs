use crate::motion;
use glam::Vec2;
use parallax_core::{Scene, ScreenOrientation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the input handlers need; cloned into each closure.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_device_orientation(&w);
    wire_orientation_change(&w);
}

#[inline]
fn pointer_client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn current_orientation() -> ScreenOrientation {
    let angle = web::window()
        .and_then(|w| w.screen().ok())
        .map(|s| s.orientation())
        .and_then(|o| o.angle().ok())
        .map(|a| a as i32)
        .unwrap_or(0);
    ScreenOrientation::from_angle(angle)
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.scene.borrow_mut().pointer.begin(pointer_client_pos(&ev));
        // Capture so moves keep arriving when the pointer leaves the canvas
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.scene.borrow_mut().pointer.move_to(pointer_client_pos(&ev)) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.scene.borrow_mut().pointer.end();
        // iOS motion access has to be requested from a user gesture
        motion::request_permission_once();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_device_orientation(w: &InputWiring) {
    let w = w.clone();

    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
            let (Some(beta), Some(gamma)) = (ev.beta(), ev.gamma()) else {
                return;
            };
            w.scene
                .borrow_mut()
                .tilt
                .ingest(beta as f32, gamma as f32, current_orientation());
        }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd
            .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_orientation_change(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        w.scene.borrow_mut().tilt.recalibrate();
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd
            .add_event_listener_with_callback("orientationchange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
