use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

static REQUESTED: AtomicBool = AtomicBool::new(false);

/// Ask iOS Safari for motion sensor access. Must run inside a user gesture.
///
/// The permission API is looked up reflectively since it only exists on iOS;
/// everywhere else this is a no-op. A rejection is logged and ignored, the
/// effect simply runs without tilt parallax.
pub fn request_permission_once() {
    if REQUESTED.swap(true, Ordering::SeqCst) {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let ctor = match js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("DeviceOrientationEvent")) {
        Ok(v) if !v.is_undefined() => v,
        _ => return,
    };
    let request = match js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")) {
        Ok(v) if v.is_function() => v.unchecked_into::<js_sys::Function>(),
        _ => return,
    };
    let promise = match request.call0(&ctor) {
        Ok(v) => js_sys::Promise::from(v),
        Err(e) => {
            log::warn!("motion permission request failed: {:?}", e);
            return;
        }
    };
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(state) => log::info!("motion permission: {:?}", state),
            Err(e) => log::warn!("motion permission rejected: {:?}", e),
        }
    });
}
