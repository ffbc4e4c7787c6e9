//! Thin helpers over `web_sys` used by every component.

use wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

pub fn as_html(el: &Element) -> Option<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
}

pub fn set_style(el: &Element, prop: &str, value: &str) -> Result<(), JsValue> {
    match as_html(el) {
        Some(html) => html.style().set_property(prop, value),
        None => Ok(()),
    }
}

/// Run `f` once after `ms` milliseconds. The callback frees itself after
/// running, so this is safe to call from hot event handlers.
pub fn set_timeout<F>(ms: i32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
}

/// Run `f` every `ms` milliseconds for the lifetime of the page.
pub fn set_interval<F>(ms: i32, f: F) -> Result<i32, JsValue>
where
    F: FnMut() + 'static,
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        ms,
    )?;
    cb.forget();
    Ok(id)
}

/// Run `f` on the next animation frame with the frame timestamp.
///
/// Like [`set_timeout`] the callback frees itself once it has run. A frame
/// that gets cancelled never runs and never frees, so callers that cancel
/// should hold a persistent closure instead.
pub fn next_frame<F>(f: F) -> Result<i32, JsValue>
where
    F: FnOnce(f64) + 'static,
{
    let cb = Closure::once_into_js(f);
    window()?.request_animation_frame(cb.unchecked_ref())
}

/// Attach a listener that lives as long as the page.
pub fn listen<E, F>(target: &web_sys::EventTarget, event: &str, f: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`] but registered as passive, for scroll handlers.
pub fn listen_passive<F>(target: &web_sys::EventTarget, event: &str, f: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

/// Seed for a `fastrand::Rng`, taken from the browser RNG.
pub fn seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
