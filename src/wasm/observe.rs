//! IntersectionObserver plumbing shared by every reveal family.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom;
use crate::config::RevealConfig;
use crate::reveal::{ObserverOptions, RevealKind, RevealLatch};

/// Observe `elements` and call `on_reveal` the first time each one
/// intersects. The kind's marker class is added before `on_reveal` runs and
/// doubles as the guard, so a second notification is a no-op.
///
/// One observer is shared by all elements of a family.
pub fn watch<F>(
    elements: Vec<Element>,
    kind: RevealKind,
    opts: &ObserverOptions,
    mut on_reveal: F,
) -> Result<(), JsValue>
where
    F: FnMut(&Element) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: JsValue| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            reveal(&entry.target(), kind, entry.is_intersecting(), &mut on_reveal);
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(opts.threshold));
    if let Some(margin) = &opts.root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in &elements {
        if let Some(class) = kind.pending_class() {
            el.class_list().add_1(class)?;
        }
        observer.observe(el);
    }
    log::debug!("observing {} {:?} elements", elements.len(), kind);
    Ok(())
}

/// Handle one intersection notification for `target`. Returns whether this
/// notification revealed it.
pub(crate) fn reveal<F>(target: &Element, kind: RevealKind, is_intersecting: bool, on_reveal: &mut F) -> bool
where
    F: FnMut(&Element),
{
    let marker = kind.marker();
    let classes = target.class_list();
    let mut latch = RevealLatch::from_marked(classes.contains(marker));
    if !latch.observe(is_intersecting) {
        return false;
    }
    if let Err(e) = classes.add_1(marker) {
        log::warn!("could not mark {:?} element: {:?}", kind, e);
        return false;
    }
    on_reveal(target);
    true
}

/// Cards, hero blocks and section titles fade in once.
pub fn reveal_on_scroll(document: &Document, cfg: &RevealConfig) -> Result<(), JsValue> {
    let kind = RevealKind::Scroll;
    let elements = dom::query_all(document, kind.selector())?;
    watch(elements, kind, &kind.options(cfg), |_| {})
}
