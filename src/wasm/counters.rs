use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{dom, observe};
use crate::config::{CounterConfig, SiteConfig};
use crate::counter::CounterAnimation;
use crate::reveal::{progress_width, CounterSpec, RevealKind};

/// Wire the stat counters and progress fills.
pub fn start(document: &Document, cfg: &SiteConfig) -> Result<(), JsValue> {
    for kind in [RevealKind::Stat, RevealKind::StatBox] {
        let elements = dom::query_all(document, kind.selector())?;
        let counters = cfg.counters.clone();
        observe::watch(elements, kind, &kind.options(&cfg.reveal), move |el| {
            if let Err(e) = count_up(el, kind, &counters) {
                log::warn!("counter failed: {:?}", e);
            }
        })?;
    }

    let kind = RevealKind::Progress;
    let elements = dom::query_all(document, kind.selector())?;
    let (delay, fallback) = (cfg.counters.progress_delay_ms, cfg.counters.progress_fallback.clone());
    observe::watch(elements, kind, &kind.options(&cfg.reveal), move |el| {
        if let Err(e) = fill_progress(el, delay, &fallback) {
            log::warn!("progress fill not scheduled: {:?}", e);
        }
    })
}

/// Set the fill's width after `delay_ms`; the stylesheet animates it.
pub(crate) fn fill_progress(el: &Element, delay_ms: i32, fallback: &str) -> Result<(), JsValue> {
    let raw = RevealKind::Progress.attribute().and_then(|a| el.get_attribute(a));
    let width = progress_width(raw.as_deref(), fallback);
    let el = el.clone();
    dom::set_timeout(delay_ms, move || {
        let _ = dom::set_style(&el, "width", &width);
    })?;
    Ok(())
}

/// Start a count-up on `el`, sampled once per animation frame until done.
pub(crate) fn count_up(el: &Element, kind: RevealKind, cfg: &CounterConfig) -> Result<(), JsValue> {
    let raw = kind.attribute().and_then(|a| el.get_attribute(a));
    let Some(spec) = CounterSpec::for_kind(kind, raw.as_deref(), cfg) else {
        return Ok(());
    };
    let now = dom::window()?
        .performance()
        .map(|p| p.now())
        .unwrap_or_default();
    let anim = CounterAnimation::new(spec.target, spec.duration_ms, spec.decimals).start_at(now);
    log::debug!("counting {:?} to {}", kind, spec.target);
    schedule(el.clone(), anim)
}

fn schedule(el: Element, mut anim: CounterAnimation) -> Result<(), JsValue> {
    dom::next_frame(move |ts| {
        let frame = anim.sample(ts);
        el.set_text_content(Some(&frame.text));
        if !frame.done {
            if let Err(e) = schedule(el, anim) {
                log::warn!("counter frame not scheduled: {:?}", e);
            }
        }
    })?;
    Ok(())
}
