//! Hover, scroll and timer driven flourishes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fastrand::Rng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions,
};

use super::dom;
use crate::config::EffectsConfig;
use crate::effects::{achievement_delay_ms, glitch_roll, KonamiDetector, MouseTrail};
use crate::scroll::{parallax_speed, parallax_transform, progress_transform, scroll_fraction};
use crate::tilt::{hover_delay, Tilt};

pub fn start(document: &Document, cfg: &EffectsConfig) -> Result<(), JsValue> {
    cards(document)?;
    achievements(document)?;
    smooth_anchors(document, cfg.anchor_offset)?;
    scroll_chrome(document, cfg)?;
    glitch(document, cfg)?;
    loader(document)?;
    mouse_trail(document, cfg)?;
    konami(document, cfg.konami_duration_ms)
}

/// Tilt on hover plus a ripple and a staggered hover delay on enter.
fn cards(document: &Document) -> Result<(), JsValue> {
    for (index, card) in dom::query_all(document, ".card")?.into_iter().enumerate() {
        let hovering = Rc::new(Cell::new(false));

        let (c, h) = (card.clone(), hovering.clone());
        dom::listen(&card, "mouseenter", move |_: MouseEvent| {
            h.set(true);
            let _ = dom::set_style(&c, "--hover-delay", &hover_delay(index));
            if let Err(e) = ripple(&c) {
                log::debug!("ripple skipped: {:?}", e);
            }
        })?;

        let (c, h) = (card.clone(), hovering.clone());
        dom::listen(&card, "mousemove", move |e: MouseEvent| {
            if !h.get() {
                return;
            }
            let c = c.clone();
            let (cx, cy) = (e.client_x() as f64, e.client_y() as f64);
            let _ = dom::next_frame(move |_| {
                let rect = c.get_bounding_client_rect();
                let tilt = Tilt::at(cx - rect.left(), cy - rect.top(), rect.width(), rect.height());
                let _ = dom::set_style(&c, "transform", &tilt.transform());
            });
        })?;

        let c = card.clone();
        dom::listen(&card, "mouseleave", move |_: MouseEvent| {
            hovering.set(false);
            let _ = dom::set_style(&c, "transform", "");
        })?;
    }
    Ok(())
}

fn ripple(card: &Element) -> Result<(), JsValue> {
    let ripple = dom::document()?.create_element("div")?;
    ripple.class_list().add_1("ripple")?;
    card.append_child(&ripple)?;
    dom::set_timeout(600, move || ripple.remove())?;
    Ok(())
}

fn achievements(document: &Document) -> Result<(), JsValue> {
    for (i, badge) in dom::query_all(document, ".achievement-badge")?.into_iter().enumerate() {
        dom::set_timeout(achievement_delay_ms(i), move || {
            let _ = badge.class_list().add_1("unlocked");
        })?;
    }
    Ok(())
}

fn loader(document: &Document) -> Result<(), JsValue> {
    let Some(loader) = document.query_selector(".loader")? else {
        return Ok(());
    };
    dom::set_timeout(1500, move || {
        let _ = loader.class_list().add_1("fade-out");
        let _ = dom::set_timeout(500, move || loader.remove());
    })?;
    Ok(())
}

fn smooth_anchors(document: &Document, offset: f64) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, "a[href^=\"#\"]")? {
        let a = anchor.clone();
        dom::listen(&anchor, "click", move |e: MouseEvent| {
            e.prevent_default();
            let Some(href) = a.get_attribute("href") else { return };
            let target = dom::document()
                .ok()
                .and_then(|d| d.query_selector(&href).ok().flatten())
                .and_then(|t| t.dyn_into::<HtmlElement>().ok());
            let (Some(target), Ok(window)) = (target, dom::window()) else {
                return;
            };
            let opts = ScrollToOptions::new();
            opts.set_top(target.offset_top() as f64 - offset);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        })?;
    }
    Ok(())
}

/// Header state, reading progress bar and parallax, recomputed at most
/// once per frame. One frame closure lives for the page; scroll events only
/// queue it when it is not already queued.
fn scroll_chrome(document: &Document, cfg: &EffectsConfig) -> Result<(), JsValue> {
    let window = dom::window()?;
    let queued = Rc::new(Cell::new(false));

    let frame = {
        let (doc, cfg, queued) = (document.clone(), cfg.clone(), queued.clone());
        Closure::wrap(Box::new(move || {
            queued.set(false);
            if let Err(e) = update_scroll(&doc, &cfg) {
                log::debug!("scroll update failed: {:?}", e);
            }
        }) as Box<dyn FnMut()>)
    };

    dom::listen_passive(&window, "scroll", move |_| {
        if queued.replace(true) {
            return;
        }
        let requested = dom::window()
            .and_then(|win| win.request_animation_frame(frame.as_ref().unchecked_ref()));
        if requested.is_err() {
            queued.set(false);
        }
    })
}

fn update_scroll(document: &Document, cfg: &EffectsConfig) -> Result<(), JsValue> {
    let y = dom::window()?.scroll_y()?;

    if let Some(bar) = document.query_selector(".top-bar")? {
        if y > cfg.header_scrolled_at {
            bar.class_list().add_1("scrolled")?;
        } else {
            bar.class_list().remove_1("scrolled")?;
        }
    }

    if let Some(progress) = document.get_element_by_id("scrollProgress") {
        let root = document.document_element().ok_or("no document element")?;
        let fraction = scroll_fraction(
            y,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        dom::set_style(&progress, "transform", &progress_transform(fraction))?;
    }

    for el in dom::query_all(document, "[data-parallax]")? {
        let speed = parallax_speed(el.get_attribute("data-parallax").as_deref(), cfg.parallax_fallback);
        dom::set_style(&el, "transform", &parallax_transform(y, speed))?;
    }
    Ok(())
}

fn glitch(document: &Document, cfg: &EffectsConfig) -> Result<(), JsValue> {
    let Some(title) = document.query_selector(".hero-left h1")? else {
        return Ok(());
    };
    let mut rng = Rng::with_seed(dom::seed());
    let (chance, duration) = (cfg.glitch_chance, cfg.glitch_duration_ms);
    dom::set_interval(cfg.glitch_interval_ms, move || {
        if !glitch_roll(&mut rng, chance) {
            return;
        }
        let _ = title.class_list().add_1("glitch");
        let t = title.clone();
        let _ = dom::set_timeout(duration, move || {
            let _ = t.class_list().remove_1("glitch");
        });
    })?;
    Ok(())
}

fn mouse_trail(document: &Document, cfg: &EffectsConfig) -> Result<(), JsValue> {
    let trail: Rc<RefCell<MouseTrail<Element>>> = Rc::new(RefCell::new(MouseTrail::new(cfg)));
    let mut rng = Rng::with_seed(dom::seed());
    let lifetime = cfg.trail_lifetime_ms;
    let doc = document.clone();

    dom::listen(document, "mousemove", move |e: MouseEvent| {
        let now = js_sys::Date::now();
        if !trail.borrow_mut().should_spawn(now, rng.f64()) {
            return;
        }
        let Some(body) = doc.body() else { return };
        let Ok(dot) = doc.create_element("div") else { return };
        let _ = dot.class_list().add_1("mouse-trail");
        let _ = dom::set_style(&dot, "left", &format!("{}px", e.client_x()));
        let _ = dom::set_style(&dot, "top", &format!("{}px", e.client_y()));
        if body.append_child(&dot).is_err() {
            return;
        }

        let d = dot.clone();
        let _ = dom::set_timeout(lifetime, move || d.remove());
        if let Some(oldest) = trail.borrow_mut().push(dot) {
            oldest.remove();
        }
    })
}

fn konami(document: &Document, duration_ms: i32) -> Result<(), JsValue> {
    let mut detector = KonamiDetector::default();
    let doc = document.clone();
    dom::listen(document, "keydown", move |e: KeyboardEvent| {
        if !detector.push(&e.key()) {
            return;
        }
        let Some(body) = doc.body() else { return };
        let _ = body.class_list().add_1("konami-mode");
        log::info!("konami mode");
        let _ = dom::set_timeout(duration_ms, move || {
            let _ = body.class_list().remove_1("konami-mode");
        });
    })
}
