use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::dom;
use crate::config::ParticleConfig;
use crate::particles::{fill_style, ParticleField};

fn viewport() -> Result<(f64, f64), JsValue> {
    let win = dom::window()?;
    let w = win.inner_width()?.as_f64().unwrap_or(0.0);
    let h = win.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w, h))
}

/// Attach the particle canvas to `layer` and run the field forever.
pub fn start(layer: &Element, cfg: &ParticleConfig) -> Result<(), JsValue> {
    let document = dom::document()?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.class_list().add_1("particle-canvas")?;
    layer.append_child(&canvas)?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d canvas not supported")?
        .dyn_into()?;

    let (w, h) = viewport()?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);

    let mut rng = Rng::with_seed(dom::seed());
    let field = Rc::new(RefCell::new(ParticleField::new(w, h, cfg, &mut rng)));
    log::debug!("particle field: {} particles on {}x{}", field.borrow().len(), w, h);

    // Resize canvas to fit window; the ensemble keeps bouncing in the new bounds.
    let resize_closure = {
        let canvas = canvas.clone();
        let field = field.clone();
        Closure::wrap(Box::new(move || {
            let Ok((w, h)) = viewport() else { return };
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
            field.borrow_mut().resize(w, h);
        }) as Box<dyn FnMut()>)
    };
    dom::window()?
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let color = cfg.color;
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut field = field.borrow_mut();
        let (w, h) = field.size();
        ctx.clear_rect(0.0, 0.0, w, h);

        field.advance();
        for p in field.particles() {
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
            ctx.set_fill_style_str(&fill_style(color, p.opacity));
            ctx.fill();
        }

        // schedule next
        if let Some(win) = window() {
            if let Some(cb) = f.borrow().as_ref() {
                let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));

    dom::window()?.request_animation_frame(
        g.borrow()
            .as_ref()
            .ok_or("animation closure missing")?
            .as_ref()
            .unchecked_ref(),
    )?;

    Ok(())
}
