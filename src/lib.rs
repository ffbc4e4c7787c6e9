#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Page logic that does not touch the DOM builds everywhere so it can be
// unit tested on the host.

pub mod config;
pub mod counter;
pub mod effects;
pub mod error;
pub mod form;
pub mod menu;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod tilt;

pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
    use crate::error::SiteError;

    mod counters;
    mod dom;
    mod effects;
    mod form;
    mod menu;
    mod notify;
    mod observe;
    mod render;
    #[cfg(test)]
    mod tests;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let document = dom::document()?;
        let cfg = load_config(&document);
        let level = if cfg.verbose {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        console_log::init_with_level(level).ok();

        notify::install_styles(&document)?;

        // Each component is optional: a page without the hook, or a browser
        // without the API, just loses that component.
        let body = document.body().ok_or("no body")?;
        match document.query_selector(".bg-layer")? {
            Some(layer) => {
                report("particle field", render::start(&layer, &cfg.particles));
            }
            None => log::warn!("no .bg-layer, particle field disabled"),
        }
        report("scroll reveal", observe::reveal_on_scroll(&document, &cfg.reveal));
        report("counters", counters::start(&document, &cfg));
        report("mobile menu", menu::start(&document));
        report("effects", effects::start(&document, &cfg.effects));
        report("contact form", form::start(&document, &cfg.form));

        body.class_list().add_1("loaded")?;

        log::info!("🎮 Final Strike - All systems operational");
        log::debug!("config: {:?}", cfg);
        Ok(())
    }

    /// Log a component that failed to start; the rest of the page carries on.
    pub(crate) fn report(component: &str, result: Result<(), JsValue>) -> Option<SiteError> {
        let err = SiteError::from(result.err()?);
        log::warn!("{component} disabled: {err}");
        Some(err)
    }

    fn load_config(document: &web_sys::Document) -> SiteConfig {
        let text = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match text {
            None => SiteConfig::default(),
            Some(text) => SiteConfig::from_json(&text).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("ignoring #{CONFIG_ELEMENT_ID}: {e}").into());
                SiteConfig::default()
            }),
        }
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
