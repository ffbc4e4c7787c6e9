//! Contact form submission against the relay endpoint.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, FormData, HtmlButtonElement, HtmlFormElement, Request, RequestInit, Response};

use super::{dom, notify};
use crate::config::FormConfig;
use crate::error::{SiteError, SiteResult};
use crate::form::{
    failure_text, interpret_reply, is_success_redirect, validate, NoticeKind, SENDING_HTML,
    SENT_LABEL, SUCCESS_TEXT,
};

pub(crate) struct ContactForm {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    cfg: FormConfig,
}

pub fn start(document: &Document, cfg: &FormConfig) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id("contactForm") else {
        return Ok(());
    };
    let form: HtmlFormElement = form.dyn_into()?;
    let button = document
        .get_element_by_id("submitBtn")
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());

    check_redirect(cfg)?;

    let contact = Rc::new(ContactForm::new(form.clone(), button, cfg.clone()));
    dom::listen(&form, "submit", move |e: web_sys::Event| {
        e.prevent_default();
        let contact = contact.clone();
        spawn_local(async move { contact.submit().await });
    })
}

/// The relay can redirect back with `?success=true`; acknowledge it once
/// and tidy the URL.
fn check_redirect(cfg: &FormConfig) -> Result<(), JsValue> {
    let window = dom::window()?;
    let location = window.location();
    if !is_success_redirect(&location.search()?) {
        return Ok(());
    }
    notify::show(SUCCESS_TEXT, NoticeKind::Success, cfg.notification_ms)?;
    let title = dom::document()?.title();
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, &title, Some(&location.pathname()?))?;
    Ok(())
}

impl ContactForm {
    pub(crate) fn new(form: HtmlFormElement, button: Option<HtmlButtonElement>, cfg: FormConfig) -> Self {
        ContactForm { form, button, cfg }
    }

    /// Validate, post, and report the outcome through a toast and the
    /// submit button's label.
    pub(crate) async fn submit(&self) {
        let data = match FormData::new_with_form(&self.form) {
            Ok(d) => d,
            Err(e) => {
                log::error!("form data unavailable: {:?}", e);
                return;
            }
        };

        if let Err(err) = validate(|field| data.get(field).as_string()) {
            self.notify(&failure_text(&err), NoticeKind::Error);
            return;
        }

        let original = self.button.as_ref().and_then(|b| b.text_content()).unwrap_or_default();
        if let Some(button) = &self.button {
            button.set_inner_html(SENDING_HTML);
            button.set_disabled(true);
        }

        match send(&self.cfg.endpoint, &data).await {
            Ok(()) => {
                self.notify(SUCCESS_TEXT, NoticeKind::Success);
                self.form.reset();
                if let Some(button) = self.button.clone() {
                    button.set_inner_html(SENT_LABEL);
                    let restore = dom::set_timeout(self.cfg.restore_after_ms, move || {
                        button.set_inner_html(&original);
                        button.set_disabled(false);
                    });
                    if let Err(e) = restore {
                        log::warn!("submit button restore not scheduled: {:?}", e);
                    }
                }
            }
            Err(err) => {
                log::error!("Form submission error: {err}");
                self.notify(&failure_text(&err), NoticeKind::Error);
                if let Some(button) = &self.button {
                    button.set_inner_html(&original);
                    button.set_disabled(false);
                }
            }
        }
    }

    fn notify(&self, message: &str, kind: NoticeKind) {
        if let Err(e) = notify::show(message, kind, self.cfg.notification_ms) {
            log::warn!("notification failed: {:?}", e);
        }
    }
}

/// POST the form once and fold the relay's JSON answer into a result.
async fn send(endpoint: &str, data: &FormData) -> SiteResult<()> {
    let net = |e: JsValue| SiteError::Network(format!("{e:?}"));

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(data);
    let request = Request::new_with_str_and_init(endpoint, &init).map_err(net)?;

    let window = dom::window().map_err(net)?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(net)?
        .dyn_into()
        .map_err(net)?;
    let text = JsFuture::from(resp.text().map_err(net)?)
        .await
        .map_err(net)?
        .as_string()
        .unwrap_or_default();

    log::debug!("relay answered {}: {}", resp.status(), text);
    interpret_reply(&text)
}
