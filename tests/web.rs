#![cfg(target_arch = "wasm32")]

use landing_wasm::error::SiteError;
use landing_wasm::form::{failure_text, interpret_reply, validate, MISSING_FIELDS_TEXT};
use landing_wasm::reveal::{progress_width, RevealKind};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn build_form(message: &str) -> web_sys::HtmlFormElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let form: web_sys::HtmlFormElement = document
        .create_element("form")
        .unwrap()
        .dyn_into()
        .unwrap();
    for (name, value) in [
        ("name", "Ada"),
        ("email", "ada@example.com"),
        ("topic", "hello"),
        ("message", message),
    ] {
        let input = document.create_element("input").unwrap();
        input.set_attribute("name", name).unwrap();
        input.set_attribute("value", value).unwrap();
        form.append_child(&input).unwrap();
    }
    document.body().unwrap().append_child(&form).unwrap();
    form
}

#[wasm_bindgen_test]
fn empty_message_is_caught_before_sending() {
    let form = build_form("");
    let data = web_sys::FormData::new_with_form(&form).unwrap();
    let err = validate(|f| data.get(f).as_string()).unwrap_err();
    assert!(matches!(err, SiteError::MissingField("message")));
    assert_eq!(failure_text(&err), MISSING_FIELDS_TEXT);
    form.remove();
}

#[wasm_bindgen_test]
fn filled_form_validates() {
    let form = build_form("Hi there");
    let data = web_sys::FormData::new_with_form(&form).unwrap();
    assert!(validate(|f| data.get(f).as_string()).is_ok());
    form.remove();
}

#[wasm_bindgen_test]
fn relay_failure_message_reaches_the_visitor() {
    let err = interpret_reply(r#"{"success":false,"message":"Quota exceeded"}"#).unwrap_err();
    assert!(failure_text(&err).contains("Quota exceeded"));
}

#[wasm_bindgen_test]
fn selectors_are_valid_css() {
    let document = web_sys::window().unwrap().document().unwrap();
    for kind in RevealKind::ALL {
        assert!(document.query_selector_all(kind.selector()).is_ok());
    }
}

#[wasm_bindgen_test]
fn progress_width_applies_as_style() {
    let document = web_sys::window().unwrap().document().unwrap();
    let fill: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    fill.set_attribute("data-progress", "85").unwrap();
    let width = progress_width(fill.get_attribute("data-progress").as_deref(), "100");
    fill.style().set_property("width", &width).unwrap();
    assert_eq!(fill.style().get_property_value("width").unwrap(), "85%");
}
