use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::form::NoticeKind;

const NOTIFICATION_CLASS: &str = "form-notification";
const SLIDE_OUT_MS: i32 = 400;

const STYLES: &str = r#"
  @keyframes spin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
  }

  @keyframes slideInRight {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
  }

  @keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
  }

  .btn-primary:disabled {
    cursor: not-allowed !important;
    transform: none !important;
  }

  @media (max-width: 640px) {
    .form-notification {
      right: 20px !important;
      left: 20px !important;
      top: 80px !important;
      font-size: 14px !important;
      padding: 16px 20px !important;
    }
  }
"#;

/// Inject the notification and spinner keyframes.
pub fn install_styles(document: &Document) -> Result<(), JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(STYLES));
    head.append_child(&style)?;
    Ok(())
}

/// Show a transient toast, replacing any toast already on screen.
pub fn show(message: &str, kind: NoticeKind, visible_ms: i32) -> Result<(), JsValue> {
    let document = dom::document()?;
    if let Some(existing) = document.query_selector(&format!(".{NOTIFICATION_CLASS}"))? {
        existing.remove();
    }

    let note: HtmlElement = document.create_element("div")?.dyn_into()?;
    note.set_class_name(&format!("{NOTIFICATION_CLASS} glass"));
    note.style().set_css_text(&kind.css());
    note.set_text_content(Some(message));
    document.body().ok_or("no body")?.append_child(&note)?;

    dom::set_timeout(visible_ms, move || {
        let _ = note
            .style()
            .set_property("animation", "slideOutRight 0.4s ease-out");
        let _ = dom::set_timeout(SLIDE_OUT_MS, move || note.remove());
    })?;
    Ok(())
}
