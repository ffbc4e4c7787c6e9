use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, Node};

use super::dom;
use crate::menu::{MenuAction, MenuEvent, MenuState};

struct MobileMenu {
    toggle: Element,
    nav: Element,
    body: HtmlElement,
    state: RefCell<MenuState>,
}

impl MobileMenu {
    fn dispatch(&self, event: MenuEvent) {
        let action = self.state.borrow_mut().handle(event);
        let result = match action {
            MenuAction::Open => self.apply(true),
            MenuAction::Close => self.apply(false),
            MenuAction::Nothing => Ok(()),
        };
        if let Err(e) = result {
            log::warn!("menu update failed: {:?}", e);
        }
    }

    fn apply(&self, open: bool) -> Result<(), JsValue> {
        for el in [&self.toggle, &self.nav] {
            if open {
                el.class_list().add_1("active")?;
            } else {
                el.class_list().remove_1("active")?;
            }
        }
        self.body
            .style()
            .set_property("overflow", if open { "hidden" } else { "" })
    }

    fn contains(&self, target: Option<&Node>) -> bool {
        self.toggle.contains(target) || self.nav.contains(target)
    }
}

pub fn start(document: &Document) -> Result<(), JsValue> {
    let (Some(toggle), Some(nav)) = (
        document.query_selector(".mobile-menu-toggle")?,
        document.query_selector(".nav-menu")?,
    ) else {
        return Ok(());
    };
    let body = document.body().ok_or("no body")?;
    let menu = Rc::new(MobileMenu {
        toggle: toggle.clone(),
        nav: nav.clone(),
        body,
        state: RefCell::new(MenuState::default()),
    });

    let m = menu.clone();
    dom::listen(&toggle, "click", move |e: MouseEvent| {
        e.stop_propagation();
        m.dispatch(MenuEvent::Toggle);
    })?;

    let links = nav.query_selector_all(".nav-link")?;
    for i in 0..links.length() {
        let Some(link) = links.item(i) else { continue };
        let m = menu.clone();
        dom::listen(&link, "click", move |_: MouseEvent| m.dispatch(MenuEvent::LinkClicked))?;
    }

    let m = menu.clone();
    dom::listen(document, "click", move |e: MouseEvent| {
        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
        if m.state.borrow().is_open() && !m.contains(target.as_ref()) {
            m.dispatch(MenuEvent::OutsideClick);
        }
    })?;

    dom::listen(&nav, "click", |e: MouseEvent| e.stop_propagation())?;

    let m = menu;
    dom::listen(document, "keydown", move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            m.dispatch(MenuEvent::Escape);
        }
    })
}
