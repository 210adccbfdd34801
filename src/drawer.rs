use crate::constants::*;
use crate::core::menu::{DrawerView, Menu, MenuEvent};
use crate::dom::{self, DomError};
use std::rc::Rc;
use web_sys as web;

pub struct DomDrawer {
    drawer: web::Element,
    body: web::HtmlElement,
}

impl DrawerView for DomDrawer {
    fn is_open(&self) -> bool {
        dom::has_class(&self.drawer, CLASS_DRAWER_OPEN)
    }

    fn set_open(&self, open: bool) {
        dom::set_class(&self.drawer, CLASS_DRAWER_OPEN, open);
    }

    fn set_scroll_locked(&self, locked: bool) {
        let value = if locked { SCROLL_LOCK_OVERFLOW } else { "" };
        _ = self.body.style().set_property("overflow", value);
    }
}

/// Wire the open/close buttons and the drawer's nav links.
///
/// Returns the controller so the keyboard layer can route Escape to it.
pub fn wire_mobile_menu(document: &web::Document) -> Result<Rc<Menu<DomDrawer>>, DomError> {
    let drawer = dom::require_element(document, MOBILE_MENU_ID)?;
    let body = dom::body(document)?;
    let links = dom::select_all_in(&drawer, MOBILE_NAV_LINK_SELECTOR);
    let menu = Rc::new(Menu::new(DomDrawer { drawer, body }));

    // the open button is the only way in; without it the drawer is inert
    let open_btn = dom::require_element(document, MENU_OPEN_BUTTON_ID)?;
    let m = menu.clone();
    dom::add_click_listener(&open_btn, move |_| {
        m.handle(MenuEvent::Open);
    });

    match dom::require_element(document, MENU_CLOSE_BUTTON_ID) {
        Ok(close_btn) => {
            let m = menu.clone();
            dom::add_click_listener(&close_btn, move |_| {
                m.handle(MenuEvent::Close);
            });
        }
        Err(e) => log::info!("[menu] close button unavailable: {}", e),
    }

    for link in &links {
        let m = menu.clone();
        dom::add_click_listener(link, move |_| {
            m.handle(MenuEvent::NavLinkClicked);
        });
    }
    log::info!("[menu] wired ({} nav links)", links.len());
    Ok(menu)
}
