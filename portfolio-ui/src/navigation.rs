use std::rc::Rc;

use portfolio_types::{
    active_link_index, back_to_top_visible, classes, current_filename, is_narrow_viewport,
    selectors, PageConfig,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node, ScrollBehavior, ScrollToOptions};

use crate::error::UiError;
use crate::interop::{closest, contains, event_element, has_class, set_class, Dom, EventListener};
use crate::transitions::PageExit;

/// The `nav` container and its menu toggle, whose flags always move together.
#[derive(Clone)]
pub struct MobileMenu {
    nav: Element,
    toggle: Element,
}

impl MobileMenu {
    pub fn new(nav: Element, toggle: Element) -> Self {
        Self { nav, toggle }
    }

    pub fn is_open(&self) -> bool {
        has_class(&self.nav, classes::MOBILE_ACTIVE)
    }

    pub fn set_open(&self, open: bool) -> Result<(), UiError> {
        set_class(&self.nav, classes::MOBILE_ACTIVE, open)?;
        set_class(&self.toggle, classes::ACTIVE, open)
    }

    pub fn toggle(&self) -> Result<(), UiError> {
        self.set_open(!self.is_open())
    }

    fn contains(&self, node: &Node) -> bool {
        contains(&self.nav, node) || contains(&self.toggle, node)
    }
}

pub fn setup(
    dom: &Dom,
    config: &PageConfig,
    exit: &Rc<PageExit>,
) -> Result<Vec<EventListener>, UiError> {
    let mut listeners = Vec::new();

    highlight_current_link(dom)?;

    let nav = dom.query(selectors::NAV);
    let toggle = dom.query(selectors::MENU_TOGGLE);
    match (nav, toggle) {
        (Some(nav), Some(toggle)) => {
            let menu = MobileMenu::new(nav, toggle);
            listeners.extend(setup_mobile_menu(dom, config, menu)?);
        }
        (None, Some(_)) => log::debug!("menu toggle without a nav container; not wired"),
        _ => {}
    }

    if let Some(button) = dom.query(selectors::BACK_TO_TOP) {
        listeners.extend(setup_back_to_top(dom, config, button)?);
    }

    listeners.push(setup_nav_arrows(dom, exit)?);

    Ok(listeners)
}

fn highlight_current_link(dom: &Dom) -> Result<(), UiError> {
    let links = dom.query_all(selectors::NAV_LINKS)?;
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    let pathname = dom.pathname();

    if let Some(index) = active_link_index(&hrefs, current_filename(&pathname)) {
        links[index].class_list().add_1(classes::ACTIVE)?;
    }
    Ok(())
}

fn setup_mobile_menu(
    dom: &Dom,
    config: &PageConfig,
    menu: MobileMenu,
) -> Result<Vec<EventListener>, UiError> {
    let mut listeners = Vec::new();

    let toggle_menu = menu.clone();
    listeners.push(EventListener::new(&menu.toggle, "click", move |_event| {
        if let Err(e) = toggle_menu.toggle() {
            log::warn!("menu toggle failed: {e}");
        }
    })?);

    // Evaluated once; resizing later does not add or remove these handlers.
    let narrow = dom
        .viewport_width()
        .is_some_and(|width| is_narrow_viewport(width, config.mobile_breakpoint));
    if !narrow {
        return Ok(listeners);
    }

    let outside = menu.clone();
    listeners.push(EventListener::new(&dom.document, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        if outside.is_open() && !outside.contains(&target) {
            if let Err(e) = outside.set_open(false) {
                log::warn!("closing menu on outside click failed: {e}");
            }
        }
    })?);

    let on_link = menu.clone();
    listeners.push(EventListener::new(&dom.document, "click", move |event| {
        let is_nav_link = event_element(&event)
            .and_then(|el| closest(&el, selectors::NAV_LINKS))
            .is_some();
        if is_nav_link {
            if let Err(e) = on_link.set_open(false) {
                log::warn!("closing menu on link click failed: {e}");
            }
        }
    })?);

    log::debug!("narrow viewport: menu closes on outside click and link click");
    Ok(listeners)
}

fn setup_back_to_top(
    dom: &Dom,
    config: &PageConfig,
    button: Element,
) -> Result<Vec<EventListener>, UiError> {
    let window = dom.window.clone();
    let threshold = config.back_to_top_threshold;
    let on_scroll_button = button.clone();
    let on_scroll = EventListener::new(&dom.window, "scroll", move |_event| {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let visible = back_to_top_visible(scroll_y, threshold);
        if let Err(e) = set_class(&on_scroll_button, classes::VISIBLE, visible) {
            log::warn!("back-to-top update failed: {e}");
        }
    })?;

    let window = dom.window.clone();
    let on_click = EventListener::new(&button, "click", move |_event| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    })?;

    Ok(vec![on_scroll, on_click])
}

fn setup_nav_arrows(dom: &Dom, exit: &Rc<PageExit>) -> Result<EventListener, UiError> {
    let exit = Rc::clone(exit);

    EventListener::new(&dom.document, "click", move |event| {
        let target = event_element(&event)
            .and_then(|el| closest(&el, selectors::NAV_ARROW))
            .and_then(|arrow| arrow.get_attribute(selectors::NAV_ARROW_TARGET_ATTR))
            .filter(|page| !page.is_empty());
        if let Some(page) = target {
            exit.leave_to(page);
        }
    })
}
