use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use portfolio_types::{classes, classify_link, selectors, LinkAction};
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement, Window};

use crate::error::UiError;
use crate::interop::{closest, event_element, Dom, EventListener};

/// Performs the actual navigation once the fade-out is done.
pub type Navigator = Rc<dyn Fn(&str)>;

/// Assigns `href` to the window's location.
pub fn location_navigator(window: &Window) -> Navigator {
    let location = window.location();
    Rc::new(move |href: &str| {
        if let Err(e) = location.set_href(href) {
            log::warn!("navigation to {href} failed: {:?}", e);
        }
    })
}

/// Leaving the page: fade the body out, then navigate.
///
/// Holds the pending navigation timer; a later exit replaces an earlier
/// one, and dropping the exit cancels it.
pub struct PageExit {
    body: HtmlElement,
    delay_ms: u32,
    navigate: Navigator,
    pending: RefCell<Option<Timeout>>,
}

impl PageExit {
    /// `delay_ms` must equal the stylesheet's body transition duration.
    pub fn new(body: HtmlElement, delay_ms: u32, navigate: Navigator) -> Self {
        Self {
            body,
            delay_ms,
            navigate,
            pending: RefCell::new(None),
        }
    }

    pub fn leave_to(&self, href: String) {
        if let Err(e) = self.body.class_list().add_1(classes::TRANSITION_OUT) {
            log::warn!("could not mark page as leaving: {:?}", e);
        }

        let navigate = Rc::clone(&self.navigate);
        let timeout = Timeout::new(self.delay_ms, move || navigate(&href));
        *self.pending.borrow_mut() = Some(timeout);
    }

    fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

impl Drop for PageExit {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn setup(dom: &Dom, exit: &Rc<PageExit>) -> Result<Vec<EventListener>, UiError> {
    let page_origin = dom.origin();
    let exit = Rc::clone(exit);

    let on_click = EventListener::new(&dom.document, "click", move |event| {
        let Some(anchor) = event_element(&event)
            .and_then(|el| closest(&el, selectors::ANCHOR))
            .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        else {
            return;
        };

        let href = anchor.get_attribute("href");
        let action = classify_link(href.as_deref(), &anchor.origin(), &page_origin);
        if let LinkAction::Transition(href) = action {
            event.prevent_default();
            exit.leave_to(href);
        }
    })?;

    dom.body.class_list().add_1(classes::TRANSITION_IN)?;

    Ok(vec![on_click])
}
