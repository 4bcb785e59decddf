pub mod cards;
pub mod controller;
pub mod error;
pub mod interop;
pub mod navigation;
pub mod reveal;
pub mod theme;
pub mod transitions;
pub mod typing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use controller::PageController;
pub use error::UiError;
pub use interop::{Dom, EventListener};

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Enhance the current page once its markup has been parsed.
pub fn boot() -> Result<(), UiError> {
    let dom = Dom::from_global()?;

    if dom.document.ready_state() != "loading" {
        return mount_current_page();
    }

    let on_ready = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Err(e) = mount_current_page() {
            log::error!("page enhancements failed to start: {e}");
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    dom.document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;

    // DOMContentLoaded fires once per page; keep the callback for its lifetime.
    on_ready.forget();
    Ok(())
}

fn mount_current_page() -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let mut controller = PageController::new(window)?;
    let page = controller.current_page();
    controller.mount(page);

    CONTROLLER.with(|slot| slot.replace(Some(controller)));
    Ok(())
}

/// Remove every listener, observer and timer installed by `boot`.
#[wasm_bindgen]
pub fn teardown() {
    if CONTROLLER.with(|slot| slot.borrow_mut().take()).is_some() {
        log::debug!("page enhancements torn down");
    }
}
