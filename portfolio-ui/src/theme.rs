use std::rc::Rc;

use portfolio_types::{
    classes, selectors, DarkModePreference, MemoryStore, PageConfig, PreferenceStore,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Storage, Window};

use crate::error::UiError;
use crate::interop::{set_class, Dom, EventListener};

/// `localStorage` behind the preference seam.
pub struct LocalStore(Storage);

impl PreferenceStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Err(e) = self.0.set_item(key, value) {
            log::warn!("could not persist {key}: {:?}", e);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Err(e) = self.0.remove_item(key) {
            log::warn!("could not clear {key}: {:?}", e);
        }
    }
}

/// The origin's `localStorage`, or a per-page in-memory store when the
/// browser denies access (private mode, disabled storage).
pub fn preference_store(window: &Window) -> Rc<dyn PreferenceStore> {
    match window.local_storage() {
        Ok(Some(storage)) => Rc::new(LocalStore(storage)),
        _ => {
            log::warn!("localStorage unavailable; dark mode will not persist");
            Rc::new(MemoryStore::new())
        }
    }
}

pub fn setup(dom: &Dom, config: &PageConfig) -> Result<Vec<EventListener>, UiError> {
    let store = preference_store(&dom.window);
    let preference = DarkModePreference::new(config.dark_mode_key.clone());
    let toggle = dom
        .document
        .get_element_by_id(selectors::DARK_MODE_TOGGLE_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    // Sync before wiring: setting `checked` programmatically fires no change
    // event, so the restored state is never written back.
    if preference.load(store.as_ref()) {
        set_class(&dom.body, classes::DARK_MODE, true)?;
        if let Some(toggle) = &toggle {
            toggle.set_checked(true);
        }
    }

    let Some(toggle) = toggle else {
        return Ok(Vec::new());
    };

    let body = dom.body.clone();
    let input = toggle.clone();
    let on_change = EventListener::new(&toggle, "change", move |_event| {
        let enabled = input.checked();
        if let Err(e) = set_class(&body, classes::DARK_MODE, enabled) {
            log::warn!("dark mode class update failed: {e}");
        }
        preference.set(store.as_ref(), enabled);
    })?;

    Ok(vec![on_change])
}
