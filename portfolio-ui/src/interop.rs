use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Node, NodeList, Window};

use crate::error::UiError;

/// The browser singletons every setup step works against.
#[derive(Debug, Clone)]
pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
}

impl Dom {
    pub fn new(window: Window) -> Result<Self, UiError> {
        let document = window.document().ok_or(UiError::NoDocument)?;
        let body = document.body().ok_or(UiError::NoBody)?;
        Ok(Self {
            window,
            document,
            body,
        })
    }

    pub fn from_global() -> Result<Self, UiError> {
        Self::new(web_sys::window().ok_or(UiError::NoWindow)?)
    }

    pub fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    pub fn origin(&self) -> String {
        self.window.location().origin().unwrap_or_default()
    }

    /// Viewport width in CSS pixels, if the browser reports one.
    pub fn viewport_width(&self) -> Option<f64> {
        self.window.inner_width().ok()?.as_f64()
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, UiError> {
        Ok(elements(self.document.query_selector_all(selector)?))
    }
}

/// An event listener that is removed from its target when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(
        target: &EventTarget,
        event_type: &'static str,
        handler: F,
    ) -> Result<Self, UiError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The element an event was dispatched to. Text-node targets resolve to
/// their parent element.
pub fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(element) => Some(element),
        Err(other) => other.dyn_into::<Node>().ok()?.parent_element(),
    }
}

/// Nearest inclusive ancestor of `element` matching `selector`.
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Whether `node` is `ancestor` or one of its descendants.
pub fn contains(ancestor: &Element, node: &Node) -> bool {
    ancestor.contains(Some(node))
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), UiError> {
    let list = element.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}
