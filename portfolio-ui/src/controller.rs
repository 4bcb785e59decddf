use std::rc::Rc;

use portfolio_types::{selectors, Page, PageConfig};
use web_sys::Window;

use crate::cards;
use crate::error::UiError;
use crate::interop::{Dom, EventListener};
use crate::navigation;
use crate::reveal::RevealObserver;
use crate::theme;
use crate::transitions::{self, location_navigator, Navigator, PageExit};
use crate::typing::TypingHandle;

/// Owns everything wired into one page load.
///
/// Dropping the controller removes its listeners, disconnects the reveal
/// observers and cancels both the typing timer and any pending navigation.
pub struct PageController {
    dom: Dom,
    config: PageConfig,
    exit: Rc<PageExit>,
    listeners: Vec<EventListener>,
    observers: Vec<RevealObserver>,
    typing: Option<TypingHandle>,
}

impl PageController {
    /// Build a controller, reading optional config from the body's
    /// `data-portfolio-config` attribute.
    pub fn new(window: Window) -> Result<Self, UiError> {
        let dom = Dom::new(window)?;
        let config =
            PageConfig::from_attribute(dom.body.get_attribute(selectors::CONFIG_ATTR).as_deref());
        Ok(Self::with_dom(dom, config))
    }

    pub fn with_config(window: Window, config: PageConfig) -> Result<Self, UiError> {
        Ok(Self::with_dom(Dom::new(window)?, config))
    }

    fn with_dom(dom: Dom, config: PageConfig) -> Self {
        let navigate = location_navigator(&dom.window);
        let exit = Rc::new(PageExit::new(
            dom.body.clone(),
            config.transition_delay_ms,
            navigate,
        ));
        Self {
            dom,
            config,
            exit,
            listeners: Vec::new(),
            observers: Vec::new(),
            typing: None,
        }
    }

    /// Replace how the page navigates after its fade-out. Call before `mount`.
    pub fn with_navigator(mut self, navigate: Navigator) -> Self {
        self.exit = Rc::new(PageExit::new(
            self.dom.body.clone(),
            self.config.transition_delay_ms,
            navigate,
        ));
        self
    }

    pub fn current_page(&self) -> Page {
        Page::from_pathname(&self.dom.pathname())
    }

    pub fn typing(&self) -> Option<&TypingHandle> {
        self.typing.as_ref()
    }

    /// Wire every enhancement for `page`. A step that fails is logged and
    /// skipped; the rest still run.
    pub fn mount(&mut self, page: Page) {
        log::debug!("mounting enhancements for {:?}", page);

        let result = navigation::setup(&self.dom, &self.config, &self.exit);
        self.keep("navigation", result);

        self.setup_scroll_reveal();

        match page {
            Page::Home => self.setup_typing_effect(),
            Page::Skills => {
                let result = cards::setup_skill_cards(&self.dom);
                self.keep("skill cards", result);
            }
            Page::Projects => {
                let result = cards::setup_project_cards(&self.dom);
                self.keep("project cards", result);
            }
            Page::Education => {
                let result = cards::setup_education_cards(&self.dom);
                self.keep("education cards", result);
            }
            Page::Other => {}
        }

        let result = theme::setup(&self.dom, &self.config);
        self.keep("dark mode", result);

        let result = transitions::setup(&self.dom, &self.exit);
        self.keep("page transitions", result);
    }

    fn keep(&mut self, feature: &str, result: Result<Vec<EventListener>, UiError>) {
        match result {
            Ok(listeners) => self.listeners.extend(listeners),
            Err(e) => log::warn!("{feature} disabled: {e}"),
        }
    }

    fn setup_scroll_reveal(&mut self) {
        let threshold = self.config.reveal_threshold;
        for selector in [selectors::FADE_IN, selectors::SLIDE_IN] {
            match RevealObserver::watch(&self.dom, selector, threshold) {
                Ok(observer) => self.observers.push(observer),
                Err(e) => log::warn!("scroll reveal for {selector} disabled: {e}"),
            }
        }
    }

    fn setup_typing_effect(&mut self) {
        if let Some(element) = self.dom.query(selectors::TYPE_EFFECT) {
            self.typing = Some(TypingHandle::start(element, self.config.typing_interval_ms));
        }
    }
}
