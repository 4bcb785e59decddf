use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use portfolio_types::{classes, TypingStep, Typewriter};
use web_sys::Element;

struct Typing {
    element: Element,
    typewriter: RefCell<Typewriter>,
    interval_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

/// A running typing effect. Dropping it cancels the next pending step.
pub struct TypingHandle {
    typing: Rc<Typing>,
}

impl TypingHandle {
    /// Clear `element` and type its original text back one character per
    /// `interval_ms`, adding `typing-complete` with the last character.
    pub fn start(element: Element, interval_ms: u32) -> Self {
        let text = element.text_content().unwrap_or_default();
        element.set_text_content(Some(""));

        let typing = Rc::new(Typing {
            element,
            typewriter: RefCell::new(Typewriter::new(&text)),
            interval_ms,
            pending: RefCell::new(None),
        });

        if typing.typewriter.borrow().is_finished() {
            mark_complete(&typing.element);
        } else {
            schedule_step(&typing);
        }

        Self { typing }
    }

    pub fn is_running(&self) -> bool {
        self.typing.pending.borrow().is_some()
    }

    pub fn cancel(&self) {
        self.typing.pending.borrow_mut().take();
    }
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule_step(typing: &Rc<Typing>) {
    let weak: Weak<Typing> = Rc::downgrade(typing);
    let timeout = Timeout::new(typing.interval_ms, move || {
        let Some(typing) = weak.upgrade() else {
            return;
        };
        typing.pending.borrow_mut().take();

        if !typing.element.is_connected() {
            log::debug!("typing target left the document; stopping");
            return;
        }

        let step = typing.typewriter.borrow_mut().step();
        match step {
            Some(TypingStep::Reveal(visible)) => {
                typing.element.set_text_content(Some(&visible));
                schedule_step(&typing);
            }
            Some(TypingStep::Finished(visible)) => {
                typing.element.set_text_content(Some(&visible));
                mark_complete(&typing.element);
            }
            None => {}
        }
    });

    *typing.pending.borrow_mut() = Some(timeout);
}

fn mark_complete(element: &Element) {
    if let Err(e) = element.class_list().add_1(classes::TYPING_COMPLETE) {
        log::warn!("could not mark typing complete: {:?}", e);
    }
}
