//! Hover and click behavior for the skill, project and education cards.
//!
//! Every behavior is a single listener on the document that resolves the
//! card from the event target. `mouseenter`/`mouseleave` do not bubble, so
//! hover is delegated through `mouseover`/`mouseout` and only counts a
//! crossing of the card's own boundary.

use portfolio_types::{classes, icon_style, selectors};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, Node};

use crate::error::UiError;
use crate::interop::{closest, contains, event_element, set_class, Dom, EventListener};

/// Card whose boundary a `mouseover`/`mouseout` event crossed, if any.
fn crossed_card(event: &MouseEvent, selector: &str) -> Option<Element> {
    let card = event_element(event).and_then(|el| closest(&el, selector))?;
    let from_inside = event
        .related_target()
        .and_then(|t| t.dyn_into::<Node>().ok())
        .is_some_and(|related| contains(&card, &related));

    (!from_inside).then_some(card)
}

fn delegate_hover<E, L>(
    dom: &Dom,
    selector: &'static str,
    on_enter: E,
    on_leave: L,
) -> Result<Vec<EventListener>, UiError>
where
    E: Fn(&Element) -> Result<(), UiError> + 'static,
    L: Fn(&Element) -> Result<(), UiError> + 'static,
{
    let over = EventListener::new(&dom.document, "mouseover", move |event| {
        let Ok(event) = event.dyn_into::<MouseEvent>() else {
            return;
        };
        if let Some(card) = crossed_card(&event, selector) {
            if let Err(e) = on_enter(&card) {
                log::warn!("{selector} enter failed: {e}");
            }
        }
    })?;

    let out = EventListener::new(&dom.document, "mouseout", move |event| {
        let Ok(event) = event.dyn_into::<MouseEvent>() else {
            return;
        };
        if let Some(card) = crossed_card(&event, selector) {
            if let Err(e) = on_leave(&card) {
                log::warn!("{selector} leave failed: {e}");
            }
        }
    })?;

    Ok(vec![over, out])
}

fn skill_icon(card: &Element) -> Option<HtmlElement> {
    card.query_selector(selectors::SKILL_ICON)
        .ok()
        .flatten()
        .and_then(|icon| icon.dyn_into::<HtmlElement>().ok())
}

pub fn setup_skill_cards(dom: &Dom) -> Result<Vec<EventListener>, UiError> {
    delegate_hover(
        dom,
        selectors::SKILL_CARD,
        |card| {
            set_class(card, classes::FLOATING, true)?;
            if let Some(icon) = skill_icon(card) {
                let style = icon.style();
                style.set_property("transform", icon_style::HOVER_TRANSFORM)?;
                style.set_property("transition", icon_style::TRANSITION)?;
            }
            Ok(())
        },
        |card| {
            set_class(card, classes::FLOATING, false)?;
            if let Some(icon) = skill_icon(card) {
                icon.style()
                    .set_property("transform", icon_style::REST_TRANSFORM)?;
            }
            Ok(())
        },
    )
}

pub fn setup_project_cards(dom: &Dom) -> Result<Vec<EventListener>, UiError> {
    delegate_hover(
        dom,
        selectors::PROJECT_CARD,
        |card| set_class(card, classes::EXPANDED, true),
        |card| set_class(card, classes::EXPANDED, false),
    )
}

pub fn setup_education_cards(dom: &Dom) -> Result<Vec<EventListener>, UiError> {
    let on_click = EventListener::new(&dom.document, "click", move |event| {
        let Some(target) = event_element(&event) else {
            return;
        };
        let Some(card) = closest(&target, selectors::EDUCATION_CARD) else {
            return;
        };

        // Buttons inside the card keep their own behavior.
        let on_button =
            closest(&target, selectors::BUTTON).is_some_and(|btn| contains(&card, &btn));
        if on_button {
            return;
        }

        if let Err(e) = card.class_list().toggle(classes::ACTIVE_CARD) {
            log::warn!("education card toggle failed: {:?}", e);
        }
    })?;

    Ok(vec![on_click])
}
