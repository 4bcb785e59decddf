/// What to do with a click on an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Leave the click to the browser.
    Default,
    /// Fade the page out, then navigate to this href.
    Transition(String),
}

pub fn classify_link(href: Option<&str>, link_origin: &str, page_origin: &str) -> LinkAction {
    let Some(href) = href else {
        return LinkAction::Default;
    };

    if href.starts_with('#') || link_origin != page_origin {
        return LinkAction::Default;
    }

    LinkAction::Transition(href.to_string())
}
