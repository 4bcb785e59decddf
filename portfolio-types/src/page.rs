/// Filename the home page is linked as in the navigation.
pub const HOME_FILENAME: &str = "index.html";

/// The page being enhanced, chosen from the last path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Skills,
    Projects,
    Education,
    Other,
}

impl Page {
    pub fn from_filename(filename: &str) -> Self {
        match filename {
            "" | "/" | HOME_FILENAME => Page::Home,
            "skills.html" => Page::Skills,
            "projects.html" => Page::Projects,
            "education.html" => Page::Education,
            _ => Page::Other,
        }
    }

    pub fn from_pathname(pathname: &str) -> Self {
        Self::from_filename(current_filename(pathname))
    }
}

/// Last `/`-separated segment of a URL path; empty for the site root.
pub fn current_filename(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or("")
}

/// The `href` a navigation link must carry to be the current page's link.
pub fn nav_target(filename: &str) -> &str {
    if filename.is_empty() {
        HOME_FILENAME
    } else {
        filename
    }
}

/// Index of the navigation link to mark active, if any.
///
/// Only the first exact match is returned so at most one link is ever
/// highlighted. Links without an `href` never match.
pub fn active_link_index<S: AsRef<str>>(hrefs: &[Option<S>], filename: &str) -> Option<usize> {
    let target = nav_target(filename);
    hrefs
        .iter()
        .position(|href| href.as_ref().map(AsRef::as_ref) == Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_last_path_segment() {
        assert_eq!(current_filename("/projects.html"), "projects.html");
        assert_eq!(current_filename("/site/skills.html"), "skills.html");
        assert_eq!(current_filename("/"), "");
        assert_eq!(current_filename(""), "");
        assert_eq!(current_filename("/site/"), "");
    }

    #[test]
    fn pages_resolve_from_filename() {
        assert_eq!(Page::from_pathname("/"), Page::Home);
        assert_eq!(Page::from_pathname("/index.html"), Page::Home);
        assert_eq!(Page::from_pathname("/skills.html"), Page::Skills);
        assert_eq!(Page::from_pathname("/projects.html"), Page::Projects);
        assert_eq!(Page::from_pathname("/education.html"), Page::Education);
        assert_eq!(Page::from_pathname("/contact.html"), Page::Other);
    }

    #[test]
    fn root_highlights_home_link() {
        let hrefs = [Some("index.html"), Some("skills.html"), None];
        assert_eq!(active_link_index(&hrefs, ""), Some(0));
    }

    #[test]
    fn exact_match_only() {
        let hrefs = [Some("index.html"), Some("./skills.html"), Some("skills.html")];
        assert_eq!(active_link_index(&hrefs, "skills.html"), Some(2));
        assert_eq!(active_link_index(&hrefs, "contact.html"), None);
    }

    #[test]
    fn at_most_one_link_is_active() {
        let hrefs = [
            Some("projects.html".to_string()),
            Some("projects.html".to_string()),
        ];
        assert_eq!(active_link_index(&hrefs, "projects.html"), Some(0));
    }

    #[test]
    fn links_without_href_never_match() {
        let hrefs: [Option<&str>; 2] = [None, None];
        assert_eq!(active_link_index(&hrefs, ""), None);
    }
}
