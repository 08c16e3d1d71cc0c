use crate::domain::model::{NavLink, HOME_HREF};

/// Gap kept between the fixed navbar and a scrolled-to section.
pub const DEFAULT_NAVBAR_BUFFER: f64 = 20.0;

/// Document offset that puts `element_top` just below the fixed navbar.
/// A page without a navbar counts as height 0.
pub fn scroll_offset(element_top: f64, navbar_height: Option<f64>, buffer: f64) -> f64 {
    element_top - navbar_height.unwrap_or(0.0) - buffer
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// `#` alone: back to the top, home link active.
    ScrollTop,
    /// `#section`: scroll to the section if it exists.
    ScrollToFragment(&'a str),
    /// Not an in-page link.
    Ignore,
}

pub fn classify_anchor(href: &str) -> AnchorAction<'_> {
    if href == HOME_HREF {
        AnchorAction::ScrollTop
    } else if href.starts_with('#') {
        AnchorAction::ScrollToFragment(href)
    } else {
        AnchorAction::Ignore
    }
}

/// Which nav link should be active for a location hash. Falls back to the
/// home link when the hash is empty, bare `#`, or matches nothing.
pub fn active_href_for_hash<'a>(hash: &str, links: &'a [NavLink]) -> Option<&'a str> {
    let matched = if !hash.is_empty() && hash != HOME_HREF {
        links.iter().find(|l| l.href == hash)
    } else {
        None
    };

    matched
        .or_else(|| links.iter().find(|l| l.href == HOME_HREF))
        .map(|l| l.href.as_str())
}
