/// Whether the back-to-top control should show at this scroll offset.
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Mobile menu behaviors apply at or below the breakpoint.
pub fn is_narrow_viewport(width: f64, breakpoint: f64) -> bool {
    width <= breakpoint
}
