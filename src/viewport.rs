//! Visibility queries against a bounding box and the viewport size.

/// Bounding box in viewport coordinates, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// True when the whole box lies inside the viewport.
///
/// A zero-area box at the origin counts as inside.
pub fn is_fully_in_viewport(rect: &Rect, viewport: &Viewport) -> bool {
    rect.top >= 0.0
        && rect.left >= 0.0
        && rect.bottom <= viewport.height
        && rect.right <= viewport.width
}

/// True when any part of the box touches the viewport (edges inclusive).
pub fn is_partially_in_viewport(rect: &Rect, viewport: &Viewport) -> bool {
    rect.bottom >= 0.0
        && rect.right >= 0.0
        && rect.top <= viewport.height
        && rect.left <= viewport.width
}
