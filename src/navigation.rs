//! Menu, header and active-section state for the top navigation.

/// Inline style overrides for one hamburger bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

impl BarStyle {
    pub const CLEARED: BarStyle = BarStyle { transform: None, opacity: None };
}

/// Bars 0..3 forming an X while the menu is open.
const OPEN_BARS: [BarStyle; 3] = [
    BarStyle { transform: Some("rotate(45deg) translate(5px, 5px)"), opacity: None },
    BarStyle { transform: None, opacity: Some("0") },
    BarStyle { transform: Some("rotate(-45deg) translate(7px, -6px)"), opacity: None },
];

/// Style for bar `index`; bars past the third are never touched when opening.
pub fn bar_style(open: bool, index: usize) -> BarStyle {
    if open {
        OPEN_BARS.get(index).copied().unwrap_or(BarStyle::CLEARED)
    } else {
        BarStyle::CLEARED
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Whether a click outside menu and hamburger should close the menu.
    pub fn closes_on_outside_click(&self, inside_menu: bool, inside_hamburger: bool) -> bool {
        self.open && !inside_menu && !inside_hamburger
    }
}

/// The two discrete header looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderLook {
    Translucent,
    Solid,
}

impl HeaderLook {
    pub fn for_scroll(scroll_y: f64, solid_after_px: f64) -> Self {
        if scroll_y > solid_after_px {
            HeaderLook::Solid
        } else {
            HeaderLook::Translucent
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            HeaderLook::Solid => "rgba(255, 255, 255, 0.98)",
            HeaderLook::Translucent => "rgba(255, 255, 255, 0.95)",
        }
    }

    /// `None` clears the inline shadow.
    pub fn box_shadow(self) -> Option<&'static str> {
        match self {
            HeaderLook::Solid => Some("0 2px 20px rgba(0, 0, 0, 0.1)"),
            HeaderLook::Translucent => None,
        }
    }
}

/// Vertical extent of a `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the first section containing `scroll_y + offset`.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, offset: f64) -> Option<usize> {
    let probe = scroll_y + offset;
    sections.iter().position(|section| section.contains(probe))
}

/// Document offset to scroll to so the target sits just below the fixed header.
pub fn scroll_target(target_offset_top: f64, header_height: Option<f64>) -> f64 {
    target_offset_top - header_height.unwrap_or(0.0)
}

/// `"#about"` -> `Some("about")`. Anything that is not a same-page fragment is rejected.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
