//! Toast notifications: palette, timeline and the single-slot rule.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Info => "#3b82f6",
            NotificationKind::Warning => "#f59e0b",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

pub const OFFSCREEN: &str = "translateX(100%)";
pub const ONSCREEN: &str = "translateX(0)";

/// Static inline styles applied to every toast.
pub const BASE_STYLE: [(&str, &str); 12] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("padding", "16px 24px"),
    ("border-radius", "8px"),
    ("color", "white"),
    ("font-size", "14px"),
    ("font-weight", "500"),
    ("z-index", "10000"),
    ("transition", "transform 0.3s ease"),
    ("max-width", "300px"),
    ("box-shadow", "0 10px 25px rgba(0,0,0,0.2)"),
];

/// Moments (relative to insertion) at which a toast changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeline {
    pub slide_in_ms: u32,
    pub slide_out_ms: u32,
    pub remove_ms: u32,
}

impl Timeline {
    pub fn new(enter_delay_ms: u32, ttl_ms: u32, exit_ms: u32) -> Self {
        Self {
            slide_in_ms: enter_delay_ms,
            slide_out_ms: ttl_ms,
            remove_ms: ttl_ms.saturating_add(exit_ms),
        }
    }

    /// Every moment at which the toast changes, in order.
    pub fn moments(&self) -> [u32; 3] {
        [self.slide_in_ms, self.slide_out_ms, self.remove_ms]
    }

    /// Transform value `elapsed_ms` after insertion; `None` once removed.
    pub fn transform_at(&self, elapsed_ms: u32) -> Option<&'static str> {
        if elapsed_ms >= self.remove_ms {
            None
        } else if elapsed_ms >= self.slide_out_ms || elapsed_ms < self.slide_in_ms {
            Some(OFFSCREEN)
        } else {
            Some(ONSCREEN)
        }
    }
}

/// Tracks which toast currently owns the screen.
///
/// Showing a new toast displaces the previous one; stale timers for a
/// displaced toast find a different id and do nothing.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    next_id: u64,
    current: Option<u64>,
}

impl NotificationSlot {
    /// Claim the slot. Returns the new id and the id that was displaced.
    pub fn show(&mut self) -> (u64, Option<u64>) {
        self.next_id += 1;
        let displaced = self.current.replace(self.next_id);
        (self.next_id, displaced)
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.current == Some(id)
    }

    /// Release the slot if `id` still holds it.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.is_current(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
