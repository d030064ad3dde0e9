//! Reveal-on-scroll bookkeeping, skill-bar stagger and stat count-up math.

use std::collections::HashSet;
use std::hash::Hash;

/// CSS marker classes that opt an element into a reveal animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    FadeIn,
    SlideInLeft,
    SlideInRight,
}

impl RevealKind {
    pub fn class_name(self) -> &'static str {
        match self {
            RevealKind::FadeIn => "fade-in",
            RevealKind::SlideInLeft => "slide-in-left",
            RevealKind::SlideInRight => "slide-in-right",
        }
    }
}

/// Selector groups tagged at startup.
pub const REVEAL_TABLE: [(&str, RevealKind); 7] = [
    (".section-title", RevealKind::FadeIn),
    (".about-text", RevealKind::SlideInLeft),
    (".work-process", RevealKind::SlideInRight),
    (".skill-category", RevealKind::FadeIn),
    (".portfolio-item", RevealKind::FadeIn),
    (".contact-info", RevealKind::SlideInLeft),
    (".contact-form-container", RevealKind::SlideInRight),
];

/// Selector matching every tagged element.
pub const REVEAL_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right";

/// Set of things that have already played their one-shot animation.
///
/// Entries are never removed.
#[derive(Debug)]
pub struct RevealTracker<K> {
    seen: HashSet<K>,
}

impl<K: Hash + Eq> Default for RevealTracker<K> {
    fn default() -> Self {
        Self { seen: HashSet::new() }
    }
}

impl<K: Hash + Eq> RevealTracker<K> {
    /// Insert `key`; `true` only the first time.
    pub fn mark(&mut self, key: K) -> bool {
        self.seen.insert(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Start delay of each skill bar after the batch trigger.
pub fn skill_bar_delays(count: usize, stagger_ms: u32) -> Vec<u32> {
    (0..count)
        .map(|index| (index as u32).saturating_mul(stagger_ms))
        .collect()
}

/// Linear count from 0 to `target`, sampled on a fixed tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_ms: u32,
    tick_ms: u32,
    ticks: u32,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        Self { target, duration_ms, tick_ms: tick_ms.max(1), ticks: 0 }
    }

    /// Number of ticks until the target is shown.
    pub fn total_ticks(&self) -> u32 {
        self.duration_ms.div_ceil(self.tick_ms).max(1)
    }

    /// Displayed value after `ticks` ticks.
    pub fn value_at(&self, ticks: u32) -> u64 {
        if ticks >= self.total_ticks() {
            return self.target;
        }
        let elapsed = f64::from(ticks) * f64::from(self.tick_ms);
        let current = self.target as f64 * elapsed / f64::from(self.duration_ms);
        (current.floor() as u64).min(self.target)
    }

    /// Displayed value at wall time `elapsed_ms` after the start.
    pub fn value_at_ms(&self, elapsed_ms: u32) -> u64 {
        self.value_at(elapsed_ms / self.tick_ms)
    }

    /// Advance one tick, returning the value to display.
    pub fn tick(&mut self) -> u64 {
        self.ticks = self.ticks.saturating_add(1);
        self.value_at(self.ticks)
    }

    pub fn is_done(&self) -> bool {
        self.ticks >= self.total_ticks()
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }
}

/// Parse a `data-target` attribute from its leading digits, so `"150+"`
/// counts to 150. `None` when it does not start with a digit.
pub fn parse_target(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}
