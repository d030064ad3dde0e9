//! Category filter over the portfolio grid.

pub const ALL: &str = "all";

/// One scheduled visibility change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemChange {
    pub index: usize,
    pub delay_ms: u32,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    active: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { active: ALL.to_string() }
    }
}

impl FilterState {
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Switch to `filter`. Returns `false` when it was already active.
    pub fn select(&mut self, filter: &str) -> bool {
        if self.active == filter {
            return false;
        }
        self.active = filter.to_string();
        true
    }
}

pub fn matches(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || category == Some(filter)
}

/// Staggered show/hide plan: item N changes after `N * stagger_ms`.
pub fn plan<'a, I>(filter: &str, categories: I, stagger_ms: u32) -> Vec<ItemChange>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    categories
        .into_iter()
        .enumerate()
        .map(|(index, category)| ItemChange {
            index,
            delay_ms: (index as u32).saturating_mul(stagger_ms),
            visible: matches(filter, category),
        })
        .collect()
}
