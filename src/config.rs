//! Timing and threshold knobs for every controller.
//!
//! Defaults reproduce the live site. A page may override any subset through a
//! JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">{ "step_interval_ms": 5000 }</script>
//! ```

use serde::Deserialize;

use crate::error::SiteError;

/// Id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub nav_scroll_debounce_ms: u32,
    pub reveal_scroll_debounce_ms: u32,
    /// Scroll depth past which the header switches to its solid look.
    pub header_solid_after_px: f64,
    /// Offset added to `scrollY` when picking the active section.
    pub active_section_offset_px: f64,
    pub filter_stagger_ms: u32,
    pub skill_bar_stagger_ms: u32,
    pub count_up_duration_ms: u32,
    pub count_up_tick_ms: u32,
    pub step_interval_ms: u32,
    pub submit_latency_ms: u32,
    pub submit_success_hold_ms: u32,
    pub notification_enter_delay_ms: u32,
    pub notification_ttl_ms: u32,
    pub notification_exit_ms: u32,
    pub long_task_threshold_ms: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_scroll_debounce_ms: 10,
            reveal_scroll_debounce_ms: 50,
            header_solid_after_px: 100.0,
            active_section_offset_px: 100.0,
            filter_stagger_ms: 100,
            skill_bar_stagger_ms: 200,
            count_up_duration_ms: 2000,
            count_up_tick_ms: 16,
            step_interval_ms: 3000,
            submit_latency_ms: 2000,
            submit_success_hold_ms: 3000,
            notification_enter_delay_ms: 100,
            notification_ttl_ms: 5000,
            notification_exit_ms: 300,
            long_task_threshold_ms: 50.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SiteError> {
        if self.count_up_tick_ms == 0 {
            return Err(SiteError::Config("count_up_tick_ms must be positive".into()));
        }
        if self.count_up_duration_ms < self.count_up_tick_ms {
            return Err(SiteError::Config(
                "count_up_duration_ms must be at least one tick".into(),
            ));
        }
        if self.step_interval_ms == 0 {
            return Err(SiteError::Config("step_interval_ms must be positive".into()));
        }
        Ok(())
    }
}

/// Hosts that get verbose logging and the `window.debugApp` handle.
pub fn is_development_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1" || hostname.contains("dev")
}
