//! Contact form validation rules and the simulated submit sequence.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Field whose non-empty value must look like an email address.
pub const EMAIL_FIELD: &str = "email";

pub const ERROR_COLOR: &str = "#ef4444";
pub const SUCCESS_COLOR: &str = "#10b981";

pub const LABEL_IDLE: &str = "メッセージを送信";
pub const LABEL_SENDING: &str = "送信中...";
pub const LABEL_SENT: &str = "送信完了！";

pub const SUCCESS_MESSAGE: &str = "メッセージを送信しました。24時間以内にご連絡いたします。";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("この項目は必須です")]
    Required,
    #[error("正しいメールアドレスを入力してください")]
    InvalidEmail,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Snapshot of one form control, as the validator sees it.
#[derive(Clone, Copy, Debug)]
pub struct FieldInput<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub required: bool,
}

/// Validate one field. The value is trimmed first.
///
/// When both rules could apply the email rule wins, since it is checked last.
pub fn validate(field: FieldInput<'_>) -> Result<(), FieldError> {
    let value = field.value.trim();
    let mut outcome = Ok(());
    if field.required && value.is_empty() {
        outcome = Err(FieldError::Required);
    }
    if field.name == EMAIL_FIELD && !value.is_empty() && !is_valid_email(value) {
        outcome = Err(FieldError::InvalidEmail);
    }
    outcome
}

/// Submit button presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => LABEL_IDLE,
            SubmitPhase::Sending => LABEL_SENDING,
            SubmitPhase::Sent => LABEL_SENT,
        }
    }

    pub fn disabled(self) -> bool {
        !matches!(self, SubmitPhase::Idle)
    }

    /// Inline opacity override, `None` clears it.
    pub fn opacity(self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending | SubmitPhase::Sent => Some("0.7"),
        }
    }

    /// Inline background override, `None` clears it.
    pub fn background(self) -> Option<&'static str> {
        match self {
            SubmitPhase::Sent => Some(SUCCESS_COLOR),
            SubmitPhase::Idle | SubmitPhase::Sending => None,
        }
    }
}

/// Phase of a submission `elapsed_ms` after a valid submit.
pub fn submit_phase_at(elapsed_ms: u32, latency_ms: u32, hold_ms: u32) -> SubmitPhase {
    if elapsed_ms < latency_ms {
        SubmitPhase::Sending
    } else if elapsed_ms < latency_ms.saturating_add(hold_ms) {
        SubmitPhase::Sent
    } else {
        SubmitPhase::Idle
    }
}

/// Moments after a valid submit at which the button changes, with the
/// phase it changes to. The `Sending` phase applies immediately.
pub fn phase_changes(latency_ms: u32, hold_ms: u32) -> [(u32, SubmitPhase); 2] {
    let sent_at = latency_ms;
    let idle_at = latency_ms.saturating_add(hold_ms);
    [sent_at, idle_at].map(|at| (at, submit_phase_at(at, latency_ms, hold_ms)))
}
