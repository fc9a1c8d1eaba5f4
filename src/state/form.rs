//! Contact form submit lifecycle.
//!
//! The submit button walks `Idle -> Sending -> Sent|Failed -> Idle`; the last
//! edge fires on a fixed delay owned by the component's spawned task, so a
//! torn-down form never resets a stale button.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// How long the success/failure feedback stays on the button before the
/// original label returns.
pub const RESET_DELAY_MS: u64 = 3000;

/// Label shown on the submit button when idle.
pub const SUBMIT_IDLE_LABEL: &str = "Envoyer";

/// Lifecycle of one contact-form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    /// Button label for this status.
    pub fn label(self, idle_label: &str) -> &str {
        match self {
            Self::Idle => idle_label,
            Self::Sending => "Envoi...",
            Self::Sent => "Envoyé",
            Self::Failed => "Erreur",
        }
    }

    /// Inline background for the feedback window, empty when the stylesheet
    /// default applies.
    pub fn background(self) -> &'static str {
        match self {
            Self::Sent => "#4ade80",
            Self::Failed => "#ef4444",
            Self::Idle | Self::Sending => "",
        }
    }

    /// The button stays disabled from submit until the delayed reset.
    pub fn is_busy(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Lead `source` tag derived from the business name: lowercased, whitespace
/// runs collapsed to single hyphens, prefixed with `site-`.
pub fn lead_source(business_name: &str) -> String {
    let lowered = business_name.to_lowercase();
    let slug = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    format!("site-{slug}")
}
