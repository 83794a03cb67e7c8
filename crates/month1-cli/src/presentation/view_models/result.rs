use serde::Serialize;

use super::common::{Guidance, StatusBadge, StatusLevel};

/// What every console command prints: the command's own view model plus an
/// optional one-line status and follow-up tips.
///
/// In JSON the content sits under `content`; `badge` and `suggestions` are
/// omitted when empty.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T: Serialize> CommandResultViewModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(self, tip: Guidance) -> Self {
        self.with_suggestions([tip])
    }

    pub fn with_suggestions(mut self, tips: impl IntoIterator<Item = Guidance>) -> Self {
        self.suggestions.extend(tips);
        self
    }

    /// True when the badge reports a failure
    pub fn is_error(&self) -> bool {
        self.badge
            .as_ref()
            .is_some_and(|badge| badge.level == StatusLevel::Error)
    }
}
