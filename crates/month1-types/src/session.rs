use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::{Error, EventSessionItem, PillarItem};

/// Kind of session an event was recorded under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    Theory,
    TellAndShow,
    Complementary,
}

impl SessionType {
    pub const ALL: [SessionType; 3] = [
        SessionType::Theory,
        SessionType::TellAndShow,
        SessionType::Complementary,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SessionType::Theory => "theory",
            SessionType::TellAndShow => "tell-and-show",
            SessionType::Complementary => "complementary",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Theory => write!(f, "Theory"),
            SessionType::TellAndShow => write!(f, "Tell and Show"),
            SessionType::Complementary => write!(f, "Complementary"),
        }
    }
}

impl FromStr for SessionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| Error::UnknownSessionType(s.to_string()))
    }
}

/// Pillars and events belonging to one session type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionGroup {
    pub session_type: SessionType,
    pub pillars: &'static [PillarItem],
    pub events: &'static [EventSessionItem],
}

impl SessionGroup {
    pub fn pillar(&self, pillar: crate::Pillar) -> Option<&'static PillarItem> {
        self.pillars.iter().find(|item| item.pillar == pillar)
    }
}
