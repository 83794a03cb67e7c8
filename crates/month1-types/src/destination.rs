use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, ResourceId, SessionType};

/// Closed set of screens reachable through navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    #[default]
    Theory,
    HandsOn,
    RealLife,
    TellAndShow,
    Events,
}

impl Destination {
    /// Bottom navigation bar items, in bar order
    pub const BOTTOM_BAR: [Destination; 4] = [
        Destination::Theory,
        Destination::HandsOn,
        Destination::RealLife,
        Destination::TellAndShow,
    ];

    pub const ALL: [Destination; 5] = [
        Destination::Theory,
        Destination::HandsOn,
        Destination::RealLife,
        Destination::TellAndShow,
        Destination::Events,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Destination::Theory => "theory",
            Destination::HandsOn => "hands-on",
            Destination::RealLife => "real-life",
            Destination::TellAndShow => "tell-and-show",
            Destination::Events => "events",
        }
    }

    pub fn title_resource(&self) -> ResourceId {
        match self {
            Destination::Theory => ResourceId::new("route.theory"),
            Destination::HandsOn => ResourceId::new("route.hands_on"),
            Destination::RealLife => ResourceId::new("route.real_life"),
            Destination::TellAndShow => ResourceId::new("route.tell_and_show"),
            Destination::Events => ResourceId::new("route.events"),
        }
    }

    /// Session group shown on this screen, if it is a session screen
    pub fn session_type(&self) -> Option<SessionType> {
        match self {
            Destination::Theory => Some(SessionType::Theory),
            Destination::TellAndShow => Some(SessionType::TellAndShow),
            Destination::HandsOn | Destination::RealLife | Destination::Events => None,
        }
    }

    pub fn is_bottom_bar(&self) -> bool {
        Self::BOTTOM_BAR.contains(self)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Destination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|d| d.id() == s)
            .ok_or_else(|| Error::UnknownDestination(s.to_string()))
    }
}
