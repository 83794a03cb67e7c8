use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::{Error, ResourceId};

/// Thematic category under which events are grouped.
///
/// Shared by [`PillarItem`] and [`crate::EventSessionItem`] so that a
/// mismatched category is a type error rather than a silent empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pillar {
    CommunityEngagement,
    PersonalDevelopment,
    ProfessionalDevelopment,
    Innovation,
}

impl Pillar {
    pub const ALL: [Pillar; 4] = [
        Pillar::CommunityEngagement,
        Pillar::PersonalDevelopment,
        Pillar::ProfessionalDevelopment,
        Pillar::Innovation,
    ];

    /// Canonical display label, also accepted by [`FromStr`]
    pub fn display_name(&self) -> &'static str {
        match self {
            Pillar::CommunityEngagement => "Community Engagement",
            Pillar::PersonalDevelopment => "Personal Development",
            Pillar::ProfessionalDevelopment => "Professional Development",
            Pillar::Innovation => "Innovation",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Pillar::CommunityEngagement => "community-engagement",
            Pillar::PersonalDevelopment => "personal-development",
            Pillar::ProfessionalDevelopment => "professional-development",
            Pillar::Innovation => "innovation",
        }
    }

    pub fn name_resource(&self) -> ResourceId {
        match self {
            Pillar::CommunityEngagement => ResourceId::new("pillar.community_engagement"),
            Pillar::PersonalDevelopment => ResourceId::new("pillar.personal_development"),
            Pillar::ProfessionalDevelopment => ResourceId::new("pillar.professional_development"),
            Pillar::Innovation => ResourceId::new("pillar.innovation"),
        }
    }

    pub fn description_resource(&self) -> ResourceId {
        match self {
            Pillar::CommunityEngagement => ResourceId::new("pillar.community_engagement.about"),
            Pillar::PersonalDevelopment => ResourceId::new("pillar.personal_development.about"),
            Pillar::ProfessionalDevelopment => {
                ResourceId::new("pillar.professional_development.about")
            }
            Pillar::Innovation => ResourceId::new("pillar.innovation.about"),
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Pillar {
    type Err = Error;

    /// Exact, case-sensitive match on the display name or the kebab-case id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pillar::ALL
            .into_iter()
            .find(|p| p.display_name() == s || p.id() == s)
            .ok_or_else(|| Error::UnknownPillar(s.to_string()))
    }
}

/// A pillar as listed under one session group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarItem {
    pub pillar: Pillar,
    pub name: ResourceId,
    pub description: ResourceId,
}

impl PillarItem {
    pub const fn new(pillar: Pillar, name: ResourceId, description: ResourceId) -> Self {
        Self {
            pillar,
            name,
            description,
        }
    }
}

impl From<Pillar> for PillarItem {
    fn from(pillar: Pillar) -> Self {
        Self::new(
            pillar,
            pillar.name_resource(),
            pillar.description_resource(),
        )
    }
}
