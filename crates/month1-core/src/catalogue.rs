use month1_types::{EventSessionItem, Pillar, PillarItem, ResourceId, SessionGroup, SessionType};

const fn pillar(pillar: Pillar, name: &'static str, description: &'static str) -> PillarItem {
    PillarItem::new(pillar, ResourceId::new(name), ResourceId::new(description))
}

const fn event(
    title: &'static str,
    takeaways: &'static str,
    apply: &'static str,
    category: Pillar,
) -> EventSessionItem {
    EventSessionItem::new(
        ResourceId::new(title),
        ResourceId::new(takeaways),
        ResourceId::new(apply),
        category,
    )
}

// --------------------------------------------------------
// Pillars per session type
// --------------------------------------------------------

static THEORY_PILLARS: [PillarItem; 3] = [
    pillar(
        Pillar::CommunityEngagement,
        "pillar.community_engagement",
        "pillar.community_engagement.about",
    ),
    pillar(
        Pillar::PersonalDevelopment,
        "pillar.personal_development",
        "pillar.personal_development.about",
    ),
    pillar(
        Pillar::Innovation,
        "pillar.innovation",
        "pillar.innovation.about",
    ),
];

static TELL_AND_SHOW_PILLARS: [PillarItem; 2] = [
    pillar(
        Pillar::ProfessionalDevelopment,
        "pillar.professional_development",
        "pillar.professional_development.about",
    ),
    pillar(
        Pillar::Innovation,
        "pillar.innovation",
        "pillar.innovation.about",
    ),
];

static COMPLEMENTARY_PILLARS: [PillarItem; 1] = [pillar(
    Pillar::CommunityEngagement,
    "pillar.community_engagement",
    "pillar.community_engagement.about",
)];

// --------------------------------------------------------
// Events per session type
// --------------------------------------------------------

static THEORY_EVENTS: [EventSessionItem; 3] = [
    event(
        "event.launch",
        "event.launch.takeaways",
        "event.launch.apply",
        Pillar::CommunityEngagement,
    ),
    event(
        "event.intro_to_innovation",
        "event.intro_to_innovation.takeaways",
        "event.intro_to_innovation.apply",
        Pillar::Innovation,
    ),
    event(
        "event.how_to_learn",
        "event.how_to_learn.takeaways",
        "event.how_to_learn.apply",
        Pillar::PersonalDevelopment,
    ),
];

// TODO: add the "Innovations in Real Life" session once its notes are written up.
static TELL_AND_SHOW_EVENTS: [EventSessionItem; 2] = [
    event(
        "event.resume_writing",
        "event.resume_writing.takeaways",
        "event.resume_writing.apply",
        Pillar::ProfessionalDevelopment,
    ),
    event(
        "event.ict_cybersecurity",
        "event.ict_cybersecurity.takeaways",
        "event.ict_cybersecurity.apply",
        Pillar::ProfessionalDevelopment,
    ),
];

static COMPLEMENTARY_EVENTS: [EventSessionItem; 1] = [event(
    "event.meet_an_alumni",
    "event.meet_an_alumni.takeaways",
    "event.meet_an_alumni.apply",
    Pillar::CommunityEngagement,
)];

static BUILTIN: Catalogue = Catalogue {
    groups: [
        SessionGroup {
            session_type: SessionType::Theory,
            pillars: &THEORY_PILLARS,
            events: &THEORY_EVENTS,
        },
        SessionGroup {
            session_type: SessionType::TellAndShow,
            pillars: &TELL_AND_SHOW_PILLARS,
            events: &TELL_AND_SHOW_EVENTS,
        },
        SessionGroup {
            session_type: SessionType::Complementary,
            pillars: &COMPLEMENTARY_PILLARS,
            events: &COMPLEMENTARY_EVENTS,
        },
    ],
};

/// Hand-authored pillars and events, one group per session type
#[derive(Debug, Clone, Copy)]
pub struct Catalogue {
    groups: [SessionGroup; 3],
}

impl Catalogue {
    /// Build a catalogue from explicit groups, in `SessionType::ALL` order
    pub const fn new(
        theory: SessionGroup,
        tell_and_show: SessionGroup,
        complementary: SessionGroup,
    ) -> Self {
        Self {
            groups: [theory, tell_and_show, complementary],
        }
    }

    /// The catalogue compiled into the binary
    pub fn builtin() -> &'static Catalogue {
        &BUILTIN
    }

    pub fn group(&self, session_type: SessionType) -> &SessionGroup {
        match session_type {
            SessionType::Theory => &self.groups[0],
            SessionType::TellAndShow => &self.groups[1],
            SessionType::Complementary => &self.groups[2],
        }
    }

    pub fn groups(&self) -> &[SessionGroup] {
        &self.groups
    }

    /// Every resource id referenced by pillars and events
    pub fn resource_ids(&self) -> Vec<ResourceId> {
        let mut ids = Vec::new();
        for group in &self.groups {
            for item in group.pillars {
                ids.push(item.name);
                ids.push(item.description);
            }
            for event in group.events {
                ids.extend(event.resources());
            }
        }
        ids.sort();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_lookup_matches_session_type() {
        let catalogue = Catalogue::builtin();
        for session_type in SessionType::ALL {
            assert_eq!(catalogue.group(session_type).session_type, session_type);
        }
    }

    #[test]
    fn test_tell_and_show_innovation_has_no_events() {
        let group = Catalogue::builtin().group(SessionType::TellAndShow);
        assert!(group.pillar(Pillar::Innovation).is_some());
        assert!(group.events.iter().all(|e| e.category != Pillar::Innovation));
    }

    #[test]
    fn test_resource_ids_are_unique() {
        let ids = Catalogue::builtin().resource_ids();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert!(ids.contains(&ResourceId::new("event.launch")));
    }
}
