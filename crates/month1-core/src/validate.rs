use month1_types::{CatalogueIssue, Destination, Error, ResourceId, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Catalogue, Resources, labels};

/// What to do when the catalogue fails validation at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Refuse to start and list every issue
    #[default]
    Strict,
    /// Log each issue and carry on; orphaned events show up as empty lists
    Lenient,
}

/// Collect every consistency issue in `catalogue`.
///
/// Checks, per session group, that each pillar appears once and that each
/// event's category names a pillar of that group, then that every resource id
/// the screens need (catalogue entries, labels, destination titles) resolves
/// in `resources`.
pub fn validate(catalogue: &Catalogue, resources: &Resources) -> Vec<CatalogueIssue> {
    let mut issues = Vec::new();

    for group in catalogue.groups() {
        let mut seen = HashSet::new();
        for item in group.pillars {
            if !seen.insert(item.pillar) {
                issues.push(CatalogueIssue::DuplicatePillar {
                    session: group.session_type,
                    pillar: item.pillar,
                });
            }
        }

        for event in group.events {
            if !seen.contains(&event.category) {
                issues.push(CatalogueIssue::OrphanEvent {
                    session: group.session_type,
                    event: event.title,
                    category: event.category,
                });
            }
        }
    }

    for id in required_resources(catalogue) {
        if !resources.contains(id) {
            issues.push(CatalogueIssue::MissingResource { id });
        }
    }

    issues
}

/// Catalogue ids plus the screen labels and destination titles
fn required_resources(catalogue: &Catalogue) -> Vec<ResourceId> {
    let mut ids = catalogue.resource_ids();
    ids.extend(labels::ALL);
    ids.extend(Destination::ALL.iter().map(|d| d.title_resource()));
    ids.sort();
    ids.dedup();
    ids
}

/// Validate and apply `policy`
pub fn enforce(catalogue: &Catalogue, resources: &Resources, policy: ValidationPolicy) -> Result<()> {
    let issues = validate(catalogue, resources);
    if issues.is_empty() {
        tracing::debug!("catalogue validation passed");
        return Ok(());
    }

    match policy {
        ValidationPolicy::Strict => Err(Error::CatalogueInconsistency(issues)),
        ValidationPolicy::Lenient => {
            for issue in &issues {
                tracing::warn!(%issue, "catalogue inconsistency ignored");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use month1_types::{
        EventSessionItem, Pillar, PillarItem, ResourceId, SessionGroup, SessionType,
    };

    static PILLARS: [PillarItem; 2] = [
        PillarItem::new(
            Pillar::Innovation,
            ResourceId::new("pillar.innovation"),
            ResourceId::new("pillar.innovation.about"),
        ),
        PillarItem::new(
            Pillar::Innovation,
            ResourceId::new("pillar.innovation"),
            ResourceId::new("pillar.innovation.about"),
        ),
    ];

    static EVENTS: [EventSessionItem; 1] = [EventSessionItem::new(
        ResourceId::new("event.orphan"),
        ResourceId::new("event.launch.takeaways"),
        ResourceId::new("event.launch.apply"),
        Pillar::CommunityEngagement,
    )];

    fn broken_catalogue() -> Catalogue {
        let empty = |session_type| SessionGroup {
            session_type,
            pillars: &[],
            events: &[],
        };
        Catalogue::new(
            SessionGroup {
                session_type: SessionType::Theory,
                pillars: &PILLARS,
                events: &EVENTS,
            },
            empty(SessionType::TellAndShow),
            empty(SessionType::Complementary),
        )
    }

    #[test]
    fn test_builtin_catalogue_is_consistent() {
        let issues = validate(Catalogue::builtin(), &Resources::builtin());
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn test_builtin_events_match_exactly_one_pillar() {
        for group in Catalogue::builtin().groups() {
            for event in group.events {
                let matches = group
                    .pillars
                    .iter()
                    .filter(|item| item.pillar == event.category)
                    .count();
                assert_eq!(matches, 1, "{} in {}", event.title, group.session_type);
            }
        }
    }

    #[test]
    fn test_reports_duplicates_orphans_and_missing_resources() {
        let issues = validate(&broken_catalogue(), &Resources::builtin());

        assert!(issues.contains(&CatalogueIssue::DuplicatePillar {
            session: SessionType::Theory,
            pillar: Pillar::Innovation,
        }));
        assert!(issues.contains(&CatalogueIssue::OrphanEvent {
            session: SessionType::Theory,
            event: ResourceId::new("event.orphan"),
            category: Pillar::CommunityEngagement,
        }));
        assert!(issues.contains(&CatalogueIssue::MissingResource {
            id: ResourceId::new("event.orphan"),
        }));
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_reports_missing_screen_labels_and_titles() {
        let empty = |session_type| SessionGroup {
            session_type,
            pillars: &[],
            events: &[],
        };
        let catalogue = Catalogue::new(
            empty(SessionType::Theory),
            empty(SessionType::TellAndShow),
            empty(SessionType::Complementary),
        );

        let issues = validate(&catalogue, &Resources::new(&[]));

        assert!(issues.contains(&CatalogueIssue::MissingResource {
            id: labels::BACK_BUTTON,
        }));
        assert!(issues.contains(&CatalogueIssue::MissingResource {
            id: Destination::Events.title_resource(),
        }));
        assert_eq!(issues.len(), labels::ALL.len() + Destination::ALL.len());
    }

    #[test]
    fn test_strict_policy_fails_fast() {
        let result = enforce(
            &broken_catalogue(),
            &Resources::builtin(),
            ValidationPolicy::Strict,
        );
        match result {
            Err(Error::CatalogueInconsistency(issues)) => assert_eq!(issues.len(), 3),
            other => panic!("expected inconsistency, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_policy_keeps_going() {
        let result = enforce(
            &broken_catalogue(),
            &Resources::builtin(),
            ValidationPolicy::Lenient,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_policy_deserializes_lowercase() {
        let policy: ValidationPolicy = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(policy, ValidationPolicy::Lenient);
    }
}
