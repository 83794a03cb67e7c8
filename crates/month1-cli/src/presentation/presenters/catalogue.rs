use month1_core::{Catalogue, Resources, filter_by_category};
use month1_types::{CatalogueIssue, Pillar, SessionGroup};

use super::screen::{present_event_cards, present_pillar_cards};
use crate::presentation::view_models::{
    CommandResultViewModel, EventListingViewModel, Guidance, PillarListViewModel, StatusBadge,
    ValidationViewModel,
};

pub fn present_pillar_list(
    group: &SessionGroup,
    resources: &Resources,
) -> CommandResultViewModel<PillarListViewModel> {
    let content = PillarListViewModel {
        session_type: group.session_type,
        pillars: present_pillar_cards(group, resources),
    };

    let has_empty_pillar = content.pillars.iter().any(|card| card.event_count == 0);
    let mut result = CommandResultViewModel::new(content);
    if has_empty_pillar {
        result = result.with_suggestion(
            Guidance::new("Pillars with 0 events open an empty Events screen")
                .with_command(format!("month1 events --session {}", group.session_type.id())),
        );
    }
    result
}

pub fn present_event_listing(
    group: &SessionGroup,
    pillar: Option<Pillar>,
    resources: &Resources,
) -> CommandResultViewModel<EventListingViewModel> {
    let events = match pillar {
        Some(pillar) => filter_by_category(group.events, pillar),
        None => group.events.to_vec(),
    };

    let badge = match pillar {
        Some(pillar) => StatusBadge::info(format!(
            "{} event(s) under {} in {}",
            events.len(),
            pillar,
            group.session_type
        )),
        None => StatusBadge::info(format!("{} event(s) in {}", events.len(), group.session_type)),
    };

    CommandResultViewModel::new(EventListingViewModel {
        session_type: group.session_type,
        pillar,
        events: present_event_cards(&events, resources),
    })
    .with_badge(badge)
}

pub fn present_validation(
    catalogue: &Catalogue,
    issues: &[CatalogueIssue],
) -> CommandResultViewModel<ValidationViewModel> {
    let groups = catalogue.groups();
    let content = ValidationViewModel {
        passed: issues.is_empty(),
        pillar_count: groups.iter().map(|g| g.pillars.len()).sum(),
        event_count: groups.iter().map(|g| g.events.len()).sum(),
        issues: issues.iter().map(|issue| issue.to_string()).collect(),
    };

    if content.passed {
        CommandResultViewModel::new(content).with_badge(StatusBadge::success("Catalogue is consistent"))
    } else {
        let label = format!("{} catalogue issue(s) found", content.issues.len());
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::error(label))
            .with_suggestions([
                Guidance::new("Set catalogue.validation = \"lenient\" in the config to start anyway"),
                Guidance::new("List the issues as JSON").with_command("month1 validate --format json"),
            ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use month1_types::{ResourceId, SessionType};

    #[test]
    fn test_event_listing_filters_by_pillar() {
        let resources = Resources::builtin();
        let group = Catalogue::builtin().group(SessionType::Theory);

        let result = present_event_listing(group, Some(Pillar::Innovation), &resources);

        assert_eq!(result.content.events.len(), 1);
        assert_eq!(result.content.events[0].title, "Intro to Innovation");
        assert!(result.badge.is_some());
    }

    #[test]
    fn test_pillar_list_suggests_when_pillar_is_empty() {
        let resources = Resources::builtin();
        let catalogue = Catalogue::builtin();

        let tell_and_show = present_pillar_list(catalogue.group(SessionType::TellAndShow), &resources);
        assert_eq!(tell_and_show.suggestions.len(), 1);

        let theory = present_pillar_list(catalogue.group(SessionType::Theory), &resources);
        assert!(theory.suggestions.is_empty());
    }

    #[test]
    fn test_validation_counts() {
        let catalogue = Catalogue::builtin();
        let passed = present_validation(catalogue, &[]);
        assert!(passed.content.passed);
        assert_eq!(passed.content.pillar_count, 6);
        assert_eq!(passed.content.event_count, 6);

        let failed = present_validation(
            catalogue,
            &[CatalogueIssue::MissingResource {
                id: ResourceId::new("event.x"),
            }],
        );
        assert!(!failed.content.passed);
        assert_eq!(failed.content.issues, vec!["resource 'event.x' is not defined"]);
        assert!(failed.is_error());
        assert_eq!(failed.suggestions.len(), 2);
    }
}
