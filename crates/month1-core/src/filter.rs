use month1_types::{EventSessionItem, Pillar, Result};

/// Events whose category equals `category`, in their original order
pub fn filter_by_category(events: &[EventSessionItem], category: Pillar) -> Vec<EventSessionItem> {
    events
        .iter()
        .filter(|event| event.category == category)
        .copied()
        .collect()
}

/// Same as [`filter_by_category`], taking the category as a display name
/// or kebab-case id. Unknown names are rejected rather than matching nothing.
pub fn filter_by_category_name(
    events: &[EventSessionItem],
    category: &str,
) -> Result<Vec<EventSessionItem>> {
    let pillar = category.parse::<Pillar>()?;
    Ok(filter_by_category(events, pillar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use month1_types::{Error, ResourceId};

    fn event(title: &'static str, category: Pillar) -> EventSessionItem {
        EventSessionItem::new(
            ResourceId::new(title),
            ResourceId::new("t"),
            ResourceId::new("a"),
            category,
        )
    }

    fn sample() -> Vec<EventSessionItem> {
        vec![
            event("one", Pillar::CommunityEngagement),
            event("two", Pillar::Innovation),
            event("three", Pillar::PersonalDevelopment),
            event("four", Pillar::Innovation),
        ]
    }

    #[test]
    fn test_innovation_scenario_returns_single_match() {
        let events = vec![
            event("launch", Pillar::CommunityEngagement),
            event("intro", Pillar::Innovation),
            event("learn", Pillar::PersonalDevelopment),
        ];

        let filtered = filter_by_category(&events, Pillar::Innovation);
        assert_eq!(filtered, vec![events[1]]);
    }

    #[test]
    fn test_only_matching_in_original_order() {
        let events = sample();
        let filtered = filter_by_category(&events, Pillar::Innovation);

        assert!(filtered.len() <= events.len());
        assert!(filtered.iter().all(|e| e.category == Pillar::Innovation));
        let titles: Vec<_> = filtered.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "four"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let events = sample();
        for pillar in Pillar::ALL {
            let once = filter_by_category(&events, pillar);
            let twice = filter_by_category(&once, pillar);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_unmatched_category_is_empty() {
        let events = sample();
        assert!(filter_by_category(&events, Pillar::ProfessionalDevelopment).is_empty());
        assert!(filter_by_category(&[], Pillar::Innovation).is_empty());
    }

    #[test]
    fn test_filter_by_name_is_exact() {
        let events = sample();
        assert_eq!(
            filter_by_category_name(&events, "Innovation").unwrap().len(),
            2
        );
        assert!(matches!(
            filter_by_category_name(&events, "innovation "),
            Err(Error::UnknownPillar(_))
        ));
    }
}
