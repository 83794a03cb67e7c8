use month1_core::{Catalogue, Resources, Router, filter_by_category, labels};
use month1_types::{AppState, Destination, EventSessionItem, SessionGroup, SessionType};

use crate::presentation::view_models::{
    AppBarViewModel, BigPictureViewModel, EventCardViewModel, EventListViewModel,
    NavBarViewModel, NavItemViewModel, PillarCardViewModel, PlaceholderViewModel, ScreenBody,
    ScreenViewModel, SessionScreenViewModel,
};

/// Inputs for building a screen
pub struct ScreenContext<'a> {
    pub catalogue: &'a Catalogue,
    pub resources: &'a Resources,
    pub state: &'a AppState,
    pub router: &'a Router,
}

/// Route table: every destination maps to exactly one kind of screen body
pub fn present_screen(ctx: &ScreenContext) -> ScreenViewModel {
    let destination = ctx.router.current();
    let resources = ctx.resources;

    let body = match destination {
        Destination::Theory => ScreenBody::Session(present_session(
            ctx.catalogue.group(SessionType::Theory),
            resources,
        )),
        Destination::TellAndShow => ScreenBody::Session(present_session(
            ctx.catalogue.group(SessionType::TellAndShow),
            resources,
        )),
        Destination::Events => {
            ScreenBody::Events(present_events(&ctx.state.current_events, resources))
        }
        Destination::HandsOn | Destination::RealLife => {
            ScreenBody::Placeholder(PlaceholderViewModel {
                message: resources.text(labels::PLACEHOLDER).to_string(),
            })
        }
    };

    ScreenViewModel {
        destination,
        app_bar: present_app_bar(ctx.router, resources),
        body,
        nav_bar: present_nav_bar(ctx.state.selected_destination, resources),
    }
}

pub fn present_app_bar(router: &Router, resources: &Resources) -> AppBarViewModel {
    AppBarViewModel {
        title: resources.text(router.current().title_resource()).to_string(),
        can_navigate_back: router.can_navigate_back(),
        back_label: resources.text(labels::BACK_BUTTON).to_string(),
    }
}

pub fn present_nav_bar(selected: Destination, resources: &Resources) -> NavBarViewModel {
    let items = Destination::BOTTOM_BAR
        .iter()
        .zip(['1', '2', '3', '4'])
        .map(|(destination, shortcut)| NavItemViewModel {
            destination: *destination,
            label: resources.text(destination.title_resource()).to_string(),
            icon: nav_icon(*destination).to_string(),
            shortcut,
            is_selected: *destination == selected,
        })
        .collect();

    NavBarViewModel { items }
}

fn nav_icon(destination: Destination) -> &'static str {
    match destination {
        Destination::Theory => "💡",
        Destination::HandsOn => "🛠",
        Destination::RealLife => "📊",
        Destination::TellAndShow => "🗒",
        Destination::Events => "📅",
    }
}

pub fn present_session(group: &SessionGroup, resources: &Resources) -> SessionScreenViewModel {
    SessionScreenViewModel {
        session_type: group.session_type,
        big_picture: BigPictureViewModel {
            title: resources.text(labels::BIG_PICTURE).to_string(),
            body: resources.text(labels::BIG_PICTURE_BODY).to_string(),
        },
        pillars: present_pillar_cards(group, resources),
    }
}

pub fn present_pillar_cards(group: &SessionGroup, resources: &Resources) -> Vec<PillarCardViewModel> {
    group
        .pillars
        .iter()
        .map(|item| PillarCardViewModel {
            pillar: item.pillar,
            name: resources.text(item.name).to_string(),
            description: resources.text(item.description).to_string(),
            event_count: filter_by_category(group.events, item.pillar).len(),
        })
        .collect()
}

pub fn present_events(events: &[EventSessionItem], resources: &Resources) -> EventListViewModel {
    EventListViewModel {
        events: present_event_cards(events, resources),
        empty_message: resources.text(labels::NO_EVENTS).to_string(),
    }
}

pub fn present_event_cards(
    events: &[EventSessionItem],
    resources: &Resources,
) -> Vec<EventCardViewModel> {
    let takeaways_label = resources.text(labels::KEY_TAKEAWAYS);
    let apply_label = resources.text(labels::APPLY);

    events
        .iter()
        .map(|event| EventCardViewModel {
            category: event.category,
            title: resources.text(event.title).to_string(),
            takeaways_label: takeaways_label.to_string(),
            takeaways: resources.text(event.takeaways).to_string(),
            apply_label: apply_label.to_string(),
            application_notes: resources.text(event.application_notes).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use month1_core::{StateHolder, actions};
    use month1_types::Pillar;

    fn screen(state: &StateHolder, router: &Router) -> ScreenViewModel {
        let snapshot = state.read();
        let resources = Resources::builtin();
        present_screen(&ScreenContext {
            catalogue: Catalogue::builtin(),
            resources: &resources,
            state: &snapshot,
            router,
        })
    }

    #[test]
    fn test_theory_screen_lists_theory_pillars() {
        let state = StateHolder::new();
        let router = Router::default();

        let vm = screen(&state, &router);

        assert_eq!(vm.app_bar.title, "Theory");
        assert!(!vm.app_bar.can_navigate_back);
        let ScreenBody::Session(session) = vm.body else {
            panic!("expected session body");
        };
        let names: Vec<_> = session.pillars.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Community Engagement", "Personal Development", "Innovation"]
        );
        assert!(session.pillars.iter().all(|p| p.event_count == 1));
        assert_eq!(session.big_picture.title, "The Big Picture");
    }

    #[test]
    fn test_placeholder_screens() {
        let state = StateHolder::new();
        for destination in [Destination::HandsOn, Destination::RealLife] {
            let mut router = Router::default();
            actions::select_destination(&state, &mut router, destination);
            let vm = screen(&state, &router);
            assert!(matches!(vm.body, ScreenBody::Placeholder(_)));
            assert!(vm.app_bar.can_navigate_back);
        }
    }

    #[test]
    fn test_events_screen_reads_shared_state() {
        let state = StateHolder::new();
        let mut router = Router::default();
        let group = Catalogue::builtin().group(SessionType::TellAndShow);
        actions::select_destination(&state, &mut router, Destination::TellAndShow);
        actions::open_pillar_events(&state, &mut router, group, Pillar::ProfessionalDevelopment);

        let vm = screen(&state, &router);

        assert_eq!(vm.app_bar.title, "Events");
        let ScreenBody::Events(list) = vm.body else {
            panic!("expected events body");
        };
        let titles: Vec<_> = list.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Resume Writing", "ICT Cybersecurity"]);
        assert_eq!(list.events[0].takeaways_label, "Key takeaways");
        assert_eq!(list.events[0].apply_label, "How I'll apply it");
    }

    #[test]
    fn test_empty_pillar_renders_empty_events_list() {
        let state = StateHolder::new();
        let mut router = Router::default();
        let group = Catalogue::builtin().group(SessionType::TellAndShow);
        actions::open_pillar_events(&state, &mut router, group, Pillar::Innovation);

        let ScreenBody::Events(list) = screen(&state, &router).body else {
            panic!("expected events body");
        };
        assert!(list.events.is_empty());
        assert!(!list.empty_message.is_empty());
    }

    #[test]
    fn test_nav_bar_highlights_selected_destination() {
        let resources = Resources::builtin();
        let nav = present_nav_bar(Destination::RealLife, &resources);

        assert_eq!(nav.items.len(), 4);
        let selected: Vec<_> = nav.items.iter().filter(|i| i.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "Real Life");
        assert_eq!(selected[0].shortcut, '3');
    }

    #[test]
    fn test_nav_bar_has_no_selection_for_events() {
        let resources = Resources::builtin();
        let nav = present_nav_bar(Destination::Events, &resources);
        assert!(nav.items.iter().all(|i| !i.is_selected));
    }
}
