//! TUI Renderer
//!
//! `TuiApp` is the router: it owns the navigation back-stack, one component
//! per interactive screen, and a subscription to the shared state. Each frame
//! it rebuilds the `ScreenViewModel` from the latest state snapshot and hands
//! the body to the component of the current destination.
//!
//! `TuiRenderer` owns the terminal and the event loop.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use month1_core::{Catalogue, Resources, Router, StateHolder, StateSubscription, actions};
use month1_types::{AppState, Destination, SessionType};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
};

use crate::presentation::presenters::{ScreenContext, present_screen, present_session};
use crate::presentation::view_models::{ScreenBody, ScreenViewModel};
use crate::presentation::views::tui::{
    AppBarView, EventsComponent, NavBarView, PlaceholderView, SessionAction, SessionComponent,
};

pub struct TuiApp<'a> {
    catalogue: &'a Catalogue,
    resources: &'a Resources,
    state: &'a StateHolder,
    subscription: StateSubscription,
    snapshot: AppState,
    router: Router,

    theory: SessionComponent,
    tell_and_show: SessionComponent,
    events: EventsComponent,

    should_quit: bool,
}

impl<'a> TuiApp<'a> {
    pub fn new(
        catalogue: &'a Catalogue,
        resources: &'a Resources,
        state: &'a StateHolder,
        start: Destination,
    ) -> Self {
        if start.is_bottom_bar() {
            state.update_selected_destination(start);
        }

        let mut subscription = state.subscribe();
        let snapshot = subscription.current();

        Self {
            catalogue,
            resources,
            state,
            subscription,
            snapshot,
            router: Router::new(start),
            theory: SessionComponent::new(),
            tell_and_show: SessionComponent::new(),
            events: EventsComponent::new(),
            should_quit: false,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route a key press. Global keys first, then the current screen's component.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(&destination) = Destination::BOTTOM_BAR.get(index) {
                    actions::select_destination(self.state, &mut self.router, destination);
                }
            }
            KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('h') => {
                actions::go_back(self.state, &mut self.router);
            }
            _ => self.delegate(key),
        }
    }

    fn delegate(&mut self, key: KeyEvent) {
        let session_type = match self.router.current() {
            Destination::Events => {
                self.events.handle_input(key);
                return;
            }
            destination => match destination.session_type() {
                Some(session_type) => session_type,
                None => return,
            },
        };

        let group = self.catalogue.group(session_type);
        let model = present_session(group, self.resources);
        let component = match session_type {
            SessionType::TellAndShow => &mut self.tell_and_show,
            _ => &mut self.theory,
        };

        if let Some(SessionAction::OpenEvents(pillar)) = component.handle_input(key, &model) {
            actions::open_pillar_events(self.state, &mut self.router, group, pillar);
        }
    }

    /// Pull the latest state if it changed since the last frame
    fn sync(&mut self) {
        if !self.subscription.has_changed() {
            return;
        }

        let next = self.subscription.current();
        if next.current_events != self.snapshot.current_events {
            self.events.reset();
        }
        self.snapshot = next;
    }

    pub fn screen(&mut self) -> ScreenViewModel {
        self.sync();
        present_screen(&ScreenContext {
            catalogue: self.catalogue,
            resources: self.resources,
            state: &self.snapshot,
            router: &self.router,
        })
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let screen = self.screen();

        let [app_bar_area, body_area, nav_bar_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(f.area());

        f.render_widget(AppBarView::new(&screen.app_bar), app_bar_area);
        self.draw_body(f, body_area, &screen);
        f.render_widget(NavBarView::new(&screen.nav_bar), nav_bar_area);
    }

    fn draw_body(&mut self, f: &mut Frame, area: Rect, screen: &ScreenViewModel) {
        match &screen.body {
            ScreenBody::Session(session) => {
                let component = match session.session_type {
                    SessionType::TellAndShow => &mut self.tell_and_show,
                    _ => &mut self.theory,
                };
                component.render(f, area, session);
            }
            ScreenBody::Events(events) => self.events.render(f, area, events),
            ScreenBody::Placeholder(placeholder) => {
                let [_, middle, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(2),
                    Constraint::Fill(1),
                ])
                .areas(area);
                f.render_widget(PlaceholderView::new(placeholder).build_paragraph(), middle);
            }
        }
    }
}

pub struct TuiRenderer {
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Take over the terminal until the user quits
    pub fn run(&self, mut app: TuiApp) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal if we are killed by Ctrl+C outside raw mode
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, &mut app);

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&self, terminal: &mut Terminal<B>, app: &mut TuiApp) -> Result<()> {
        tracing::info!(start = %app.router().current(), "tui started");

        loop {
            terminal.draw(|f| app.draw(f))?;

            // Poll with timeout so state updates are picked up between keys
            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    app.handle_key(key);
                }
            }

            if app.should_quit() {
                break;
            }
        }

        tracing::info!("tui stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut TuiApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn render(app: &mut TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_starts_on_theory_with_pillars() {
        let resources = Resources::builtin();
        let state = StateHolder::new();
        let mut app = TuiApp::new(Catalogue::builtin(), &resources, &state, Destination::Theory);

        let text = render(&mut app);
        assert!(text.contains("The Big Picture"));
        assert!(text.contains("Community Engagement"));
        assert!(text.contains("Innovation"));
        assert!(!text.contains("[b]"));
    }

    #[test]
    fn test_open_pillar_then_back() {
        let resources = Resources::builtin();
        let state = StateHolder::new();
        let mut app = TuiApp::new(Catalogue::builtin(), &resources, &state, Destination::Theory);

        // Innovation is the third theory pillar
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.router().current(), Destination::Events);
        let text = render(&mut app);
        assert!(text.contains("Intro to Innovation"));
        assert!(text.contains("[b]"));

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.router().current(), Destination::Theory);
        assert!(!app.router().can_navigate_back());
    }

    #[test]
    fn test_number_keys_switch_destination() {
        let resources = Resources::builtin();
        let state = StateHolder::new();
        let mut app = TuiApp::new(Catalogue::builtin(), &resources, &state, Destination::Theory);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.router().current(), Destination::TellAndShow);
        assert_eq!(state.read().selected_destination, Destination::TellAndShow);

        press(&mut app, KeyCode::Char('2'));
        let text = render(&mut app);
        assert!(text.contains("Nothing here yet"));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.router().current(), Destination::TellAndShow);
        assert_eq!(state.read().selected_destination, Destination::TellAndShow);
    }

    #[test]
    fn test_empty_pillar_shows_empty_message() {
        let resources = Resources::builtin();
        let state = StateHolder::new();
        let mut app = TuiApp::new(
            Catalogue::builtin(),
            &resources,
            &state,
            Destination::TellAndShow,
        );

        // Innovation is the second tell-and-show pillar and has no events
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.router().current(), Destination::Events);
        assert!(state.read().current_events.is_empty());
        let text = render(&mut app);
        assert!(text.contains(resources.text(month1_core::labels::NO_EVENTS)));
    }

    #[test]
    fn test_quit_keys() {
        let resources = Resources::builtin();
        let state = StateHolder::new();
        let mut app = TuiApp::new(Catalogue::builtin(), &resources, &state, Destination::Theory);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
