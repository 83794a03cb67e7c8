use std::fmt;

use crate::presentation::view_models::{
    CreateView, EventCardViewModel, EventListingViewModel, PillarListViewModel,
    ValidationViewModel, ViewMode,
};

// --------------------------------------------------------
// Pillar List View
// --------------------------------------------------------

impl CreateView for PillarListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(PillarListView { data: self, mode })
    }
}

struct PillarListView<'a> {
    data: &'a PillarListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for PillarListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} pillars", self.data.session_type)?;
        writeln!(f)?;
        writeln!(f, "{:<28} {:<26} EVENTS", "PILLAR", "ID")?;
        writeln!(f, "{}", "-".repeat(64))?;

        for card in &self.data.pillars {
            writeln!(
                f,
                "{:<28} {:<26} {}",
                card.name,
                card.pillar.id(),
                card.event_count
            )?;
            if self.mode == ViewMode::Standard {
                writeln!(f, "    {}", card.description)?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Event Listing View
// --------------------------------------------------------

impl CreateView for EventListingViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(EventListingView { data: self, mode })
    }
}

struct EventListingView<'a> {
    data: &'a EventListingViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for EventListingView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.events.is_empty() {
            writeln!(f, "No events found.")?;
            return Ok(());
        }

        for event in &self.data.events {
            match self.mode {
                ViewMode::Compact => writeln!(f, "{:<24} {}", event.title, event.category)?,
                ViewMode::Standard => write!(f, "{}", EventCardText(event))?,
            }
        }

        Ok(())
    }
}

/// Plain text rendering of one event card, shared with the screen view
pub(crate) struct EventCardText<'a>(pub &'a EventCardViewModel);

impl<'a> fmt::Display for EventCardText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let event = self.0;
        writeln!(f, "{} [{}]", event.title, event.category)?;
        writeln!(f, "  {}:", event.takeaways_label)?;
        for line in event.takeaways.lines() {
            writeln!(f, "    {}", line)?;
        }
        writeln!(f, "  {}:", event.apply_label)?;
        for line in event.application_notes.lines() {
            writeln!(f, "    {}", line)?;
        }
        writeln!(f)
    }
}

// --------------------------------------------------------
// Validation View
// --------------------------------------------------------

impl CreateView for ValidationViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ValidationView { data: self })
    }
}

struct ValidationView<'a> {
    data: &'a ValidationViewModel,
}

impl<'a> fmt::Display for ValidationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Checked {} pillar(s) and {} event(s).",
            self.data.pillar_count, self.data.event_count
        )?;
        for issue in &self.data.issues {
            writeln!(f, "  - {}", issue)?;
        }
        Ok(())
    }
}
