//! String resource table.
//!
//! All display text is looked up by [`ResourceId`]. Ids are stable and
//! dotted (`event.launch.takeaways`). The table is a few dozen entries and
//! is scanned linearly.

use month1_types::ResourceId;

/// Labels used by the screens themselves (not by catalogue entries)
pub mod labels {
    use month1_types::ResourceId;

    pub const APP_NAME: ResourceId = ResourceId::new("app.name");
    pub const BIG_PICTURE: ResourceId = ResourceId::new("big_picture");
    pub const BIG_PICTURE_BODY: ResourceId = ResourceId::new("big_picture.body");
    pub const KEY_TAKEAWAYS: ResourceId = ResourceId::new("label.key_takeaways");
    pub const APPLY: ResourceId = ResourceId::new("label.apply");
    pub const BACK_BUTTON: ResourceId = ResourceId::new("label.back");
    pub const NO_EVENTS: ResourceId = ResourceId::new("label.no_events");
    pub const PLACEHOLDER: ResourceId = ResourceId::new("label.placeholder");

    pub const ALL: [ResourceId; 8] = [
        APP_NAME,
        BIG_PICTURE,
        BIG_PICTURE_BODY,
        KEY_TAKEAWAYS,
        APPLY,
        BACK_BUTTON,
        NO_EVENTS,
        PLACEHOLDER,
    ];
}

static BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // App chrome
    ("app.name", "Month 1"),
    ("route.theory", "Theory"),
    ("route.hands_on", "Hands On"),
    ("route.real_life", "Real Life"),
    ("route.tell_and_show", "Tell and Show"),
    ("route.events", "Events"),
    ("big_picture", "The Big Picture"),
    (
        "big_picture.body",
        "Month one is about laying foundations: learning how to learn, meeting the \
         community, and finding where innovation and professional growth fit into \
         the months ahead. Each session below is filed under the pillar it serves.",
    ),
    ("label.key_takeaways", "Key takeaways"),
    ("label.apply", "How I'll apply it"),
    ("label.back", "Back"),
    ("label.no_events", "No events recorded under this pillar yet."),
    ("label.placeholder", "Nothing here yet. Sessions for this track start next month."),
    // Pillars
    ("pillar.community_engagement", "Community Engagement"),
    (
        "pillar.community_engagement.about",
        "Showing up for the cohort: launches, meetups and conversations with people \
         who have walked the path before.",
    ),
    ("pillar.personal_development", "Personal Development"),
    (
        "pillar.personal_development.about",
        "Habits and mindsets that make the rest of the programme stick.",
    ),
    ("pillar.professional_development", "Professional Development"),
    (
        "pillar.professional_development.about",
        "Skills for landing and growing in a role: presenting yourself and \
         understanding the industry.",
    ),
    ("pillar.innovation", "Innovation"),
    (
        "pillar.innovation.about",
        "Spotting problems worth solving and testing ideas quickly.",
    ),
    // Theory events
    ("event.launch", "Launch"),
    (
        "event.launch.takeaways",
        "1. The programme rewards consistency more than speed.\n\
         2. The cohort is a resource; ask early, ask often.",
    ),
    (
        "event.launch.apply",
        "1. Block out fixed study hours every weekday.\n\
         2. Join one peer study group in the first week.",
    ),
    ("event.intro_to_innovation", "Intro to Innovation"),
    (
        "event.intro_to_innovation.takeaways",
        "1. Innovation starts with a clearly stated problem.\n\
         2. Cheap experiments beat long plans.",
    ),
    (
        "event.intro_to_innovation.apply",
        "1. Write a one-line problem statement before starting any project.\n\
         2. Prototype the riskiest assumption first.",
    ),
    ("event.how_to_learn", "How to Learn"),
    (
        "event.how_to_learn.takeaways",
        "1. Active recall outperforms re-reading.\n\
         2. Spacing practice sessions improves retention.",
    ),
    (
        "event.how_to_learn.apply",
        "1. End each study block by writing down what I remember.\n\
         2. Revisit each week's material on the following weekend.",
    ),
    // Tell and show events
    ("event.resume_writing", "Resume Writing"),
    (
        "event.resume_writing.takeaways",
        "1. Lead with impact, not duties.\n\
         2. Tailor the resume to each application.",
    ),
    (
        "event.resume_writing.apply",
        "1. Rewrite every bullet as an outcome with a number.\n\
         2. Keep a master resume and trim it per role.",
    ),
    ("event.ict_cybersecurity", "ICT Cybersecurity"),
    (
        "event.ict_cybersecurity.takeaways",
        "1. Most breaches begin with phishing.\n\
         2. Security is a career path with many entry points.",
    ),
    (
        "event.ict_cybersecurity.apply",
        "1. Enable two-factor authentication on every account.\n\
         2. Complete an introductory security course this quarter.",
    ),
    // Complementary events
    ("event.meet_an_alumni", "Meet an Alumni"),
    (
        "event.meet_an_alumni.takeaways",
        "1. Alumni found their first role through their network.\n\
         2. Side projects opened more doors than certificates.",
    ),
    (
        "event.meet_an_alumni.apply",
        "1. Reach out to two alumni for a short call.\n\
         2. Ship one small side project before month three.",
    ),
];

/// Lookup table from resource id to display text
#[derive(Debug, Clone, Copy)]
pub struct Resources {
    entries: &'static [(&'static str, &'static str)],
}

impl Resources {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Resources {
        Self::new(BUILTIN_ENTRIES)
    }

    pub fn lookup(&self, id: ResourceId) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id.as_str())
            .map(|(_, text)| *text)
    }

    /// Text for `id`, or the id itself when the table has no entry
    pub fn text(&self, id: ResourceId) -> &'static str {
        self.lookup(id).unwrap_or(id.as_str())
    }

    pub fn contains(&self, id: ResourceId) -> bool {
        self.lookup(id).is_some()
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::builtin()
    }
}
