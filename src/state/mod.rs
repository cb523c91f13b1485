mod demo;

pub use demo::*;

/// Identifier for each page the application can display. Parsing an unknown
/// identifier falls back to [`PageId::Home`] rather than failing, so every
/// value of this type maps to a real view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageId {
    Home,
    Demo,
    Login,
    Register,
    Dashboard,
    Scripts,
    ScriptAnalysis,
    Rehearsal,
    Recordings,
    RecordingAnalysis,
    Analytics,
}

impl PageId {
    /// Parse a raw page identifier. Unknown identifiers resolve to the home
    /// page, never to an error.
    pub fn parse<S>(raw: S) -> Self
    where
        S: AsRef<str>,
    {
        match raw.as_ref() {
            "home" => Self::Home,
            "demo" => Self::Demo,
            "login" => Self::Login,
            "register" => Self::Register,
            "dashboard" => Self::Dashboard,
            "scripts" => Self::Scripts,
            "script-analysis" => Self::ScriptAnalysis,
            "rehearsal" => Self::Rehearsal,
            "recordings" => Self::Recordings,
            "recording-analysis" => Self::RecordingAnalysis,
            "analytics" => Self::Analytics,
            _ => Self::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Demo => "demo",
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::Scripts => "scripts",
            Self::ScriptAnalysis => "script-analysis",
            Self::Rehearsal => "rehearsal",
            Self::Recordings => "recordings",
            Self::RecordingAnalysis => "recording-analysis",
            Self::Analytics => "analytics",
        }
    }
}

/// Colour scheme applied to the document root as a `data-theme` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The signed-in user. Synthesized locally on login/registration; there is no
/// real authentication behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptStatus {
    Uploaded,
    Processing,
    Analyzed,
}

impl ScriptStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Uploaded => "Uploaded",
            Self::Processing => "Processing",
            Self::Analyzed => "Analyzed",
        }
    }
}

/// An uploaded scene script.
#[derive(Clone, Debug)]
pub struct Script {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub upload_date: String,
    pub status: ScriptStatus,
}

/// A recorded performance take. `score` is a 0-100 rating.
#[derive(Clone, Debug)]
pub struct Recording {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub date: String,
    pub score: u8,
    pub thumbnail: String,
}

/// All mutable application state. A single instance is owned by the store;
/// views only ever hold a shared borrow for the duration of a render.
#[derive(Debug)]
pub struct AppState {
    pub current_page: PageId,
    pub theme: Theme,
    pub user: Option<User>,
    pub scripts: Vec<Script>,
    pub recordings: Vec<Recording>,
    pub demo: DemoState,
}

impl AppState {
    /// Create the startup state, populated with the sample library.
    pub fn seeded() -> Self {
        Self {
            current_page: PageId::Home,
            theme: Theme::Light,
            user: None,
            scripts: vec![
                Script {
                    id: "1".into(),
                    title: "Romeo & Juliet - Balcony Scene".into(),
                    author: "William Shakespeare".into(),
                    content: sample_script().into(),
                    upload_date: "2025-10-28".into(),
                    status: ScriptStatus::Analyzed,
                },
                Script {
                    id: "2".into(),
                    title: "Hamlet - To be or not to be".into(),
                    author: "William Shakespeare".into(),
                    content: "Sample text...".into(),
                    upload_date: "2025-10-26".into(),
                    status: ScriptStatus::Analyzed,
                },
                Script {
                    id: "3".into(),
                    title: "A Streetcar Named Desire - Scene 3".into(),
                    author: "Tennessee Williams".into(),
                    content: "Sample text...".into(),
                    upload_date: "2025-10-25".into(),
                    status: ScriptStatus::Processing,
                },
            ],
            recordings: vec![
                Recording {
                    id: "1".into(),
                    title: "Romeo & Juliet - Take 3".into(),
                    duration: "3:42".into(),
                    date: "2025-10-30".into(),
                    score: 82,
                    thumbnail: String::new(),
                },
                Recording {
                    id: "2".into(),
                    title: "Hamlet - Take 1".into(),
                    duration: "4:15".into(),
                    date: "2025-10-29".into(),
                    score: 76,
                    thumbnail: String::new(),
                },
            ],
            demo: DemoState::default(),
        }
    }
}

/// The sample scene offered throughout the app.
pub fn sample_script() -> &'static str {
    "INT. CAPULET'S GARDEN - NIGHT\n\nROMEO stands beneath JULIET's balcony, looking up.\n\nROMEO\nBut soft, what light through yonder window breaks?\nIt is the east, and Juliet is the sun.\n\nJULIET appears at the window above.\n\nJULIET\nO Romeo, Romeo, wherefore art thou Romeo?\nDeny thy father and refuse thy name.\n\nROMEO\nShall I hear more, or shall I speak at this?\n\nJULIET\n'Tis but thy name that is my enemy.\nWhat's in a name? That which we call a rose\nBy any other name would smell as sweet."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_page_identifiers_fall_back_to_home() {
        assert_eq!(PageId::parse("settings"), PageId::Home);
        assert_eq!(PageId::parse(""), PageId::Home);
        assert_eq!(PageId::parse("Dashboard"), PageId::Home);
    }

    #[test]
    fn known_page_identifiers_round_trip() {
        for raw in [
            "home",
            "demo",
            "login",
            "register",
            "dashboard",
            "scripts",
            "script-analysis",
            "rehearsal",
            "recordings",
            "recording-analysis",
            "analytics",
        ] {
            assert_eq!(PageId::parse(raw).as_str(), raw);
        }
    }

    #[test]
    fn theme_flip_is_an_involution() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
    }

    #[test]
    fn seeded_state_matches_the_sample_library() {
        let state = AppState::seeded();

        assert_eq!(state.current_page, PageId::Home);
        assert_eq!(state.theme, Theme::Light);
        assert!(state.user.is_none());
        assert_eq!(state.scripts.len(), 3);
        assert_eq!(state.recordings.len(), 2);
        assert_eq!(state.scripts[0].status, ScriptStatus::Analyzed);
        assert_eq!(state.demo.active_tab, DemoTab::Analysis);
    }
}
