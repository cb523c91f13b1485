/// Tab selection on the demo page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoTab {
    #[default]
    Analysis,
    Partner,
    Performance,
}

impl DemoTab {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::Partner => "partner",
            Self::Performance => "performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Analysis => "Script Analysis",
            Self::Partner => "Scene Partner",
            Self::Performance => "Performance",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    Actor,
    Partner,
}

/// One line of the simulated rehearsal exchange. `typing` marks a partner
/// reply that is still being "typed out".
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub typing: bool,
}

impl ChatMessage {
    pub fn actor<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            role: ChatRole::Actor,
            text: text.into(),
            typing: false,
        }
    }

    pub fn partner<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            role: ChatRole::Partner,
            text: text.into(),
            typing: true,
        }
    }
}

/// Acting methodologies offered by the analysis tab.
pub const METHODOLOGIES: &[(&str, &str)] = &[
    ("stanislavsky", "Stanislavski Method"),
    ("meisner", "Meisner Technique"),
    ("chekhov", "Michael Chekhov Technique"),
    ("hagen", "Uta Hagen"),
];

#[derive(Clone, Debug)]
pub struct SceneObjectives {
    pub main: String,
    pub scene: String,
    pub beats: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct SceneObstacles {
    pub internal: Vec<String>,
    pub external: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct EmotionalBeat {
    pub beat: u8,
    pub emotion: String,
    pub intensity: u8,
}

/// The canned analysis presented after the simulated "AI" pass completes.
#[derive(Clone, Debug)]
pub struct SceneAnalysis {
    pub objectives: SceneObjectives,
    pub obstacles: SceneObstacles,
    pub emotional_arc: Vec<EmotionalBeat>,
    pub coaching_tips: Vec<String>,
}

impl SceneAnalysis {
    pub fn sample() -> Self {
        Self {
            objectives: SceneObjectives {
                main: "To be with Juliet and overcome the obstacle of family".into(),
                scene: "Declare his love and gauge Juliet's feelings".into(),
                beats: vec![
                    "Observing Juliet from afar".into(),
                    "Revealing his presence".into(),
                    "Declaring love poetically".into(),
                ],
            },
            obstacles: SceneObstacles {
                internal: vec![
                    "Fear of rejection".into(),
                    "Anxiety about family discovery".into(),
                ],
                external: vec![
                    "Physical distance (the balcony)".into(),
                    "The feud between the families".into(),
                    "Risk of being captured".into(),
                ],
            },
            emotional_arc: vec![
                EmotionalBeat {
                    beat: 1,
                    emotion: "Longing".into(),
                    intensity: 70,
                },
                EmotionalBeat {
                    beat: 2,
                    emotion: "Wonder".into(),
                    intensity: 85,
                },
                EmotionalBeat {
                    beat: 3,
                    emotion: "Love".into(),
                    intensity: 95,
                },
            ],
            coaching_tips: vec![
                "Focus on the imagery - really see Juliet as the sun".into(),
                "Allow moments of silence to breathe and think".into(),
                "Balance the passion with vulnerability".into(),
                "Use elevated language without losing authenticity".into(),
            ],
        }
    }
}

/// Interactive state backing the demo page. The store resets it whenever the
/// current page changes, so a fresh visit always starts on the analysis tab.
#[derive(Clone, Debug)]
pub struct DemoState {
    pub active_tab: DemoTab,
    pub methodology: String,
    pub script_text: String,
    pub analyzing: bool,
    pub analysis: Option<SceneAnalysis>,
    pub rehearsing: bool,
    pub messages: Vec<ChatMessage>,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            active_tab: DemoTab::default(),
            methodology: METHODOLOGIES[0].0.to_string(),
            script_text: String::new(),
            analyzing: false,
            analysis: None,
            rehearsing: false,
            messages: Vec::new(),
        }
    }
}
