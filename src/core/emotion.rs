//! # Emotion Labels
//!
//! The service returns a free-form label. Ten labels get their own glyph
//! (and, in the TUI, their own color); anything else falls back to a
//! neutral presentation. Lookup ignores case.

/// Glyph for labels outside the known set.
pub const FALLBACK_GLYPH: &str = "🙂";
/// Glyph for the "ready to analyze" pane.
pub const IDLE_GLYPH: &str = "🧠";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Calm,
    Confused,
    Confident,
    Frustrated,
    Peaceful,
}

impl Emotion {
    pub const ALL: [Emotion; 10] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Anxious,
        Emotion::Excited,
        Emotion::Calm,
        Emotion::Confused,
        Emotion::Confident,
        Emotion::Frustrated,
        Emotion::Peaceful,
    ];

    /// Case-insensitive match against the known labels.
    pub fn from_label(label: &str) -> Option<Emotion> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(label))
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Anxious => "anxious",
            Emotion::Excited => "excited",
            Emotion::Calm => "calm",
            Emotion::Confused => "confused",
            Emotion::Confident => "confident",
            Emotion::Frustrated => "frustrated",
            Emotion::Peaceful => "peaceful",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Sad => "😢",
            Emotion::Angry => "😠",
            Emotion::Anxious => "😰",
            Emotion::Excited => "🤩",
            Emotion::Calm => "😌",
            Emotion::Confused => "😕",
            Emotion::Confident => "😎",
            Emotion::Frustrated => "😤",
            Emotion::Peaceful => "😇",
        }
    }
}

/// Glyph for any label, known or not.
pub fn glyph_for(label: &str) -> &'static str {
    Emotion::from_label(label).map_or(FALLBACK_GLYPH, Emotion::glyph)
}
