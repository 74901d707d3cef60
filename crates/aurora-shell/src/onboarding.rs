//! Language-selection onboarding screen.
//!
//! Shown once per session before the desktop takes input. Selection is
//! idempotent: choosing a language stores it and keeps it, and choosing
//! the same language again simply continues.

use crate::feedback::Feedback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub id: &'static str,
    pub label: &'static str,
    pub disabled: bool,
}

/// The selectable languages. Only English ships enabled for now.
pub const LANGUAGES: &[LanguageOption] = &[
    LanguageOption {
        id: "en",
        label: "English",
        disabled: false,
    },
    LanguageOption {
        id: "es",
        label: "Español",
        disabled: true,
    },
    LanguageOption {
        id: "fr",
        label: "Français",
        disabled: true,
    },
];

#[derive(Debug)]
pub struct Onboarding {
    selected: usize,
}

impl Onboarding {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn options(&self) -> &'static [LanguageOption] {
        LANGUAGES
    }

    /// Index the selection cursor is on.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the cursor to a hovered row. Disabled and out-of-range rows
    /// are ignored; a valid hover plays the hover cue.
    pub fn hover(&mut self, index: usize, feedback: &dyn Feedback) -> bool {
        match LANGUAGES.get(index) {
            Some(option) if !option.disabled => {
                self.selected = index;
                feedback.hover();
                true
            }
            _ => false,
        }
    }

    /// Activate a language by id. Returns the chosen id when the screen
    /// should continue to the desktop; `None` for disabled or unknown
    /// languages.
    pub fn choose(&mut self, id: &str, feedback: &dyn Feedback) -> Option<&'static str> {
        let (index, option) = LANGUAGES
            .iter()
            .enumerate()
            .find(|(_, option)| option.id == id)?;
        if option.disabled {
            return None;
        }
        self.selected = index;
        feedback.click();
        Some(option.id)
    }
}

impl Default for Onboarding {
    fn default() -> Self {
        Self::new()
    }
}
