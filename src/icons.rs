//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Notification and dialog icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Status bar icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    /// Connection dot, colored by state when rendered
    pub indicator: &'static str,
    pub documents: &'static str,
    pub upload: &'static str,
}

/// Chat transcript icons
#[derive(Debug, Clone)]
pub struct ChatIcons {
    pub user: &'static str,
    pub assistant: &'static str,
    pub sources: &'static str,
    pub thinking: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub ui: UiIcons,
    pub status: StatusIcons,
    pub chat: ChatIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            status: StatusIcons {
                indicator: "●",
                documents: "📄",
                upload: "📤",
            },
            chat: ChatIcons {
                user: "🧑",
                assistant: "🤖",
                sources: "📚",
                thinking: "💭",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            status: StatusIcons {
                indicator: "●",
                documents: "▤",
                upload: "⇪",
            },
            chat: ChatIcons {
                user: "▶",
                assistant: "◆",
                sources: "§",
                thinking: "…",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            status: StatusIcons {
                indicator: "*",
                documents: "#",
                upload: "^",
            },
            chat: ChatIcons {
                user: ">",
                assistant: "<",
                sources: "@",
                thinking: "...",
            },
        }
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn indicator(&self) -> &'static str {
        self.icons().status.indicator
    }

    #[must_use]
    pub fn documents(&self) -> &'static str {
        self.icons().status.documents
    }

    #[must_use]
    pub fn upload(&self) -> &'static str {
        self.icons().status.upload
    }

    #[must_use]
    pub fn chat_user(&self) -> &'static str {
        self.icons().chat.user
    }

    #[must_use]
    pub fn chat_assistant(&self) -> &'static str {
        self.icons().chat.assistant
    }

    #[must_use]
    pub fn sources(&self) -> &'static str {
        self.icons().chat.sources
    }

    #[must_use]
    pub fn thinking(&self) -> &'static str {
        self.icons().chat.thinking
    }
}
