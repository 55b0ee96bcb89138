//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Conference client color palette
pub struct Theme {
    // Branding
    pub accent: Color,
    pub background: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(23, 160, 219), // #17A0DB
            background: Color::Rgb(33, 33, 33), // #212121

            success: Color::Rgb(76, 175, 80), // #4CAF50
            warning: Color::Rgb(255, 152, 0), // #FF9800
            danger: Color::Rgb(244, 67, 54),  // #F44336
            info: Color::Rgb(33, 150, 243),   // #2196F3

            border: Color::Rgb(66, 66, 66),            // #424242
            border_focused: Color::Rgb(23, 160, 219),  // #17A0DB
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575
            selection: Color::Rgb(55, 55, 55),         // #373737
        }
    }
}

impl Theme {
    /// Pick the palette from the high contrast preference
    pub fn from_preference(high_contrast: bool) -> Self {
        if high_contrast {
            Self::high_contrast()
        } else {
            Self::default()
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Key hints and other highlighted fragments
    pub fn text_highlight(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn danger(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Menu/list row style
    pub fn menu_item(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.selection)
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            accent: Color::Yellow,
            ..Self::default()
        }
    }
}
