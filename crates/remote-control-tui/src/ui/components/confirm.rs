//! Confirmation dialog component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::ui::{layout::centered_rect, Theme};

/// Two-button confirmation dialog
pub struct ConfirmDialog<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Main message
    pub message: &'a str,
    /// Secondary line rendered below the message
    pub warning: Option<&'a str>,
    /// Label of the accepting button
    pub ok_label: &'a str,
    /// Label of the declining button
    pub cancel_label: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    /// Create a yes/no dialog
    pub fn new(title: &'a str, message: &'a str, ok_label: &'a str, cancel_label: &'a str) -> Self {
        Self {
            title,
            message,
            warning: None,
            ok_label,
            cancel_label,
        }
    }

    /// Add a secondary warning line
    pub fn with_warning(mut self, warning: Option<&'a str>) -> Self {
        self.warning = warning;
        self
    }

    /// Key hints shown under the message
    pub fn buttons(&self) -> String {
        format!("[Y] {}    [N] {}", self.ok_label, self.cancel_label)
    }

    /// Render the dialog
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 50, area);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border_focused());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(2),    // Message
                Constraint::Length(if self.warning.is_some() { 3 } else { 0 }),
                Constraint::Length(1), // Buttons
            ])
            .split(inner);

        let message_widget = Paragraph::new(self.message)
            .style(theme.text())
            .wrap(Wrap { trim: true });
        frame.render_widget(message_widget, chunks[0]);

        if let Some(warning) = self.warning {
            let warning_widget = Paragraph::new(warning)
                .style(theme.warning())
                .wrap(Wrap { trim: true });
            frame.render_widget(warning_widget, chunks[1]);
        }

        let buttons = Paragraph::new(self.buttons())
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(buttons, chunks[2]);
    }
}
