//! Status bar component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::Theme;

/// Conference status indicators
#[derive(Debug, Default)]
pub struct ConferenceStatus {
    /// Whether the local screen is being shared
    pub sharing_screen: bool,
    /// Display name of whoever controls the desktop
    pub controller: Option<String>,
    /// Number of participants in the conference
    pub participant_count: usize,
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &ConferenceStatus, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(inner);

    let share_indicator = if status.sharing_screen { "●" } else { "○" };
    let share_style = if status.sharing_screen {
        theme.success()
    } else {
        theme.text_muted()
    };
    let left = Paragraph::new(Span::styled(
        format!("{} Sharing screen", share_indicator),
        share_style,
    ));
    frame.render_widget(left, chunks[0]);

    if let Some(controller) = &status.controller {
        let center = Paragraph::new(format!("Controlled by {}", controller))
            .style(theme.warning())
            .alignment(Alignment::Center);
        frame.render_widget(center, chunks[1]);
    }

    let right = Paragraph::new(format!("{} participants", status.participant_count))
        .style(theme.text_secondary())
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[2]);
}

/// Render help hints in footer
pub fn render_help_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!("[{}]", key), theme.text_highlight()),
                Span::styled(format!(" {} ", action), theme.text_muted()),
                Span::raw(" "),
            ]
        })
        .collect();

    let line = Line::from(hint_spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
