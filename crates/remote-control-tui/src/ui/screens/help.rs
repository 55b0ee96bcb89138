//! Help screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::status_bar::render_help_footer;
use crate::ui::layout::{render_header, section_block, ScreenLayout};

/// Render the help screen
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(frame.area());
    let local_name = app
        .state
        .conference
        .participants
        .local()
        .map(|p| p.name.as_str());

    render_header(frame, layout.header, local_name, theme);

    let heading = |text: &'static str| Line::from(Span::styled(text, theme.text_highlight()));

    let content = Paragraph::new(vec![
        Line::from(""),
        heading("  Conference:"),
        Line::from("    j/k or Up/Down  - Move selection"),
        Line::from("    s               - Start or stop sharing your screen"),
        Line::from("    x               - End the remote control session"),
        Line::from("    q               - Quit"),
        Line::from("    ?               - Show this help"),
        Line::from(""),
        heading("  Remote control requests:"),
        Line::from("    y or Enter      - Allow the participant to control your desktop"),
        Line::from("    n or Esc        - Deny the request"),
        Line::from(""),
        Line::from("    Allowing control starts sharing your screen if you"),
        Line::from("    are not sharing it already."),
    ])
    .style(theme.text())
    .block(section_block("Help", theme));

    frame.render_widget(content, layout.content);

    render_help_footer(frame, layout.footer, &[("Esc", "Back")], theme);
}
