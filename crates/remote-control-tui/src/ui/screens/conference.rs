//! Conference screen: participants, session status and sent replies

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};
use remote_control_core::Permission;

use crate::app::App;
use crate::ui::components::status_bar::{render_help_footer, render_status_bar, ConferenceStatus};
use crate::ui::layout::{render_header, section_block, two_column_layout, ScreenLayout};

/// Render the conference screen
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let state = &app.state;
    let layout = ScreenLayout::new(frame.area());
    let participants = state.conference.participants.list();
    let controller = app.receiver.controller();

    let local_name = state
        .conference
        .participants
        .local()
        .map(|p| p.name.as_str());
    render_header(frame, layout.header, local_name, theme);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(layout.content);
    let (left, right) = two_column_layout(body[0], 50);

    // Participant list
    let items: Vec<ListItem> = participants
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut label = format!("  {}", p.name);
            if p.local {
                label.push_str(" (me)");
            }
            if controller.as_ref() == Some(&p.id) {
                label.push_str("  [controlling]");
            } else if app.receiver.is_pending(&p.id) {
                label.push_str("  [requesting]");
            }
            ListItem::new(label).style(theme.menu_item(i == state.participant_index))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(section_block("Participants", theme)),
        left,
    );

    // Replies sent to requesters, newest first
    let replies: Vec<ListItem> = state
        .sent_replies
        .iter()
        .rev()
        .map(|reply| {
            let (verb, style) = match reply.permission {
                Permission::Grant => ("granted", theme.success()),
                Permission::Deny => ("denied", theme.text_secondary()),
            };
            let name = state.display_name(&reply.user_id);
            ListItem::new(format!("  {} {}", verb, name)).style(style)
        })
        .collect();
    frame.render_widget(
        List::new(replies).block(section_block("Permission replies", theme)),
        right,
    );

    let status = ConferenceStatus {
        sharing_screen: state.conference.sharing_screen,
        controller: controller.as_ref().map(|id| state.display_name(id)),
        participant_count: participants.len(),
    };
    render_status_bar(frame, body[1], &status, theme);

    if let Some(error) = &state.error_message {
        let error_line = Paragraph::new(error.as_str())
            .style(theme.danger())
            .alignment(Alignment::Center);
        frame.render_widget(error_line, layout.footer);
        return;
    }

    render_help_footer(
        frame,
        layout.footer,
        &[
            ("s", "Share screen"),
            ("x", "Stop control"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        theme,
    );
}
