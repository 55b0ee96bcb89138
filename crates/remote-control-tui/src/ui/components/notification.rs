//! Toasts reporting what happened to remote control requests
//!
//! Toasts stack down from the top-right corner, newest at the bottom, and
//! fade after a level-dependent number of ticks.

use std::collections::VecDeque;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Theme;

/// Toasts shown at once; older ones are dropped
const MAX_VISIBLE: usize = 3;

/// Widest toast, borders included
const MAX_WIDTH: u16 = 60;

/// Rows taken by one toast plus the gap below it
const SLOT_HEIGHT: u16 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    /// Ticks a toast of this level stays up (100 ms ticks)
    fn lifetime(self) -> u64 {
        match self {
            Self::Info | Self::Success => 30,
            Self::Warning => 50,
            Self::Error => 60,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            Self::Info => theme.info(),
            Self::Success => theme.success(),
            Self::Warning => theme.warning(),
            Self::Error => theme.danger(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks left before the toast disappears
    pub ttl: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            ttl: level.lifetime(),
        }
    }

    /// Session ended or request answered
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    /// Control granted
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success)
    }

    /// Request refused without asking the user
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning)
    }

    /// A reply could not be sent
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    fn is_expired(&self) -> bool {
        self.ttl == 0
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = self.level.style(theme);
        let line = Line::from(vec![
            Span::styled(format!("{} ", self.level.marker()), style),
            Span::styled(self.message.as_str(), theme.text()),
        ]);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            area,
        );
    }
}

/// Where the `slot`-th toast goes inside `area`, if it still fits
fn toast_area(area: Rect, slot: usize, message: &str) -> Option<Rect> {
    let top = SLOT_HEIGHT.checked_mul(u16::try_from(slot).ok()?)? + 1;
    if area.height < top + 3 || area.width < 3 {
        return None;
    }

    // marker, space, borders and a little padding
    let wanted = u16::try_from(message.chars().count() + 6).unwrap_or(u16::MAX);
    let width = wanted.min(MAX_WIDTH).min(area.width);
    let x = area.x + area.width.saturating_sub(width + 2);

    Some(Rect::new(x, area.y + top, width, 3))
}

/// Stack of live toasts
#[derive(Debug, Default)]
pub struct NotificationManager {
    toasts: VecDeque<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast.
    ///
    /// Repeating the newest toast restarts its timer instead of stacking a
    /// copy, so a burst of identical refusals takes one slot.
    pub fn push(&mut self, notification: Notification) {
        if let Some(newest) = self.toasts.back_mut() {
            if newest.message == notification.message && newest.level == notification.level {
                newest.ttl = notification.ttl;
                return;
            }
        }

        self.toasts.push_back(notification);
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    /// Age every toast by one tick and drop the expired ones
    pub fn tick(&mut self) {
        for toast in &mut self.toasts {
            toast.ttl = toast.ttl.saturating_sub(1);
        }
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Live toasts, oldest first
    pub fn active(&self) -> impl ExactSizeIterator<Item = &Notification> {
        self.toasts.iter()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        for (slot, toast) in self.toasts.iter().enumerate() {
            match toast_area(area, slot, &toast.message) {
                Some(rect) => toast.render(frame, rect, theme),
                None => break,
            }
        }
    }
}
