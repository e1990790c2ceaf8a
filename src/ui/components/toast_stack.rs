//! Transient toast notifications.
//!
//! The toast stack is owned by the app component and passed wherever a
//! feature needs to notify the user; there is no global notification state.
//! Each toast lives for its visible duration, then lingers 300 ms in a
//! dimmed "leaving" state before removal, mirroring an exit transition.
//! There is no cap or queue: every show appends.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use uuid::Uuid;

use crate::constants::{TOAST_DEFAULT_DURATION_MS, TOAST_EXIT_LINGER_MS};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;

/// Severity of a toast, matching the notification kinds of the portal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn color(self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    fn icon(self, icons: &IconService) -> &'static str {
        let set = icons.icons();
        match self {
            Self::Info => set.toast.info,
            Self::Success => set.toast.success,
            Self::Error => set.toast.error,
        }
    }
}

/// One visible notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Whether the visible lifetime has elapsed and the toast is in its
    /// exit linger.
    #[must_use]
    pub fn is_leaving(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }

    /// Whether the toast should be removed entirely.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration + Duration::from_millis(TOAST_EXIT_LINGER_MS)
    }
}

/// Stack of active toasts, newest last.
pub struct ToastStack {
    toasts: Vec<Toast>,
    default_duration: Duration,
    icons: IconService,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new(Duration::from_millis(TOAST_DEFAULT_DURATION_MS))
    }
}

impl ToastStack {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            default_duration,
            icons: IconService::default(),
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Append a toast with the default duration.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> Uuid {
        self.show_at(Instant::now(), message, kind, self.default_duration)
    }

    /// Append a toast with an explicit duration.
    pub fn show_for(&mut self, message: impl Into<String>, kind: ToastKind, duration: Duration) -> Uuid {
        self.show_at(Instant::now(), message, kind, duration)
    }

    /// Append a toast against an explicit clock instant. The render and
    /// expiry logic works off the same instants, which keeps toast lifetime
    /// deterministic under test.
    pub fn show_at(&mut self, now: Instant, message: impl Into<String>, kind: ToastKind, duration: Duration) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            shown_at: now,
            duration,
        };
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Drop every toast whose exit linger has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    /// Manually dismiss the newest toast immediately.
    pub fn dismiss_newest(&mut self) {
        self.toasts.pop();
    }

    /// Manually dismiss a specific toast immediately.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Render the stack anchored to the top-right corner, newest at the
    /// bottom. Leaving toasts render dimmed.
    pub fn render(&self, f: &mut Frame, area: Rect, now: Instant) {
        for (index, toast) in self.toasts.iter().enumerate() {
            let rect = LayoutManager::toast_rect(index, area);
            if rect.height == 0 || rect.width < 8 {
                break;
            }

            let color = toast.kind.color();
            let mut style = Style::default().fg(color);
            if toast.is_leaving(now) {
                style = style.add_modifier(Modifier::DIM);
            }

            let inner_width = rect.width.saturating_sub(4) as usize;
            let mut message = toast.message.clone();
            if message.chars().count() > inner_width {
                message = message.chars().take(inner_width.saturating_sub(1)).collect();
                message.push('…');
            }

            let line = Line::from(vec![
                Span::styled(toast.kind.icon(&self.icons), style),
                Span::raw(" "),
                Span::styled(message, Style::default().fg(Color::White)),
            ]);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(style);

            f.render_widget(Clear, rect);
            f.render_widget(Paragraph::new(line).block(block), rect);
        }
    }
}
