//! User list view: the company's members and pending invitations.

use crate::api::{PortalUser, UserStatus};
use crate::icons::IconService;
use crate::ui::core::{actions::Action, actions::DialogType, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct UserListComponent {
    pub users: Vec<PortalUser>,
    pub icons: IconService,
    selected: usize,
    list_state: ListState,
}

impl Default for UserListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl UserListComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            users: Vec::new(),
            icons: IconService::default(),
            selected: 0,
            list_state,
        }
    }

    pub fn update_data(&mut self, users: Vec<PortalUser>) {
        self.users = users;
        if self.selected >= self.users.len() {
            self.selected = self.users.len().saturating_sub(1);
        }
        self.list_state.select(Some(self.selected));
    }

    pub fn selected_user(&self) -> Option<&PortalUser> {
        self.users.get(self.selected)
    }

    pub fn next(&mut self) {
        if !self.users.is_empty() {
            self.selected = (self.selected + 1) % self.users.len();
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn previous(&mut self) {
        if !self.users.is_empty() {
            self.selected = if self.selected == 0 {
                self.users.len() - 1
            } else {
                self.selected - 1
            };
            self.list_state.select(Some(self.selected));
        }
    }

    fn render_item(&self, user: &PortalUser) -> ListItem<'static> {
        let set = self.icons.icons();
        let (status_icon, status_label, status_color) = match user.status {
            UserStatus::Invited => (set.user.invited, "invited", Color::Yellow),
            UserStatus::Active => (set.user.active, "active", Color::Green),
        };

        let mut spans = vec![
            Span::raw(format!("{} ", status_icon)),
            Span::styled(user.email.clone(), Style::default().fg(Color::White)),
        ];
        if let Some(username) = &user.username {
            spans.push(Span::styled(
                format!(" ({})", username),
                Style::default().fg(Color::Gray),
            ));
        }
        spans.push(Span::styled(
            format!("  [{}]", status_label),
            Style::default().fg(status_color),
        ));

        ListItem::new(Line::from(spans))
    }
}

impl Component for UserListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextItem,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousItem,
            KeyCode::Char('i') => Action::ShowDialog(DialogType::Invitation),
            KeyCode::Char('C') => Action::ShowDialog(DialogType::Registration),
            KeyCode::Char('d') => match self.selected_user() {
                Some(user) => Action::RequestDeleteUser(user.id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextItem => {
                self.next();
                Action::None
            }
            Action::PreviousItem => {
                self.previous();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(
            " {} Users ({}) - i: invite • C: complete registration • d: delete ",
            self.icons.users_title(),
            self.users.len()
        );

        let items: Vec<ListItem> = self.users.iter().map(|user| self.render_item(user)).collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
