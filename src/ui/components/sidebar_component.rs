//! Navigation sidebar for switching between the property's views.
//!
//! The sidebar lists the two pages this client manages: the image gallery of
//! the property and the company's user list. Selection changes immediately
//! switch the main pane.

use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component, MainView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct SidebarComponent {
    pub selection: MainView,
    pub image_count: usize,
    pub user_count: usize,
    pub icons: IconService,
    list_state: ListState,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selection: MainView::Gallery,
            image_count: 0,
            user_count: 0,
            icons: IconService::default(),
            list_state,
        }
    }

    pub fn update_data(&mut self, image_count: usize, user_count: usize, selection: MainView) {
        self.image_count = image_count;
        self.user_count = user_count;
        self.selection = selection;
        self.list_state.select(Some(match selection {
            MainView::Gallery => 0,
            MainView::Users => 1,
        }));
    }

    fn other_view(&self) -> MainView {
        match self.selection {
            MainView::Gallery => MainView::Users,
            MainView::Users => MainView::Gallery,
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Uppercase navigation moves between views, leaving j/k for the
            // item lists in the main pane
            KeyCode::Char('J') | KeyCode::Char('K') => Action::SwitchView(self.other_view()),
            KeyCode::Char('1') => Action::SwitchView(MainView::Gallery),
            KeyCode::Char('2') => Action::SwitchView(MainView::Users),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let set = self.icons.icons();
        let items = vec![
            ListItem::new(format!(" {} Images ({})", set.ui.gallery_title, self.image_count)),
            ListItem::new(format!(" {} Users ({})", set.ui.users_title, self.user_count)),
        ];

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Property "),
            )
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
