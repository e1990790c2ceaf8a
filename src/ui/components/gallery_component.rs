//! Gallery view: the property's images with their action controls.
//!
//! Every row carries the same controls the portal renders next to a gallery
//! entry (set-primary, delete); they dispatch as actions keyed off the
//! selected row, so entries appended after an upload work without any extra
//! wiring.

use crate::api::GalleryImage;
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

pub struct GalleryComponent {
    pub images: Vec<GalleryImage>,
    pub icons: IconService,
    selected: usize,
    list_state: ListState,
}

impl Default for GalleryComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            images: Vec::new(),
            icons: IconService::default(),
            selected: 0,
            list_state,
        }
    }

    pub fn update_data(&mut self, images: Vec<GalleryImage>) {
        self.images = images;
        if self.selected >= self.images.len() {
            self.selected = self.images.len().saturating_sub(1);
        }
        self.list_state.select(Some(self.selected));
    }

    pub fn selected_image(&self) -> Option<&GalleryImage> {
        self.images.get(self.selected)
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.selected = (self.selected + 1) % self.images.len();
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn previous(&mut self) {
        if !self.images.is_empty() {
            self.selected = if self.selected == 0 {
                self.images.len() - 1
            } else {
                self.selected - 1
            };
            self.list_state.select(Some(self.selected));
        }
    }

    fn render_item(&self, image: &GalleryImage) -> ListItem<'static> {
        let set = self.icons.icons();
        let mut spans = vec![
            Span::raw(format!("{} ", set.gallery.image)),
            Span::styled(
                if image.caption.is_empty() {
                    format!("image {}", image.image_id)
                } else {
                    image.caption.clone()
                },
                Style::default().fg(Color::White),
            ),
        ];

        if image.is_primary {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{} primary", set.gallery.primary),
                Style::default().fg(Color::Yellow),
            ));
        }

        spans.push(Span::styled(
            format!("  {}", image.url),
            Style::default().fg(Color::DarkGray),
        ));

        ListItem::new(Line::from(spans))
    }
}

impl Component for GalleryComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextItem,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousItem,
            KeyCode::Char('u') => Action::ShowDialog(DialogType::Upload),
            KeyCode::Char('d') => match self.selected_image() {
                Some(image) => Action::RequestDeleteImage(image.image_id),
                None => Action::None,
            },
            KeyCode::Char('p') => match self.selected_image() {
                Some(image) => Action::SetPrimaryImage(image.image_id),
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
            " {} Images ({}) - u: upload • p: set primary • d: delete ",
            self.icons.gallery_title(),
            self.images.len()
        );

        let items: Vec<ListItem> = self.images.iter().map(|image| self.render_item(image)).collect();

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
