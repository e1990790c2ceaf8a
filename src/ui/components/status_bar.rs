//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, property_title: &str, loading: bool, uploading: bool) {
        let status_text = if loading {
            "Loading page...".to_string()
        } else if uploading {
            "Uploading images...".to_string()
        } else if property_title.is_empty() {
            "r: reload • ?: help • q: quit".to_string()
        } else {
            format!("{} • r: reload • ?: help • G: logs • q: quit", property_title)
        };

        let status_color = if loading || uploading { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
