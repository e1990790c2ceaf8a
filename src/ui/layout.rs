//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::TOAST_MAX_WIDTH;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (sidebar + view on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let screen_width = area.width;
        let screen_height = area.height;

        // Top area: sidebar + main view (all height except 1 line for status)
        let top_height = screen_height.saturating_sub(1);
        let top_area = Rect::new(0, 0, screen_width, top_height);

        // Bottom area: status bar (1 line height, full width)
        let status_area = Rect::new(0, top_height, screen_width, 1);

        vec![top_area, status_area]
    }

    /// Calculate the top pane layout (sidebar + main view side by side)
    #[must_use]
    pub fn top_pane_layout(area: Rect, sidebar_width: u16) -> Vec<Rect> {
        let sidebar_width = sidebar_width.min(area.width / 3);
        let main_width = area.width.saturating_sub(sidebar_width);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Length(main_width)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Area of the nth toast, anchored to the top-right corner with the
    /// stack growing downwards. Three lines per toast (bordered one-liner).
    #[must_use]
    pub fn toast_rect(index: usize, r: Rect) -> Rect {
        let width = TOAST_MAX_WIDTH.min(r.width);
        let height: u16 = 3;
        let x = r.x + r.width.saturating_sub(width);
        let y = r.y + (index as u16) * height;
        Rect::new(x, y, width, height.min(r.height.saturating_sub(y.saturating_sub(r.y))))
    }
}
