//! System dialogs: delete confirmation, error, info, help and logs.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, prompt: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("{} Confirm Delete", icons.warning());
    let instructions = "Press Enter to confirm, Esc to cancel";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Red));

    let message_paragraph = Paragraph::new(prompt.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Min(2),
            ratatui::layout::Constraint::Length(1),
        ])
        .margin(1)
        .split(dialog_area);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str) {
    render_message_dialog(f, area, &format!("{} Info", icons.info()), message, Color::Blue);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str) {
    render_message_dialog(f, area, &format!("{} Error", icons.error()), message, Color::Red);
}

fn render_message_dialog(f: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(color));

    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Min(2),
            ratatui::layout::Constraint::Length(1),
        ])
        .margin(1)
        .split(dialog_area);

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new("Press any key to continue")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect) {
    let help_text = "\
Navigation
  J/K or 1/2     switch between Images and Users
  j/k or arrows  move within the current list

Gallery
  u              upload images
  p              set selected image as primary
  d              delete selected image (with confirmation)

Users
  i              invite a user by email
  C              complete a registration
  d              delete selected user (with confirmation)

General
  e              edit property details
  r              reload the page from the portal
  G              show logs
  x              dismiss the newest notification
  ?              toggle this help
  q or Esc       quit";

    let dialog_area = LayoutManager::centered_rect(70, 70, area);
    f.render_widget(Clear, dialog_area);

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Press Esc or ? to close ")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, dialog_area);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll_offset: usize) {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    f.render_widget(Clear, dialog_area);

    let visible_height = dialog_area.height.saturating_sub(2) as usize;
    let max_scroll = logs.len().saturating_sub(visible_height);
    let offset = scroll_offset.min(max_scroll);

    let text = logs
        .iter()
        .skip(offset)
        .take(visible_height)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", DIALOG_TITLE_LOGS))
                .style(Style::default().fg(Color::Gray)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, dialog_area);
}
