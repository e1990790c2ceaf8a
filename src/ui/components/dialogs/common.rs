use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::forms::FormState;
use crate::ui::layout::LayoutManager;

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field paragraph with a visual cursor when focused
pub fn create_input_paragraph<'a>(value: &str, field_title: &str, focused: bool, secret: bool) -> Paragraph<'a> {
    let shown: String = if secret {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let input_display = if focused { format!("{}█", shown) } else { shown };

    let border_color = if focused { Color::White } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(border_color))
        .style(Style::default().fg(border_color));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const TAB_NEXT_FIELD: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
}

/// Render a multi-field form dialog: title, one bordered input per field
/// with an error line underneath, an optional footer line and the standard
/// instructions. Fields with a server or client error mark render the
/// message in red below the input, the inline annotation of the portal UI.
pub fn render_form_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    theme_color: Color,
    form: &FormState,
    footer: Option<Line>,
    instructions: &[InstructionShortcut],
) {
    // 4 lines per field (3 for the box, 1 for its error line), plus the
    // borders and the footer/instruction rows
    let height = (form.fields.len() as u16) * 4 + 4;
    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(create_dialog_block(title, theme_color), dialog_area);

    let inner = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(2),
    );

    let mut constraints: Vec<Constraint> = Vec::new();
    for _ in &form.fields {
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1)); // footer
    constraints.push(Constraint::Min(1)); // instructions

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field) in form.fields.iter().enumerate() {
        let focused = index == form.focused;
        f.render_widget(
            create_input_paragraph(&field.value, &field.label, focused, field.secret),
            rows[index * 2],
        );
        if let Some(error) = &field.error {
            let error_line = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
            f.render_widget(error_line, rows[index * 2 + 1]);
        }
    }

    let footer_row = rows[form.fields.len() * 2];
    if let Some(line) = footer {
        f.render_widget(Paragraph::new(line), footer_row);
    }

    f.render_widget(create_instructions_paragraph(instructions), rows[form.fields.len() * 2 + 1]);
}
