//! Renderers for the form dialogs: image upload, property edit, user
//! invitation and registration completion.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

use super::common::{self, shortcuts};
use crate::forms::{FormState, UsernameStatus};
use crate::upload::UploadPolicy;

const FORM_INSTRUCTIONS: [common::InstructionShortcut; 5] = [
    shortcuts::ENTER_SUBMIT,
    shortcuts::SEPARATOR,
    shortcuts::TAB_NEXT_FIELD,
    shortcuts::SEPARATOR,
    shortcuts::ESC_CANCEL,
];

pub fn render_upload_dialog(f: &mut Frame, area: Rect, form: &FormState, policy: &UploadPolicy) {
    let hint = Line::from(Span::styled(
        format!(
            "Separate paths with spaces • {} • up to {}MB each",
            policy
                .allowed_types
                .iter()
                .filter_map(|t| t.split('/').next_back())
                .collect::<Vec<_>>()
                .join(", "),
            policy.max_file_size / crate::constants::BYTES_PER_MEGABYTE,
        ),
        Style::default().fg(Color::Gray),
    ));

    common::render_form_dialog(
        f,
        area,
        " Upload Images ",
        Color::Cyan,
        form,
        Some(hint),
        &FORM_INSTRUCTIONS,
    );
}

pub fn render_property_edit_dialog(f: &mut Frame, area: Rect, form: &FormState) {
    common::render_form_dialog(
        f,
        area,
        " Edit Property ",
        Color::Cyan,
        form,
        None,
        &FORM_INSTRUCTIONS,
    );
}

pub fn render_invitation_dialog(f: &mut Frame, area: Rect, form: &FormState) {
    common::render_form_dialog(
        f,
        area,
        " Invite User ",
        Color::Cyan,
        form,
        None,
        &FORM_INSTRUCTIONS,
    );
}

pub fn render_registration_dialog(f: &mut Frame, area: Rect, form: &FormState, username_status: UsernameStatus) {
    let footer = match username_status {
        UsernameStatus::Checking => Some(Line::from(Span::styled(
            "Checking username availability...",
            Style::default().fg(Color::Yellow),
        ))),
        UsernameStatus::Available => Some(Line::from(Span::styled(
            "Username is available",
            Style::default().fg(Color::Green),
        ))),
        UsernameStatus::Failed => Some(Line::from(Span::styled(
            "Could not verify username availability",
            Style::default().fg(Color::Yellow),
        ))),
        UsernameStatus::Unchecked | UsernameStatus::Taken => None,
    };

    common::render_form_dialog(
        f,
        area,
        " Complete Registration ",
        Color::Cyan,
        form,
        footer,
        &FORM_INSTRUCTIONS,
    );
}
