//! Modal dialog component for user interactions.
//!
//! One component owns whichever dialog is open, its form state and input
//! handling, and delegates rendering to the modules under [`dialogs`]. Form
//! dialogs share the [`FormState`] model: Tab moves focus (running blur
//! hooks such as the username availability check), Enter submits, Esc
//! cancels. Server-side validation errors arrive as a
//! [`Action::FormRejected`] and are applied to the open form, clearing the
//! previous marks first.
//!
//! [`dialogs`]: super::dialogs

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::dialogs::{form_dialogs, system_dialogs};
use crate::constants::{ERROR_PASSWORD_MISMATCH, ERROR_USERNAME_TAKEN};
use crate::forms::{password, FieldState, FormState, UsernameStatus};
use crate::icons::IconService;
use crate::ui::components::toast_stack::ToastKind;
use crate::ui::core::{
    actions::{Action, DeleteTarget, DialogType},
    Component,
};
use crate::upload::UploadPolicy;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    form: FormState,
    username_status: UsernameStatus,
    /// A submit arrived while the username check was still unresolved;
    /// resubmit automatically once the check comes back.
    pending_submit: bool,
    upload_policy: UploadPolicy,
    logs: Vec<String>,
    logs_scroll: usize,
    icons: IconService,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            form: FormState::default(),
            username_status: UsernameStatus::Unchecked,
            pending_submit: false,
            upload_policy: UploadPolicy::default(),
            logs: Vec::new(),
            logs_scroll: 0,
            icons: IconService::default(),
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn set_upload_policy(&mut self, policy: UploadPolicy) {
        self.upload_policy = policy;
    }

    pub fn set_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.form = FormState::default();
        self.username_status = UsernameStatus::Unchecked;
        self.pending_submit = false;
        self.logs_scroll = 0;
    }

    fn open_dialog(&mut self, dialog_type: DialogType) {
        self.form = match &dialog_type {
            DialogType::Upload => FormState::new(vec![FieldState::new("paths", "Paths")]),
            DialogType::PropertyEdit { title, description } => FormState::new(vec![
                FieldState::new("title", "Title").with_value(title),
                FieldState::new("description", "Description").with_value(description),
            ]),
            DialogType::Invitation => FormState::new(vec![FieldState::new("email", "Email")]),
            DialogType::Registration => FormState::new(vec![
                FieldState::new("username", "Username"),
                FieldState::secret("password1", "Password"),
                FieldState::secret("password2", "Confirm password"),
            ]),
            _ => FormState::default(),
        };
        self.username_status = UsernameStatus::Unchecked;
        self.pending_submit = false;
        self.logs_scroll = 0;
        self.dialog_type = Some(dialog_type);
    }

    fn is_form_dialog(&self) -> bool {
        matches!(
            self.dialog_type,
            Some(DialogType::Upload)
                | Some(DialogType::PropertyEdit { .. })
                | Some(DialogType::Invitation)
                | Some(DialogType::Registration)
        )
    }

    /// Re-run the live password comparison after an edit, mirroring the
    /// per-keystroke validation of the confirmation field.
    fn revalidate_passwords(&mut self) {
        if !matches!(self.dialog_type, Some(DialogType::Registration)) {
            return;
        }
        match password::check_match(self.form.value("password1"), self.form.value("password2")) {
            Some(false) => self.form.set_error("password2", ERROR_PASSWORD_MISMATCH),
            _ => self.form.clear_error("password2"),
        }
    }

    /// Track edits of the username: any change invalidates the previous
    /// availability result.
    fn after_edit(&mut self) {
        if !matches!(self.dialog_type, Some(DialogType::Registration)) {
            return;
        }
        let edited = match self.form.focused_field() {
            Some(field) => field.name.clone(),
            None => return,
        };
        match edited.as_str() {
            "username" => {
                self.username_status = UsernameStatus::Unchecked;
                self.pending_submit = false;
                self.form.clear_error("username");
            }
            "password1" | "password2" => self.revalidate_passwords(),
            _ => {}
        }
    }

    /// Blur hook: leaving a non-empty username field starts the
    /// availability check.
    fn handle_blur(&mut self, blurred: Option<String>) -> Action {
        if !matches!(self.dialog_type, Some(DialogType::Registration)) {
            return Action::None;
        }
        if blurred.as_deref() == Some("username") {
            let username = self.form.value("username").to_string();
            if !username.is_empty() && self.username_status == UsernameStatus::Unchecked {
                self.username_status = UsernameStatus::Checking;
                return Action::CheckUsername(username);
            }
        }
        Action::None
    }

    fn handle_submit(&mut self) -> Action {
        match &self.dialog_type {
            Some(DialogType::Upload) => {
                let paths: Vec<PathBuf> = self.form.value("paths").split_whitespace().map(PathBuf::from).collect();
                if paths.is_empty() {
                    return Action::None;
                }
                Action::UploadImages(paths)
            }
            Some(DialogType::PropertyEdit { .. }) => Action::SubmitPropertyEdit {
                fields: self.form.values(),
            },
            Some(DialogType::Invitation) => {
                let email = self.form.value("email").trim().to_string();
                if email.is_empty() {
                    return Action::None;
                }
                Action::SendInvitation { email }
            }
            Some(DialogType::Registration) => self.submit_registration(),
            Some(DialogType::DeleteConfirmation { target, .. }) => match target.clone() {
                DeleteTarget::Image { image_id } => Action::DeleteImage(image_id),
                DeleteTarget::User { user_id, action_url } => Action::DeleteUser { user_id, action_url },
            },
            _ => Action::None,
        }
    }

    /// Registration submits only when the passwords match and the username
    /// check resolved to available. A submit during an unresolved check is
    /// parked and re-fired when the result arrives.
    fn submit_registration(&mut self) -> Action {
        match password::check_match(self.form.value("password1"), self.form.value("password2")) {
            Some(true) => {}
            Some(false) => {
                self.form.set_error("password2", ERROR_PASSWORD_MISMATCH);
                return Action::ShowToast {
                    message: ERROR_PASSWORD_MISMATCH.to_string(),
                    kind: ToastKind::Error,
                };
            }
            None => return Action::None,
        }

        let username = self.form.value("username").to_string();
        if username.is_empty() {
            return Action::None;
        }

        match self.username_status {
            UsernameStatus::Available => Action::SubmitRegistration {
                fields: self.form.values(),
            },
            UsernameStatus::Taken => {
                self.form.set_error("username", ERROR_USERNAME_TAKEN);
                Action::ShowToast {
                    message: ERROR_USERNAME_TAKEN.to_string(),
                    kind: ToastKind::Error,
                }
            }
            UsernameStatus::Checking => {
                self.pending_submit = true;
                Action::None
            }
            UsernameStatus::Unchecked | UsernameStatus::Failed => {
                self.pending_submit = true;
                self.username_status = UsernameStatus::Checking;
                Action::CheckUsername(username)
            }
        }
    }

    fn apply_username_check(&mut self, username: &str, status: UsernameStatus) -> Action {
        if !matches!(self.dialog_type, Some(DialogType::Registration)) {
            return Action::None;
        }
        // Stale reply for an edited value
        if self.form.value("username") != username {
            return Action::None;
        }

        self.username_status = status;
        match status {
            UsernameStatus::Taken => {
                self.pending_submit = false;
                self.form.set_error("username", ERROR_USERNAME_TAKEN);
                Action::ShowToast {
                    message: ERROR_USERNAME_TAKEN.to_string(),
                    kind: ToastKind::Error,
                }
            }
            UsernameStatus::Available => {
                self.form.clear_error("username");
                if self.pending_submit {
                    self.pending_submit = false;
                    return self.submit_registration();
                }
                Action::None
            }
            _ => {
                self.pending_submit = false;
                Action::None
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab | KeyCode::Down => {
                let blurred = self.form.focus_next();
                self.handle_blur(blurred)
            }
            KeyCode::BackTab | KeyCode::Up => {
                let blurred = self.form.focus_previous();
                self.handle_blur(blurred)
            }
            KeyCode::Char(c) => {
                self.form.insert_char(c);
                self.after_edit();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                self.after_edit();
                Action::None
            }
            KeyCode::Delete => {
                self.form.delete();
                self.after_edit();
                Action::None
            }
            KeyCode::Left => {
                self.form.move_left();
                Action::None
            }
            KeyCode::Right => {
                self.form.move_right();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.dialog_type.is_none() {
            return Action::None;
        }

        match &self.dialog_type {
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => {
                // Any key dismisses the dialog
                Action::HideDialog
            }
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.logs_scroll = self.logs_scroll.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.logs_scroll += 1;
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                KeyCode::Enter | KeyCode::Char('y') => self.handle_submit(),
                _ => Action::None,
            },
            _ if self.is_form_dialog() => self.handle_form_key(key),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.open_dialog(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::UsernameChecked { username, status } => self.apply_username_check(&username, status),
            Action::FormRejected { message: _, errors } => {
                if self.is_form_dialog() {
                    self.form.apply_errors(&errors);
                }
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::Upload => form_dialogs::render_upload_dialog(f, rect, &self.form, &self.upload_policy),
            DialogType::PropertyEdit { .. } => form_dialogs::render_property_edit_dialog(f, rect, &self.form),
            DialogType::Invitation => form_dialogs::render_invitation_dialog(f, rect, &self.form),
            DialogType::Registration => {
                form_dialogs::render_registration_dialog(f, rect, &self.form, self.username_status);
            }
            DialogType::DeleteConfirmation { prompt, .. } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &prompt);
            }
            DialogType::Error(message) => system_dialogs::render_error_dialog(f, rect, &self.icons, &message),
            DialogType::Info(message) => system_dialogs::render_info_dialog(f, rect, &self.icons, &message),
            DialogType::Help => system_dialogs::render_help_dialog(f, rect),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, &self.logs, self.logs_scroll),
        }
    }
}
