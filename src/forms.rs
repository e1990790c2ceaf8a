//! Form state shared by the dialog layer.
//!
//! Dialogs hold their inputs as a [`FormState`]: an ordered list of named
//! fields with cursor-aware editing, per-field error marks and a
//! clear-then-apply pass for server-side validation errors. The password
//! match check and the username availability gate used by the registration
//! flow live here too.

use std::collections::HashMap;

/// One input field of a dialog form.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub name: String,
    pub label: String,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
    /// Render the value masked (password fields)
    pub secret: bool,
}

impl FieldState {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            cursor: 0,
            error: None,
            secret: false,
        }
    }

    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            secret: true,
            ..Self::new(name, label)
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.cursor = value.chars().count();
        self
    }

    fn byte_position(&self) -> usize {
        self.value.chars().take(self.cursor).map(char::len_utf8).sum()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_position();
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_pos = self.byte_position();
            let prev_char_len = self
                .value
                .chars()
                .nth(self.cursor - 1)
                .map(char::len_utf8)
                .unwrap_or(1);
            self.value.remove(byte_pos - prev_char_len);
            self.cursor -= 1;
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let byte_pos = self.byte_position();
            self.value.remove(byte_pos);
        }
    }
}

/// An ordered collection of fields with one focused for editing.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: Vec<FieldState>,
    pub focused: usize,
}

impl FormState {
    #[must_use]
    pub fn new(fields: Vec<FieldState>) -> Self {
        Self { fields, focused: 0 }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Current value of a field, empty string when absent.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Fields as name/value pairs, in declaration order.
    #[must_use]
    pub fn values(&self) -> Vec<(String, String)> {
        self.fields.iter().map(|f| (f.name.clone(), f.value.clone())).collect()
    }

    /// Move focus to the next field. Returns the name of the field that
    /// lost focus, so callers can run blur hooks (the username check).
    pub fn focus_next(&mut self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        let blurred = self.fields[self.focused].name.clone();
        self.focused = (self.focused + 1) % self.fields.len();
        Some(blurred)
    }

    /// Move focus to the previous field. Returns the name of the field that
    /// lost focus.
    pub fn focus_previous(&mut self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        let blurred = self.fields[self.focused].name.clone();
        self.focused = if self.focused == 0 {
            self.fields.len() - 1
        } else {
            self.focused - 1
        };
        Some(blurred)
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.fields.get(self.focused)
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.backspace();
        }
    }

    pub fn delete(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.delete();
        }
    }

    pub fn move_left(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.cursor > 0 {
                field.cursor -= 1;
            }
        }
    }

    pub fn move_right(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.cursor < field.value.chars().count() {
                field.cursor += 1;
            }
        }
    }

    /// Remove every field error mark.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Replace field errors with a server-provided mapping: previous marks
    /// are cleared first, then each named field gets its new message.
    /// Messages for unknown field names are dropped.
    pub fn apply_errors(&mut self, errors: &HashMap<String, String>) {
        self.clear_errors();
        for (name, message) in errors {
            if let Some(field) = self.field_mut(name) {
                field.error = Some(message.clone());
            }
        }
    }

    pub fn set_error(&mut self, name: &str, message: &str) {
        if let Some(field) = self.field_mut(name) {
            field.error = Some(message.to_string());
        }
    }

    pub fn clear_error(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.error = None;
        }
    }

    /// Reset all values, cursors and error marks.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.cursor = 0;
            field.error = None;
        }
        self.focused = 0;
    }
}

pub mod password {
    //! Live password/confirmation comparison.

    /// Compare a password against its confirmation.
    ///
    /// Returns `None` while the confirmation is still empty (no error state
    /// is shown yet), `Some(false)` on a mismatch and `Some(true)` on a
    /// match. Re-run on every edit of the confirmation field.
    #[must_use]
    pub fn check_match(password: &str, confirmation: &str) -> Option<bool> {
        if confirmation.is_empty() {
            return None;
        }
        Some(password == confirmation)
    }
}

/// Availability state of the username under registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernameStatus {
    /// No check has run for the current value
    #[default]
    Unchecked,
    /// A check is in flight
    Checking,
    Available,
    Taken,
    /// The check itself failed; submission stays blocked
    Failed,
}

impl UsernameStatus {
    /// Whether this state allows the registration form to submit.
    #[must_use]
    pub fn allows_submit(&self) -> bool {
        matches!(self, Self::Available)
    }
}
