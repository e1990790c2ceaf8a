//! Dialog rendering modules.
//!
//! The [`DialogComponent`](super::dialog_component::DialogComponent) owns
//! dialog state and input handling; these modules only render.

pub mod common;
pub mod form_dialogs;
pub mod system_dialogs;
