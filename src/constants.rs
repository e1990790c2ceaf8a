//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_IMAGE_UPLOADED: &str = "Image uploaded successfully";
pub const SUCCESS_IMAGE_DELETED: &str = "Image deleted successfully";
pub const SUCCESS_PRIMARY_SET: &str = "Primary image set successfully";
pub const SUCCESS_INVITATION_SENT: &str = "Invitation sent successfully!";
pub const SUCCESS_REGISTRATION_COMPLETED: &str = "Registration completed";

// Error Messages
pub const ERROR_IMAGE_DELETE_FAILED: &str = "Failed to delete image";
pub const ERROR_PRIMARY_SET_FAILED: &str = "Failed to set primary image";
pub const ERROR_INVITATION_FAILED: &str = "Error sending invitation";
pub const ERROR_FORM_GENERIC: &str = "An error occurred. Please try again.";
pub const ERROR_UNEXPECTED: &str = "An unexpected error occurred";
pub const ERROR_CORRECT_BELOW: &str = "Please correct the errors below";
pub const ERROR_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const ERROR_USERNAME_TAKEN: &str = "Username is already taken";

// Prompts
pub const PROMPT_DELETE_IMAGE: &str = "Are you sure you want to delete this image?";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const ERROR_NO_BASE_URL: &str = "Error: no portal base URL configured";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Maximum toast width in columns
pub const TOAST_MAX_WIDTH: u16 = 44;

// Toast timing
/// Default visible lifetime of a toast in milliseconds
pub const TOAST_DEFAULT_DURATION_MS: u64 = 3000;
/// Extra time a dismissing toast stays on screen, mirroring its exit
/// transition, in milliseconds
pub const TOAST_EXIT_LINGER_MS: u64 = 300;

// Upload limits
pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;
/// Default upload size cap in megabytes
pub const UPLOAD_DEFAULT_MAX_MB: u64 = 5;
/// Default number of files accepted per batch
pub const UPLOAD_DEFAULT_MAX_FILES: usize = 50;
