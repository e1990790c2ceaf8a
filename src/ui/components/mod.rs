//! UI components for the Estatelist application.

pub mod dialog_component;
pub mod dialogs;
pub mod gallery_component;
pub mod sidebar_component;
pub mod status_bar;
pub mod toast_stack;
pub mod user_list_component;

pub use dialog_component::DialogComponent;
pub use gallery_component::GalleryComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
pub use toast_stack::{Toast, ToastKind, ToastStack};
pub use user_list_component::UserListComponent;
