use std::collections::HashMap;
use std::path::PathBuf;

use crate::api::{GalleryImage, PortalUser, PropertyPage};
use crate::forms::UsernameStatus;
use crate::ui::components::toast_stack::ToastKind;

/// The main pane currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainView {
    #[default]
    Gallery,
    Users,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SwitchView(MainView),
    NextItem,
    PreviousItem,

    // Page data
    ReloadPage,
    ReloadUsers,
    PageLoaded(PropertyPage),
    UsersLoaded(Vec<PortalUser>),
    LoadFailed(String),

    // Gallery operations
    UploadImages(Vec<PathBuf>),
    ImageUploaded(GalleryImage),
    UploadBatchFinished {
        uploaded: usize,
        failed: usize,
    },
    RequestDeleteImage(i64),
    DeleteImage(i64),
    ImageDeleted(i64),
    SetPrimaryImage(i64),

    // User management
    RequestDeleteUser(i64),
    DeleteUser {
        user_id: i64,
        action_url: String,
    },
    UserDeleted(i64),
    SendInvitation {
        email: String,
    },

    // Forms
    SubmitPropertyEdit {
        fields: Vec<(String, String)>,
    },
    SubmitRegistration {
        fields: Vec<(String, String)>,
    },
    CheckUsername(String),
    UsernameChecked {
        username: String,
        status: UsernameStatus,
    },
    FormRejected {
        message: Option<String>,
        errors: HashMap<String, String>,
    },

    // UI operations
    ShowToast {
        message: String,
        kind: ToastKind,
    },
    DismissToast,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    Upload,
    PropertyEdit {
        title: String,
        description: String,
    },
    Invitation,
    Registration,
    DeleteConfirmation {
        target: DeleteTarget,
        prompt: String,
    },
    Error(String),
    Info(String),
    Help,
    Logs,
}

/// What a delete confirmation dialog will delete once confirmed.
#[derive(Debug, Clone)]
pub enum DeleteTarget {
    Image { image_id: i64 },
    User { user_id: i64, action_url: String },
}
