use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use tokio::sync::mpsc;

use crate::api::{FormMethod, FormStatus, GalleryImage, PortalError, PortalUser, PropertySummary};
use crate::config::{Config, EndpointsConfig};
use crate::constants::{
    ERROR_CORRECT_BELOW, ERROR_FORM_GENERIC, ERROR_IMAGE_DELETE_FAILED, ERROR_INVITATION_FAILED,
    ERROR_PRIMARY_SET_FAILED, ERROR_UNEXPECTED, PROMPT_DELETE_IMAGE, SUCCESS_IMAGE_DELETED, SUCCESS_INVITATION_SENT,
    SUCCESS_PRIMARY_SET, SUCCESS_REGISTRATION_COMPLETED,
};
use crate::forms::UsernameStatus;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::service::PortalService;
use crate::ui::components::{
    DialogComponent, GalleryComponent, SidebarComponent, StatusBar, ToastKind, ToastStack, UserListComponent,
};
use crate::ui::core::{
    actions::{Action, DeleteTarget, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component, MainView,
};
use crate::ui::layout::LayoutManager;
use crate::upload::UploadPolicy;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub property: Option<PropertySummary>,
    pub images: Vec<GalleryImage>,
    pub users: Vec<PortalUser>,
    pub view: MainView,
    pub loading: bool,
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    gallery: GalleryComponent,
    user_list: UserListComponent,
    dialog: DialogComponent,
    toasts: ToastStack,

    // Application state
    state: AppState,

    // Services
    service: PortalService,
    endpoints: EndpointsConfig,
    upload_policy: UploadPolicy,
    sidebar_width: u16,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(mut service: PortalService, config: &Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();
        service.set_logger(logger.clone());

        let icons = IconService::new(config.ui.icon_theme);
        let upload_policy = UploadPolicy::from_config(&config.upload);

        let mut sidebar = SidebarComponent::new();
        sidebar.icons = icons.clone();
        let mut gallery = GalleryComponent::new();
        gallery.icons = icons.clone();
        let mut user_list = UserListComponent::new();
        user_list.icons = icons.clone();

        let mut dialog = DialogComponent::new();
        dialog.set_icons(icons.clone());
        dialog.set_upload_policy(upload_policy.clone());

        let mut toasts = ToastStack::new(Duration::from_millis(config.toast.duration_ms));
        toasts.set_icons(icons);

        let state = AppState {
            view: match config.ui.default_view.as_str() {
                "users" => MainView::Users,
                _ => MainView::Gallery,
            },
            loading: true,
            ..Default::default()
        };

        Self {
            sidebar,
            gallery,
            user_list,
            dialog,
            toasts,
            state,
            service,
            endpoints: config.endpoints.clone(),
            upload_policy,
            sidebar_width: config.ui.sidebar_width,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Check if an upload batch is currently running
    pub fn is_uploading(&self) -> bool {
        self.task_manager.is_uploading()
    }

    /// Whether any toasts are on screen (drives tick-rate re-rendering)
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Messages of the toasts currently on screen, oldest first
    pub fn toast_messages(&self) -> Vec<String> {
        self.toasts.iter().map(|toast| toast.message.clone()).collect()
    }

    /// Number of gallery entries currently shown
    pub fn image_count(&self) -> usize {
        self.state.images.len()
    }

    /// Number of user rows currently shown
    pub fn user_count(&self) -> usize {
        self.state.users.len()
    }

    /// Trigger the initial page load on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("AppComponent: Loading initial page data".to_string());
        self.state.loading = true;
        self.task_manager.spawn_page_load(self.service.clone());
        self.task_manager.spawn_users_load(self.service.clone());
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.sidebar
            .update_data(self.state.images.len(), self.state.users.len(), self.state.view);
        self.gallery.update_data(self.state.images.clone());
        self.user_list.update_data(self.state.users.clone());
        self.dialog.set_logs(self.logger.get_logs());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - reloading page".to_string());
                Action::ReloadPage
            }
            KeyCode::Char('u') => Action::ShowDialog(DialogType::Upload),
            KeyCode::Char('i') => Action::ShowDialog(DialogType::Invitation),
            KeyCode::Char('C') => Action::ShowDialog(DialogType::Registration),
            KeyCode::Char('e') => match &self.state.property {
                Some(property) => Action::ShowDialog(DialogType::PropertyEdit {
                    title: property.title.clone(),
                    description: property.description.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('x') => Action::DismissToast,
            KeyCode::Esc => {
                if self.dialog.is_visible() {
                    Action::HideDialog
                } else {
                    Action::Quit
                }
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::SwitchView(view) => {
                self.logger.log(format!("Navigation: Switched to {:?} view", view));
                self.state.view = view;
                self.sync_component_data();
                Action::None
            }
            Action::ReloadPage => {
                self.logger.log("Page: Full reload requested".to_string());
                self.state.loading = true;
                self.task_manager.spawn_page_load(self.service.clone());
                self.task_manager.spawn_users_load(self.service.clone());
                Action::None
            }
            Action::ReloadUsers => {
                self.task_manager.spawn_users_load(self.service.clone());
                Action::None
            }
            Action::PageLoaded(page) => {
                self.logger.log(format!(
                    "Page: Loaded '{}' with {} images",
                    page.property.title,
                    page.images.len()
                ));
                self.state.loading = false;
                self.state.property = Some(page.property);
                self.state.images = page.images;
                self.sync_component_data();
                Action::None
            }
            Action::UsersLoaded(users) => {
                self.state.users = users;
                self.sync_component_data();
                Action::None
            }
            Action::LoadFailed(message) => {
                self.logger.log(format!("Page: Load failed: {}", message));
                self.state.loading = false;
                self.dialog.update(Action::ShowDialog(DialogType::Error(message)));
                Action::None
            }
            Action::UploadImages(paths) => {
                self.dialog.update(Action::HideDialog);
                self.start_upload_batch(paths);
                Action::None
            }
            Action::ImageUploaded(image) => {
                self.logger
                    .log(format!("Gallery: Appended image {} from upload", image.image_id));
                self.state.images.push(image);
                self.sync_component_data();
                Action::None
            }
            Action::UploadBatchFinished { uploaded, failed } => {
                self.logger
                    .log(format!("Upload: Batch finished, {} uploaded, {} failed", uploaded, failed));
                Action::None
            }
            Action::RequestDeleteImage(image_id) => {
                self.dialog
                    .update(Action::ShowDialog(DialogType::DeleteConfirmation {
                        target: DeleteTarget::Image { image_id },
                        prompt: PROMPT_DELETE_IMAGE.to_string(),
                    }));
                Action::None
            }
            Action::DeleteImage(image_id) => {
                self.dialog.update(Action::HideDialog);
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation(format!("Delete image {}", image_id), move || async move {
                        Ok(match service.delete_image(image_id).await {
                            Ok(()) => vec![
                                Action::ImageDeleted(image_id),
                                Action::ShowToast {
                                    message: SUCCESS_IMAGE_DELETED.to_string(),
                                    kind: ToastKind::Success,
                                },
                            ],
                            Err(_) => vec![Action::ShowToast {
                                message: ERROR_IMAGE_DELETE_FAILED.to_string(),
                                kind: ToastKind::Error,
                            }],
                        })
                    });
                Action::None
            }
            Action::ImageDeleted(image_id) => {
                self.state.images.retain(|image| image.image_id != image_id);
                self.sync_component_data();
                Action::None
            }
            Action::SetPrimaryImage(image_id) => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation(format!("Set primary image {}", image_id), move || async move {
                        Ok(match service.set_primary_image(image_id).await {
                            // No local reconciliation of the primary flag:
                            // a success reloads the whole page state
                            Ok(()) => vec![
                                Action::ShowToast {
                                    message: SUCCESS_PRIMARY_SET.to_string(),
                                    kind: ToastKind::Success,
                                },
                                Action::ReloadPage,
                            ],
                            Err(_) => vec![Action::ShowToast {
                                message: ERROR_PRIMARY_SET_FAILED.to_string(),
                                kind: ToastKind::Error,
                            }],
                        })
                    });
                Action::None
            }
            Action::RequestDeleteUser(user_id) => {
                let trigger_url = EndpointsConfig::resolve(&self.endpoints.user_delete_path, user_id);
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation(format!("Fetch delete prompt for user {}", user_id), move || async move {
                        let prompt = service.fetch_delete_prompt(&trigger_url).await?;
                        Ok(vec![Action::ShowDialog(DialogType::DeleteConfirmation {
                            target: DeleteTarget::User {
                                user_id,
                                action_url: trigger_url,
                            },
                            prompt: prompt.text(),
                        })])
                    });
                Action::None
            }
            Action::DeleteUser { user_id, action_url } => {
                self.dialog.update(Action::HideDialog);
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation(format!("Delete user {}", user_id), move || async move {
                        Ok(match service.delete_object(&action_url).await {
                            Ok(outcome) => {
                                let message = outcome.message.unwrap_or_else(|| "Deleted successfully".to_string());
                                let mut actions = vec![Action::ShowToast {
                                    message,
                                    kind: ToastKind::Success,
                                }];
                                if outcome.redirect_url.is_some() {
                                    // Server asked for a navigation; reload
                                    // everything instead of patching the row
                                    actions.push(Action::ReloadPage);
                                    actions.push(Action::ReloadUsers);
                                } else {
                                    actions.push(Action::UserDeleted(user_id));
                                }
                                actions
                            }
                            Err(e) => vec![Action::ShowToast {
                                message: e.to_string(),
                                kind: ToastKind::Error,
                            }],
                        })
                    });
                Action::None
            }
            Action::UserDeleted(user_id) => {
                self.state.users.retain(|user| user.id != user_id);
                self.sync_component_data();
                Action::None
            }
            Action::SendInvitation { email } => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation(format!("Invite {}", email), move || async move {
                        Ok(match service.send_invitation(&email).await {
                            Ok(_) => vec![
                                Action::ShowToast {
                                    message: SUCCESS_INVITATION_SENT.to_string(),
                                    kind: ToastKind::Success,
                                },
                                Action::HideDialog,
                                Action::ReloadUsers,
                            ],
                            Err(PortalError::Rejected(message)) => vec![Action::ShowToast {
                                message: if message.is_empty() {
                                    ERROR_INVITATION_FAILED.to_string()
                                } else {
                                    message
                                },
                                kind: ToastKind::Error,
                            }],
                            Err(_) => vec![Action::ShowToast {
                                message: ERROR_UNEXPECTED.to_string(),
                                kind: ToastKind::Error,
                            }],
                        })
                    });
                Action::None
            }
            Action::SubmitPropertyEdit { fields } => {
                let service = self.service.clone();
                let action_url = EndpointsConfig::resolve(&self.endpoints.property_edit_path, self.endpoints.property_id);
                self.task_manager
                    .spawn_operation("Submit property edit".to_string(), move || async move {
                        Ok(match service.submit_form(&action_url, &fields, FormMethod::Patch).await {
                            Ok(outcome) => match outcome.status {
                                FormStatus::Success => vec![
                                    Action::ShowToast {
                                        message: outcome
                                            .message
                                            .unwrap_or_else(|| "Settings updated successfully".to_string()),
                                        kind: ToastKind::Success,
                                    },
                                    Action::HideDialog,
                                    // The redesigned PATCH shim: re-render
                                    // from a fresh page fetch instead of
                                    // replacing the document
                                    Action::ReloadPage,
                                ],
                                FormStatus::Error => vec![
                                    Action::FormRejected {
                                        message: outcome.message,
                                        errors: outcome.errors,
                                    },
                                    Action::ShowToast {
                                        message: ERROR_CORRECT_BELOW.to_string(),
                                        kind: ToastKind::Error,
                                    },
                                ],
                            },
                            Err(_) => vec![Action::ShowToast {
                                message: ERROR_FORM_GENERIC.to_string(),
                                kind: ToastKind::Error,
                            }],
                        })
                    });
                Action::None
            }
            Action::SubmitRegistration { fields } => {
                let service = self.service.clone();
                let action_url = self.endpoints.complete_registration_path.clone();
                self.task_manager
                    .spawn_operation("Submit registration".to_string(), move || async move {
                        Ok(match service.submit_form(&action_url, &fields, FormMethod::Post).await {
                            Ok(outcome) => match outcome.status {
                                FormStatus::Success => vec![
                                    Action::ShowToast {
                                        message: outcome
                                            .message
                                            .unwrap_or_else(|| SUCCESS_REGISTRATION_COMPLETED.to_string()),
                                        kind: ToastKind::Success,
                                    },
                                    Action::HideDialog,
                                    Action::ReloadUsers,
                                ],
                                FormStatus::Error => vec![
                                    Action::FormRejected {
                                        message: outcome.message,
                                        errors: outcome.errors,
                                    },
                                    Action::ShowToast {
                                        message: ERROR_CORRECT_BELOW.to_string(),
                                        kind: ToastKind::Error,
                                    },
                                ],
                            },
                            Err(_) => vec![Action::ShowToast {
                                message: ERROR_FORM_GENERIC.to_string(),
                                kind: ToastKind::Error,
                            }],
                        })
                    });
                Action::None
            }
            Action::CheckUsername(username) => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation(format!("Check username '{}'", username), move || async move {
                        let status = match service.check_username(&username).await {
                            Ok(true) => UsernameStatus::Taken,
                            Ok(false) => UsernameStatus::Available,
                            // The check itself failing keeps submission
                            // blocked; it is logged, not toasted
                            Err(e) => {
                                log::warn!("Username check failed: {}", e);
                                UsernameStatus::Failed
                            }
                        };
                        Ok(vec![Action::UsernameChecked { username, status }])
                    });
                Action::None
            }
            Action::ShowToast { message, kind } => {
                self.toasts.show(message, kind);
                Action::None
            }
            Action::DismissToast => {
                self.toasts.dismiss_newest();
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    /// Validate a picked batch and start the background upload for whatever
    /// survives. Rejections surface immediately and never reach the network.
    fn start_upload_batch(&mut self, paths: Vec<std::path::PathBuf>) {
        let (accepted, rejected) = self.upload_policy.partition_batch(&paths);

        for rejection in &rejected {
            self.logger.log(format!("Upload: Rejected {}", rejection));
            self.toasts.show(rejection.to_string(), ToastKind::Error);
        }

        if accepted.is_empty() {
            return;
        }

        self.logger
            .log(format!("Upload: Starting batch of {} files", accepted.len()));
        self.task_manager.spawn_upload_batch(self.service.clone(), accepted);
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        self.task_manager.cleanup_finished_tasks();

        actions
    }

    /// Advance time-driven UI state (toast expiry)
    pub fn on_tick(&mut self) {
        self.toasts.tick(Instant::now());
    }

    /// Route an action through the dialog and the active view component
    fn route_action(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        match self.state.view {
            MainView::Gallery => self.gallery.update(action),
            MainView::Users => self.user_list.update(action),
        }
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    let sidebar_action = self.sidebar.handle_key_events(key);
                    if !matches!(sidebar_action, Action::None) {
                        sidebar_action
                    } else {
                        let view_action = match self.state.view {
                            MainView::Gallery => self.gallery.handle_key_events(key),
                            MainView::Users => self.user_list.handle_key_events(key),
                        };
                        if !matches!(view_action, Action::None) {
                            view_action
                        } else {
                            self.handle_global_key(key)
                        }
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Render | EventType::Other => Action::None,
        };

        let action = self.route_action(action);
        let _final_action = self.handle_app_action(action).await;

        self.sync_component_data();

        Ok(())
    }

    /// Process one background action through the same routing as key events
    pub async fn handle_background_action(&mut self, action: Action) -> anyhow::Result<()> {
        let action = self.route_action(action);
        let _final_action = self.handle_app_action(action).await;
        self.sync_component_data();
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);
        let top = areas[0];
        let status_area = areas[1];

        let sidebar_width = self.sidebar_width.min(top.width / 3);
        let main_chunks = Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).split(top);

        self.sidebar.render(f, main_chunks[0]);
        match self.state.view {
            MainView::Gallery => self.gallery.render(f, main_chunks[1]),
            MainView::Users => self.user_list.render(f, main_chunks[1]),
        }

        StatusBar::render(
            f,
            status_area,
            self.state
                .property
                .as_ref()
                .map(|p| p.title.as_str())
                .unwrap_or_default(),
            self.state.loading,
            self.is_uploading(),
        );

        // Dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }

        // Toasts render over everything
        self.toasts.render(f, rect, Instant::now());
    }
}
