//! Core UI functionality for the Estatelist application.
//!
//! This module contains the fundamental building blocks for the user
//! interface: event handling, the component abstraction, the action dispatch
//! types and background task management.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are processed through the [`EventHandler`] system
//! 4. **Tasks** are managed asynchronously via the [`TaskManager`]
//!
//! Every user gesture resolves to an [`Action`] that flows through the
//! component hierarchy; every background result comes back as an action over
//! the task manager's channel. Components never perform I/O themselves.

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DeleteTarget, DialogType, MainView};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
