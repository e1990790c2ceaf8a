//! Estatelist - a terminal client for self-hosted real-estate portals
//!
//! This library provides a terminal-based interface for managing a
//! property's image gallery and its company's users against a portal
//! backend: uploading and curating images, inviting users, completing
//! registrations and editing property details, with a rich interactive UI
//! built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - Portal API client and wire data structures
//! * [`config`] - Application configuration management
//! * [`forms`] - Form state, field errors and validation helpers
//! * [`service`] - Data layer between the UI and the API
//! * [`ui`] - Terminal user interface components
//! * [`upload`] - Upload candidate inspection and validation

/// Portal API client and data models
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Form state and validation helpers
pub mod forms;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Data layer between the UI and the portal API
pub mod service;

/// Terminal user interface components and rendering
pub mod ui;

/// Upload inspection and validation
pub mod upload;

// Re-export the most commonly used types for convenient access
pub use api::{GalleryImage, PortalApi, PortalUser, PropertyPage};
pub use service::PortalService;
