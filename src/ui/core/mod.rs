//! Core UI functionality for the Study Assistant client.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, view state, component abstractions, and background
//! task management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard and tick event polling
//! - [`state`] - Notification slot and refresh signal owned by the app shell
//! - [`task_manager`] - Backend calls spawned off the UI loop
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn keys into actions
//! 2. **Actions** flow through every component and end at the app shell
//! 3. **State** that more than one component depends on lives in [`AppState`]
//! 4. **Tasks** report their results back as actions through a channel

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod state;
pub mod task_manager;

pub use actions::{Action, DialogType, FocusPane, NotificationKind};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use state::{AppState, Notification, RefreshSignal};
pub use task_manager::{TaskId, TaskKind, TaskManager};
