//! Study Assistant - a terminal client for a document question-answering backend
//!
//! Upload lecture slides and notes, watch how many chunks the backend has
//! indexed, and ask questions whose answers cite their source documents.
//! Retrieval and answer generation happen on the backend; this crate is the
//! client side only.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - Backend client and the REST request/response types
//! * [`cli`] - Command-line arguments and one-shot subcommands
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components

/// Backend client and REST contract
pub mod api;

/// Command-line interface
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;
