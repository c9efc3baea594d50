//! LingoPad - A desktop text translator backed by the Google Cloud
//! Translation API.
//!
//! This library provides the translation workflow (catalog fetch, remote
//! translation, result recording) and the graphical user interface around it.
//!
//! ## Module Structure
//!
//! - [`app`] - Main application state and eframe::App implementation
//! - [`catalog`] - Supported-language catalog with a process-lifetime cache
//! - [`credentials`] - API credential loading (environment / credential file)
//! - [`error`] - Error taxonomy for the translation workflow
//! - [`provider`] - Translation provider seam, Google client and worker thread
//! - [`recorder`] - Translation log (CSV) recorder
//! - [`settings`] - User settings persistence
//! - [`translator`] - Translation invoker: validation and response handling
//! - [`ui`] - User interface components
//!   - `menu` - Menu bar (File, Help)
//!   - `side_panel` - Language pickers and log location
//!   - `translate_panel` - Input form, translate action and results
//!   - `toast` - Toast notification system

pub mod app;
pub mod catalog;
pub mod credentials;
pub mod error;
pub mod provider;
pub mod recorder;
pub mod settings;
pub mod translator;
pub mod ui;
