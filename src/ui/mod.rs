//! User interface components.
//!
//! - `menu` - Menu bar (File, Help)
//! - `side_panel` - Translation settings: language pickers and log location
//! - `translate_panel` - Input form, translate action and results
//! - `toast` - Toast notification system

pub mod menu;
pub mod side_panel;
pub mod toast;
pub mod translate_panel;
