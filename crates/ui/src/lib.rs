//! Spotter UI - User interface layer
//!
//! This crate provides the Slint-based user interface for the Spotter
//! visitor info panel.

// Allow lints that trigger on Slint-generated code which we cannot control
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

mod app_window;
pub mod bridge;

pub use app_window::AppWindow;
pub use bridge::{UiCommand, UiUpdate};

// Include the generated Slint code
slint::include_modules!();
