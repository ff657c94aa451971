//! Dotalens UI - User interface layer
//!
//! This crate provides the Slint-based user interface for the Dotalens
//! player statistics client.

// Allow lints that trigger on Slint-generated code which we cannot control
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

mod app_window;
pub mod bridge;
pub mod controller;
pub mod state;

pub use app_window::AppWindow;
pub use bridge::{MatchRowData, ProfileLineData, UiCommand, UiUpdate};
pub use controller::{SearchController, run_async_runtime};
pub use state::MatchTableState;

// Include the generated Slint code
slint::include_modules!();
