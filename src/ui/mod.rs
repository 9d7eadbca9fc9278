//! GUI panels and application state.

pub mod components;
pub mod department_panel;
pub mod login_dialog;
pub mod main_app;
pub mod welcome_panel;

pub use main_app::MainApp;
