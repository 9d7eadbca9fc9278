pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod header;
pub mod logging;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{AppError, Result};
