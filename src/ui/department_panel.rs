//! Department screen with its static feature list.

use eframe::egui::Ui;

use crate::content::Department;
use crate::registry::ScreenContent;

use super::components::{read_only_text, screen_title};

/// Show a department panel.
pub fn show(ui: &mut Ui, department: Department, content: &ScreenContent) {
    ui.add_space(20.0);
    screen_title(ui, &content.title, 28.0);
    ui.add_space(20.0);
    read_only_text(ui, department.name(), content.body, 16.0);
}
