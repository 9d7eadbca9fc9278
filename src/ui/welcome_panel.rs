//! Welcome screen.

use eframe::egui::{RichText, Ui};

use crate::registry::ScreenContent;

use super::components::{read_only_text, screen_title};

/// Show the welcome panel.
pub fn show(ui: &mut Ui, content: &ScreenContent) {
    ui.add_space(20.0);
    screen_title(ui, &content.title, 36.0);

    if let Some(subtitle) = content.subtitle {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(subtitle).size(18.0));
        });
    }

    ui.add_space(10.0);
    read_only_text(ui, "welcome_tips", content.body, 14.0);
}
