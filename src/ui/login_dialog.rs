//! Modal login prompt and the error notice raised on a mismatch.

use eframe::egui::{self, Align, Id, Layout, RichText};

use crate::auth::LoginDialog;
use crate::shell::Notice;

use super::components::colors;

/// User action taken in the login prompt this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Submit,
    Cancel,
}

/// Render the login prompt.
pub fn show(ctx: &egui::Context, dialog: &mut LoginDialog) -> Action {
    let mut action = Action::None;

    let response = egui::Modal::new(Id::new("login_dialog")).show(ctx, |ui| {
        ui.set_width(380.0);
        ui.heading(dialog.title());
        ui.add_space(15.0);

        egui::Grid::new("login_grid")
            .num_columns(2)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                ui.label("Username:");
                ui.add(egui::TextEdit::singleline(&mut dialog.username).desired_width(240.0));
                ui.end_row();

                ui.label("Password:");
                let password = ui.add(
                    egui::TextEdit::singleline(&mut dialog.password)
                        .password(true)
                        .desired_width(240.0),
                );
                if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = Action::Submit;
                }
                ui.end_row();
            });

        ui.add_space(15.0);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Cancel").clicked() {
                action = Action::Cancel;
            }
            if ui.button("Login").clicked() {
                action = Action::Submit;
            }
        });
    });

    // Escape or a click outside the prompt
    if action == Action::None && response.should_close() {
        action = Action::Cancel;
    }

    action
}

/// Render a notice on top of any open prompt.
///
/// Returns `true` once the notice is acknowledged.
pub fn show_notice(ctx: &egui::Context, notice: Notice) -> bool {
    let mut dismissed = false;

    let response = egui::Modal::new(Id::new("notice_dialog")).show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.heading(notice.title);
        ui.add_space(10.0);
        ui.label(RichText::new(notice.message).color(colors::ERROR));
        ui.add_space(10.0);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    dismissed || response.should_close()
}
