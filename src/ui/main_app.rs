//! Main application window.

use eframe::egui::{self, Align, Align2, Color32, Layout, Rect, Sense, TextureHandle, TextureOptions, Ui};
use egui_extras::{Size, StripBuilder};
use egui_phosphor::regular::{GEAR, HOUSE, PACKAGE, SIGN_OUT, SLIDERS, STOREFRONT, TRUCK, USERS, WAREHOUSE};

use crate::config::AppConfig;
use crate::content::Department;
use crate::error::Result;
use crate::header::Header;
use crate::registry::Screen;
use crate::shell::Shell;

use super::components::{bold_text, colors, nav_button};
use super::{department_panel, login_dialog, welcome_panel};

/// Height of the Home/department button row.
const BUTTON_ROW_HEIGHT: f32 = 50.0;

/// Header area content after texture upload.
enum HeaderView {
    Texture(TextureHandle),
    Fallback(String),
}

/// Main application state.
pub struct MainApp {
    config: AppConfig,
    shell: Shell,
    header: HeaderView,
}

impl MainApp {
    /// Build the window state and load the header image.
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Result<Self> {
        let header = match Header::load(&config.header.image_path, &config.header.image_name()) {
            Header::Image(image) => HeaderView::Texture(ctx.load_texture("header_image", image, TextureOptions::LINEAR)),
            Header::Fallback(text) => HeaderView::Fallback(text),
        };

        Ok(Self {
            config,
            shell: Shell::new()?,
            header,
        })
    }

    /// Render menu bar.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button(format!("{SIGN_OUT} Exit")).clicked() {
                        tracing::info!("Exit requested from menu");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close();
                    }
                });
                ui.menu_button("Options", |ui| {
                    // Placeholders, no behavior
                    if ui.button(format!("{GEAR} Settings")).clicked() {
                        tracing::debug!("Settings menu item selected");
                        ui.close();
                    }
                    if ui.button(format!("{SLIDERS} Preferences")).clicked() {
                        tracing::debug!("Preferences menu item selected");
                        ui.close();
                    }
                });
            });
        });
    }

    /// Render the header image or its fallback text.
    fn show_header(&self, ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        match &self.header {
            HeaderView::Texture(texture) => {
                let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                ui.painter().image(texture.id(), rect, uv, Color32::WHITE);
            }
            HeaderView::Fallback(text) => {
                bold_text(
                    ui.painter(),
                    egui::pos2(rect.left() + 50.0, rect.center().y),
                    Align2::LEFT_CENTER,
                    text,
                    24.0,
                    colors::ERROR,
                );
            }
        }
    }

    /// Render the Home button and one button per department.
    fn show_button_row(&mut self, ui: &mut Ui) {
        ui.with_layout(Layout::left_to_right(Align::Center).with_main_align(Align::Center), |ui| {
            ui.spacing_mut().item_spacing.x = 15.0;

            if nav_button(ui, HOUSE, "Home").clicked() {
                self.shell.go_home();
            }

            for department in Department::ALL {
                if nav_button(ui, department_icon(department), department.name()).clicked() {
                    self.shell.select_department(department);
                }
            }
        });
    }

    /// Render the visible screen.
    fn show_content(&self, ui: &mut Ui) {
        let screen = self.shell.visible_screen();
        let Some(content) = self.shell.visible_content() else {
            return;
        };

        match screen {
            Screen::Welcome => welcome_panel::show(ui, content),
            Screen::Department(department) => department_panel::show(ui, department, content),
        }
    }

    /// Render the login prompt and notice, forwarding results to the shell.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = self.shell.pending_login_mut() {
            match login_dialog::show(ctx, dialog) {
                login_dialog::Action::None => {}
                login_dialog::Action::Submit => {
                    self.shell.submit_login();
                }
                login_dialog::Action::Cancel => self.shell.cancel_login(),
            }
        }

        if let Some(notice) = self.shell.notice()
            && login_dialog::show_notice(ctx, notice)
        {
            self.shell.dismiss_notice();
        }
    }
}

impl eframe::App for MainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Menu bar
        self.show_menu_bar(ctx);

        // Header, button row, swappable content
        let header_fraction = self.config.header.height_fraction;
        egui::CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(header_fraction))
                .size(Size::exact(BUTTON_ROW_HEIGHT))
                .size(Size::remainder())
                .vertical(|mut strip| {
                    strip.cell(|ui| self.show_header(ui));
                    strip.cell(|ui| self.show_button_row(ui));
                    strip.cell(|ui| self.show_content(ui));
                });
        });

        // Modal login prompt and notice
        self.show_dialogs(ctx);
    }
}

/// Icon shown on a department button.
fn department_icon(department: Department) -> &'static str {
    match department {
        Department::Inventory => PACKAGE,
        Department::Supplier => STOREFRONT,
        Department::Fleet => TRUCK,
        Department::Warehouse => WAREHOUSE,
        Department::Customer => USERS,
    }
}
