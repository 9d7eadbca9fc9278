//! Shared UI components.

use eframe::egui::{self, Align2, Color32, Painter, Pos2, Rect, Response, RichText, Ui};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const ERROR: Color32 = Color32::from_rgb(220, 40, 40);
}

/// Paint bold text at an anchor position.
///
/// The default fonts have no bold face, so the text is drawn twice one point apart.
pub fn bold_text(painter: &Painter, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32) -> Rect {
    let font = egui::FontId::proportional(size);
    let first = painter.text(pos, anchor, text, font.clone(), color);
    let second = painter.text(pos + egui::vec2(1.0, 0.0), anchor, text, font, color);
    first.union(second)
}

/// Render a navigation button for the button row.
pub fn nav_button(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(format!("{icon} {label}")).size(16.0).strong()))
}

/// Render a centered screen title.
pub fn screen_title(ui: &mut Ui, title: &str, size: f32) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).size(size).strong());
    });
}

/// Render read-only monospace text filling the remaining space.
pub fn read_only_text(ui: &mut Ui, id: &str, text: &str, size: f32) {
    egui::ScrollArea::vertical().id_salt(id).show(ui, |ui| {
        let mut text = text;
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .font(egui::FontId::monospace(size))
                .margin(egui::Margin::symmetric(20, 10))
                .desired_width(f32::INFINITY)
                .interactive(false),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_text_paints_offset_copy() {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                bold_text(
                    ui.painter(),
                    egui::pos2(60.0, 100.0),
                    Align2::LEFT_CENTER,
                    "Error: Image 'LogiSphere.png' not found.",
                    24.0,
                    colors::ERROR,
                );
            });
        });

        let xs: Vec<f32> = output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) => Some(text.pos.x),
                _ => None,
            })
            .collect();
        assert_eq!(xs.len(), 2);
        assert!((xs[1] - xs[0] - 1.0).abs() < 0.01);
    }
}
