use super::main::PlantId;
use crate::components::{palette, plant_result_card};
use crate::plant_id::core::Msg;
use egui::RichText;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(236, 253, 245);
const DISCLAIMER: &str = "AI-based identification – results may not be 100% accurate";

impl PlantId {
    pub fn render(&mut self, ctx: &egui::Context) {
        let operation = self.model().operation.clone();
        let texture = operation.image().and_then(|image| self.texture(image.id));

        let mut selected_file = None;
        let mut identify_clicked = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND).inner_margin(24.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    render_header(ui);
                    ui.add_space(24.0);

                    egui::Frame::none()
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(1.0, palette::GREEN_100))
                        .rounding(24.0)
                        .inner_margin(32.0)
                        .show(ui, |ui| {
                            let selected = operation
                                .image()
                                .map(|image| (image.file.name(), texture.as_ref()));
                            selected_file = self.upload_zone.show(
                                ui,
                                selected,
                                self.file_picker.as_ref(),
                                self.logger.as_ref(),
                            );

                            if operation.image().is_some() {
                                ui.add_space(24.0);
                                identify_clicked =
                                    render_identify_button(ui, operation.is_identifying());
                            }

                            if let Some(result) = operation.result() {
                                ui.add_space(24.0);
                                ui.separator();
                                ui.vertical_centered(|ui| {
                                    ui.label(
                                        RichText::new("Identification Result")
                                            .size(20.0)
                                            .color(palette::GREEN_800),
                                    );
                                });
                                ui.add_space(16.0);
                                plant_result_card::show(ui, result, texture.as_ref());

                                if let Some(feedback) = self.feedback.as_mut() {
                                    ui.add_space(24.0);
                                    feedback.show(ui);
                                }
                            } else if let Some(message) = operation.error() {
                                ui.add_space(24.0);
                                render_error_banner(ui, message);
                            }
                        });

                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(DISCLAIMER).small().color(palette::GRAY_500));
                    });
                });
            });

        if let Some(file) = selected_file {
            self.dispatch(Msg::ImageSelected(file));
        }
        if identify_clicked {
            self.dispatch(Msg::IdentifyRequested);
        }
    }
}

fn render_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("🌿 PlantID")
                .size(32.0)
                .strong()
                .color(palette::GREEN_800),
        );
        ui.label(RichText::new("Identify plants instantly from photos").color(palette::GRAY_500));
    });
}

/// Returns whether the button was clicked this frame.
fn render_identify_button(ui: &mut egui::Ui, identifying: bool) -> bool {
    let label = if identifying {
        "✨ Identifying..."
    } else {
        "✨ Identify Plant"
    };
    let button = egui::Button::new(RichText::new(label).size(16.0).color(egui::Color32::WHITE))
        .fill(palette::GREEN_600)
        .rounding(12.0)
        .min_size(egui::vec2(220.0, 44.0));

    ui.vertical_centered(|ui| {
        let clicked = ui.add_enabled(!identifying, button).clicked();
        if identifying {
            ui.add_space(8.0);
            ui.spinner();
        }
        clicked
    })
    .inner
}

fn render_error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(palette::RED_100)
        .stroke(egui::Stroke::new(1.0, palette::RED_600))
        .rounding(12.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(message).color(palette::RED_700));
            });
        });
}
