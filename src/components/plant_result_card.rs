use crate::components::palette;
use crate::plant_id::core::ClassificationResult;
use egui::RichText;

const IMAGE_SIDE: f32 = 128.0;

pub fn confidence_fraction(confidence: u8) -> f32 {
    f32::from(confidence.min(100)) / 100.0
}

pub fn confidence_label(confidence: u8) -> String {
    format!("{}%", confidence)
}

pub fn family_label(family: &str) -> String {
    format!("Family: {}", family)
}

/// Read-only card for one identification. Callers pass the preview texture
/// of the image the result belongs to, if it could be decoded.
pub fn show(ui: &mut egui::Ui, result: &ClassificationResult, texture: Option<&egui::TextureHandle>) {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, palette::GREEN_100))
        .rounding(16.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                match texture {
                    Some(texture) => {
                        ui.add(
                            egui::Image::from_texture(texture)
                                .max_width(IMAGE_SIDE)
                                .max_height(IMAGE_SIDE),
                        );
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(IMAGE_SIDE, IMAGE_SIDE),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(rect, 12.0, palette::GREEN_50);
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            "🌿",
                            egui::FontId::proportional(40.0),
                            palette::GREEN_600,
                        );
                    }
                }

                ui.add_space(16.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&result.common_name)
                            .size(22.0)
                            .strong()
                            .color(palette::GREEN_800),
                    );
                    ui.label(
                        RichText::new(&result.scientific_name)
                            .italics()
                            .color(palette::GRAY_500),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(family_label(&result.family)).color(palette::GRAY_700));
                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Confidence Score").color(palette::GRAY_700));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(confidence_label(result.confidence))
                                    .color(palette::GREEN_700),
                            );
                        });
                    });
                    ui.add(
                        egui::ProgressBar::new(confidence_fraction(result.confidence))
                            .fill(palette::GREEN_600),
                    );
                });
            });

            ui.add_space(16.0);
            ui.separator();
            ui.label(RichText::new(&result.description).color(palette::GRAY_700));
        });
}
