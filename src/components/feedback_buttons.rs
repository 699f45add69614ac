use crate::components::palette;
use egui::RichText;

pub const QUESTION: &str = "Is this identification correct?";
pub const ACKNOWLEDGMENT: &str = "Thank you for your feedback!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackChoice {
    #[default]
    Unset,
    Positive,
    Negative,
}

/// Local-only rating of the shown result. Nothing here leaves the widget.
#[derive(Debug, Clone, Default)]
pub struct FeedbackButtons {
    choice: FeedbackChoice,
}

impl FeedbackButtons {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn choice(&self) -> FeedbackChoice {
        self.choice
    }

    pub fn confirm_correct(&mut self) {
        self.choice = FeedbackChoice::Positive;
    }

    pub fn confirm_incorrect(&mut self) {
        self.choice = FeedbackChoice::Negative;
    }

    pub fn is_active(&self, choice: FeedbackChoice) -> bool {
        choice != FeedbackChoice::Unset && self.choice == choice
    }

    pub fn acknowledgment(&self) -> Option<&'static str> {
        match self.choice {
            FeedbackChoice::Unset => None,
            FeedbackChoice::Positive | FeedbackChoice::Negative => Some(ACKNOWLEDGMENT),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(palette::GREEN_50)
            .stroke(egui::Stroke::new(1.0, palette::GREEN_100))
            .rounding(16.0)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(QUESTION).color(palette::GRAY_700));
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        let yes_active = self.is_active(FeedbackChoice::Positive);
                        let yes = egui::Button::new(RichText::new("✔ Yes").color(if yes_active {
                            egui::Color32::WHITE
                        } else {
                            palette::GREEN_700
                        }))
                        .fill(if yes_active {
                            palette::GREEN_600
                        } else {
                            palette::GREEN_100
                        })
                        .min_size(egui::vec2(96.0, 36.0));
                        if ui.add(yes).clicked() {
                            self.confirm_correct();
                        }

                        let no_active = self.is_active(FeedbackChoice::Negative);
                        let no = egui::Button::new(RichText::new("✖ No").color(if no_active {
                            egui::Color32::WHITE
                        } else {
                            palette::RED_700
                        }))
                        .fill(if no_active {
                            palette::RED_600
                        } else {
                            palette::RED_100
                        })
                        .min_size(egui::vec2(96.0, 36.0));
                        if ui.add(no).clicked() {
                            self.confirm_incorrect();
                        }
                    });

                    if let Some(text) = self.acknowledgment() {
                        ui.add_space(12.0);
                        ui.label(RichText::new(text).small().color(palette::GRAY_500));
                    }
                });
            });
    }
}
