use crate::components::palette;
use crate::file_picker::interface::FilePicker;
use crate::image_file::{media_type_for_name, FileCandidate, ImageFile};
use crate::library::logger::interface::Logger;
use egui::RichText;

#[derive(Debug)]
pub enum UploadEvent {
    DragEnter,
    DragLeave,
    Drop(Vec<FileCandidate>),
    Picked(Option<FileCandidate>),
}

/// Drop target and file picker. Hands at most one validated image to the
/// caller per frame; what happens to it is the caller's business.
#[derive(Debug, Clone, Default)]
pub struct UploadZone {
    is_dragging: bool,
}

impl UploadZone {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn handle(&mut self, event: UploadEvent) -> Option<ImageFile> {
        match event {
            UploadEvent::DragEnter => {
                self.is_dragging = true;
                None
            }
            UploadEvent::DragLeave => {
                self.is_dragging = false;
                None
            }
            UploadEvent::Drop(candidates) => {
                self.is_dragging = false;
                candidates
                    .into_iter()
                    .next()
                    .and_then(ImageFile::from_candidate)
            }
            UploadEvent::Picked(candidate) => candidate.and_then(ImageFile::from_candidate),
        }
    }

    /// `selected` is the name of the current image and its preview, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        selected: Option<(&str, Option<&egui::TextureHandle>)>,
        file_picker: &dyn FilePicker,
        logger: &dyn Logger,
    ) -> Option<ImageFile> {
        let mut events = self.window_events(ui.ctx(), logger);

        let (stroke, fill) = if self.is_dragging {
            (palette::GREEN_500, palette::GREEN_100)
        } else {
            (palette::GREEN_200, palette::GREEN_50)
        };

        let mut browse_clicked = false;

        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(2.0, stroke))
            .rounding(16.0)
            .inner_margin(32.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| match selected {
                    Some((name, texture)) => {
                        match texture {
                            Some(texture) => {
                                ui.add(egui::Image::from_texture(texture).max_height(256.0));
                            }
                            None => {
                                ui.label(
                                    RichText::new(format!("{} (no preview available)", name))
                                        .color(palette::GRAY_500),
                                );
                            }
                        }
                        ui.add_space(16.0);
                        browse_clicked = ui.button("Choose Different Image").clicked();
                    }
                    None => {
                        ui.label(RichText::new("📷").size(48.0).color(palette::GREEN_600));
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new("Upload a clear photo of a plant leaf or flower")
                                .color(palette::GRAY_700),
                        );
                        ui.label(
                            RichText::new("Drag and drop or click to browse")
                                .small()
                                .color(palette::GRAY_500),
                        );
                        ui.add_space(16.0);
                        browse_clicked = ui.button("Browse Files").clicked();
                    }
                });
            });

        if browse_clicked {
            events.extend(browse(file_picker, logger));
        }

        let mut accepted = None;
        for event in events {
            if let Some(image) = self.handle(event) {
                accepted = Some(image);
            }
        }
        accepted
    }

    fn window_events(&self, ctx: &egui::Context, logger: &dyn Logger) -> Vec<UploadEvent> {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });

        if !dropped.is_empty() {
            let candidates = dropped
                .iter()
                .take(1)
                .filter_map(|file| dropped_to_candidate(file, logger))
                .collect();
            return vec![UploadEvent::Drop(candidates)];
        }

        match (hovering, self.is_dragging) {
            (true, false) => vec![UploadEvent::DragEnter],
            (false, true) => vec![UploadEvent::DragLeave],
            _ => vec![],
        }
    }
}

fn browse(file_picker: &dyn FilePicker, logger: &dyn Logger) -> Option<UploadEvent> {
    match file_picker.pick_image() {
        Ok(candidate) => Some(UploadEvent::Picked(candidate)),
        Err(e) => {
            let _ = logger.error(&format!("Could not read picked file: {}", e));
            None
        }
    }
}

fn dropped_to_candidate(file: &egui::DroppedFile, logger: &dyn Logger) -> Option<FileCandidate> {
    let name = if file.name.is_empty() {
        file.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        file.name.clone()
    };
    let media_type = media_type_for_name(&name);

    if let Some(bytes) = &file.bytes {
        return Some(FileCandidate::new(name, media_type, bytes.clone()));
    }

    let path = file.path.as_ref()?;
    match std::fs::read(path) {
        Ok(bytes) => Some(FileCandidate::new(name, media_type, bytes.into())),
        Err(e) => {
            let _ = logger.error(&format!("Could not read dropped file {}: {}", path.display(), e));
            None
        }
    }
}
