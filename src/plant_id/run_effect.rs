use crate::library::logger::interface::Logger;
use crate::plant_id::core::{Effect, Msg};
use crate::prediction_service::interface::{Prediction, PredictionService};
use crate::preview_store::interface::PreviewStore;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    prediction_service: Arc<dyn PredictionService + Send + Sync>,
    preview_store: Arc<Mutex<dyn PreviewStore + Send>>,
    msg_sender: Sender<Msg>,
    ctx: egui::Context,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        prediction_service: Arc<dyn PredictionService + Send + Sync>,
        preview_store: Arc<Mutex<dyn PreviewStore + Send>>,
        msg_sender: Sender<Msg>,
        ctx: egui::Context,
    ) -> Self {
        Self {
            logger: logger.with_namespace("run_effect"),
            prediction_service,
            preview_store,
            msg_sender,
            ctx,
        }
    }

    #[cfg(test)]
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_sender.clone()
    }

    /// Preview effects run right here on the UI thread. Identification runs on
    /// its own thread and reports back through the message channel.
    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::CreatePreview { image, file } => match self.preview_store.lock() {
                Ok(mut store) => {
                    if let Err(e) = store.create(image, &file) {
                        let _ = self
                            .logger
                            .error(&format!("No preview for {}: {}", file.name(), e));
                    }
                }
                Err(e) => {
                    let _ = self.logger.error(&format!("Preview store unavailable: {}", e));
                }
            },
            Effect::ReleasePreview { image } => match self.preview_store.lock() {
                Ok(mut store) => {
                    if store.release(image) {
                        let _ = self.logger.info(&format!(
                            "Released preview {:?}, {} still live",
                            image,
                            store.live_count()
                        ));
                    } else {
                        let _ = self
                            .logger
                            .info(&format!("Preview {:?} was not held", image));
                    }
                }
                Err(e) => {
                    let _ = self.logger.error(&format!("Preview store unavailable: {}", e));
                }
            },
            Effect::Identify { image, file } => {
                let self_clone = self.clone();
                std::thread::spawn(move || {
                    let result = self_clone
                        .prediction_service
                        .predict(&file)
                        .and_then(Prediction::validated);
                    if let Err(e) = &result {
                        let _ = self_clone
                            .logger
                            .error(&format!("Identification of {} failed: {}", file.name(), e));
                    }
                    let _ = self_clone.msg_sender.send(Msg::IdentifyDone { image, result });
                    self_clone.ctx.request_repaint();
                });
            }
        }
    }
}
