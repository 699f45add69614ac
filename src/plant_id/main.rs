use crate::components::feedback_buttons::FeedbackButtons;
use crate::components::upload_zone::UploadZone;
use crate::file_picker::interface::FilePicker;
use crate::library::logger::interface::Logger;
use crate::plant_id::core::{init, transition, Effect, ImageId, Model, Msg};
use crate::plant_id::run_effect::RunEffect;
use crate::prediction_service::interface::PredictionService;
use crate::preview_store::interface::PreviewStore;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};

pub struct PlantId {
    pub(super) model: Model,
    pub(super) msg_receiver: Receiver<Msg>,
    pub(super) run_effect: RunEffect,
    pub(super) preview_store: Arc<Mutex<dyn PreviewStore + Send>>,
    pub(super) file_picker: Arc<dyn FilePicker + Send + Sync>,
    pub(super) logger: Arc<dyn Logger + Send + Sync>,
    pub(super) upload_zone: UploadZone,
    pub(super) feedback: Option<FeedbackButtons>,
}

impl PlantId {
    pub fn new(
        ctx: egui::Context,
        logger: Arc<dyn Logger + Send + Sync>,
        prediction_service: Arc<dyn PredictionService + Send + Sync>,
        preview_store: Arc<Mutex<dyn PreviewStore + Send>>,
        file_picker: Arc<dyn FilePicker + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("plant_id");
        let (msg_sender, msg_receiver) = channel();
        let (model, effects) = init();
        let run_effect = RunEffect::new(
            logger.clone(),
            prediction_service,
            preview_store.clone(),
            msg_sender,
            ctx,
        );

        let plant_id = Self {
            model,
            msg_receiver,
            run_effect,
            preview_store,
            file_picker,
            logger,
            upload_zone: UploadZone::new(),
            feedback: None,
        };
        plant_id.run_effects(effects);
        plant_id
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    #[cfg(test)]
    pub fn feedback(&self) -> Option<&FeedbackButtons> {
        self.feedback.as_ref()
    }

    #[cfg(test)]
    pub fn sender(&self) -> std::sync::mpsc::Sender<Msg> {
        self.run_effect.sender()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let _ = self.logger.info(&format!(
            "\nold model:\n\t{:?}\n\nmsg:\n\t{:?}",
            self.model, msg,
        ));

        let was_showing_result = self.model.operation.result().is_some();
        let (new_model, effects) = transition(self.model.clone(), msg);

        let _ = self.logger.info(&format!(
            "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
            new_model, effects
        ));

        self.model = new_model;
        self.sync_feedback(was_showing_result);
        self.run_effects(effects);
    }

    pub fn drain_messages(&mut self) {
        while let Ok(msg) = self.msg_receiver.try_recv() {
            self.dispatch(msg);
        }
    }

    #[cfg(test)]
    pub fn wait_for_message(&mut self, timeout: std::time::Duration) -> bool {
        match self.msg_receiver.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(_) => false,
        }
    }

    pub(super) fn texture(&self, image: ImageId) -> Option<egui::TextureHandle> {
        self.preview_store.lock().ok()?.texture(image)
    }

    // A fresh feedback widget per shown result, gone as soon as the result is
    fn sync_feedback(&mut self, was_showing_result: bool) {
        let is_showing_result = self.model.operation.result().is_some();
        match (was_showing_result, is_showing_result) {
            (_, false) => self.feedback = None,
            (false, true) => self.feedback = Some(FeedbackButtons::new()),
            (true, true) => {}
        }
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect.run_effect(effect);
        }
    }
}

impl eframe::App for PlantId {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_messages();
        self.render(ctx);
    }
}

impl Drop for PlantId {
    fn drop(&mut self) {
        self.dispatch(Msg::Teardown);
    }
}
