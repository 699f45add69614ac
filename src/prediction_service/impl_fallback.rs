use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_service::error::PredictionError;
use crate::prediction_service::interface::{Prediction, PredictionService};
use std::sync::Arc;

/// Answers from `fallback` whenever `primary` fails. This hides real outages,
/// so it is only wired in when explicitly configured.
pub struct PredictionServiceFallback {
    primary: Arc<dyn PredictionService + Send + Sync>,
    fallback: Arc<dyn PredictionService + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionServiceFallback {
    pub fn new(
        primary: Arc<dyn PredictionService + Send + Sync>,
        fallback: Arc<dyn PredictionService + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            primary,
            fallback,
            logger: logger.with_namespace("prediction_service").with_namespace("fallback"),
        }
    }
}

impl PredictionService for PredictionServiceFallback {
    fn predict(&self, image: &ImageFile) -> Result<Prediction, PredictionError> {
        match self.primary.predict(image).and_then(Prediction::validated) {
            Ok(prediction) => Ok(prediction),
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Primary prediction failed, using fallback: {}", e));
                self.fallback.predict(image)
            }
        }
    }
}
