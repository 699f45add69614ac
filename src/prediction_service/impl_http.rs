use crate::config::Config;
use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_service::error::PredictionError;
use crate::prediction_service::interface::{Prediction, PredictionService};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::sync::Arc;

pub struct PredictionServiceHttp {
    client: Client,
    predict_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionServiceHttp {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, PredictionError> {
        // reqwest defaults to a 30s timeout; none unless configured
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            predict_url: config.predict_url(),
            logger: logger.with_namespace("prediction_service").with_namespace("http"),
        })
    }
}

impl PredictionService for PredictionServiceHttp {
    fn predict(&self, image: &ImageFile) -> Result<Prediction, PredictionError> {
        let _ = self.logger.info(&format!(
            "POST {} ({}, {} bytes)",
            self.predict_url,
            image.name(),
            image.bytes().len()
        ));

        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.name().to_string())
            .mime_str(image.media_type())?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&self.predict_url).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let prediction = serde_json::from_str::<Prediction>(&body)?.validated()?;

        let _ = self.logger.info(&format!(
            "Predicted {} ({:.4})",
            prediction.common_name, prediction.confidence
        ));

        Ok(prediction)
    }
}
