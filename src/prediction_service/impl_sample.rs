use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_service::error::PredictionError;
use crate::prediction_service::interface::{Prediction, PredictionService};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

pub struct PredictionServiceSample {
    delay: Duration,
    randomize: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionServiceSample {
    /// Always answers with the first catalog entry after `delay`.
    pub fn new(delay: Duration, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            delay,
            randomize: false,
            logger: logger.with_namespace("prediction_service").with_namespace("sample"),
        }
    }

    /// Picks a random catalog entry per request.
    pub fn randomized(delay: Duration, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            randomize: true,
            ..Self::new(delay, logger)
        }
    }
}

impl PredictionService for PredictionServiceSample {
    fn predict(&self, image: &ImageFile) -> Result<Prediction, PredictionError> {
        let _ = self
            .logger
            .info(&format!("Identifying {} with sample data...", image.name()));
        std::thread::sleep(self.delay);

        let catalog = catalog();
        let index = if self.randomize {
            rand::rng().random_range(0..catalog.len())
        } else {
            0
        };

        let mut catalog = catalog;
        Ok(catalog.swap_remove(index))
    }
}

pub fn catalog() -> Vec<Prediction> {
    vec![
        Prediction {
            common_name: "Monstera Deliciosa".to_string(),
            scientific_name: "Monstera deliciosa".to_string(),
            family: "Araceae".to_string(),
            confidence: 0.94,
            description: "Also known as the Swiss Cheese Plant, this tropical flowering plant is \
                native to Central America. It is characterized by its large, glossy, heart-shaped \
                leaves with distinctive splits and holes. Popular as an ornamental houseplant due \
                to its striking appearance and relatively easy care requirements."
                .to_string(),
        },
        Prediction {
            common_name: "Fiddle-Leaf Fig".to_string(),
            scientific_name: "Ficus lyrata".to_string(),
            family: "Moraceae".to_string(),
            confidence: 0.87,
            description: "A West African fig with large, violin-shaped leaves and prominent veins. \
                Indoors it wants bright indirect light and dislikes being moved."
                .to_string(),
        },
        Prediction {
            common_name: "Snake Plant".to_string(),
            scientific_name: "Dracaena trifasciata".to_string(),
            family: "Asparagaceae".to_string(),
            confidence: 0.91,
            description: "Stiff, upright, sword-shaped leaves banded in grey-green. Tolerates low \
                light and irregular watering, which makes it one of the hardiest houseplants."
                .to_string(),
        },
    ]
}
