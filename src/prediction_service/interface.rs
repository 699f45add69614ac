use crate::image_file::ImageFile;
use crate::prediction_service::error::PredictionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub common_name: String,
    pub scientific_name: String,
    pub family: String,
    pub confidence: f64,
    pub description: String,
}

impl Prediction {
    /// `confidence` must be a `[0, 1]` fraction. Anything else, including an
    /// already-scaled percentage or NaN, is a malformed answer.
    pub fn validated(self) -> Result<Self, PredictionError> {
        if (0.0..=1.0).contains(&self.confidence) {
            Ok(self)
        } else {
            Err(PredictionError::ConfidenceOutOfRange(self.confidence))
        }
    }
}

pub trait PredictionService {
    fn predict(&self, image: &ImageFile) -> Result<Prediction, PredictionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_confidence(confidence: f64) -> Prediction {
        Prediction {
            common_name: "Monstera Deliciosa".to_string(),
            scientific_name: "Monstera deliciosa".to_string(),
            family: "Araceae".to_string(),
            confidence,
            description: "Swiss Cheese Plant".to_string(),
        }
    }

    #[test]
    fn test_validated_accepts_fractions_only() {
        for confidence in [0.0, 0.5, 0.94, 1.0] {
            assert!(with_confidence(confidence).validated().is_ok());
        }

        for confidence in [94.0, 1.01, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                with_confidence(confidence).validated(),
                Err(PredictionError::ConfidenceOutOfRange(_))
            ));
        }
    }
}
