use crate::image_file::ImageFile;
use crate::prediction_service::error::PredictionError;
use crate::prediction_service::interface::Prediction;
pub use crate::preview_store::interface::ImageId;

pub const IDENTIFY_FAILED_MESSAGE: &str = "Failed to identify plant. Please try again.";

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage {
    pub id: ImageId,
    pub file: ImageFile,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationResult {
    pub common_name: String,
    pub scientific_name: String,
    pub family: String,
    /// Whole percent, 0 to 100
    pub confidence: u8,
    pub description: String,
    pub image: ImageId,
}

impl ClassificationResult {
    pub fn from_prediction(prediction: Prediction, image: ImageId) -> Result<Self, PredictionError> {
        let confidence = to_percentage(prediction.confidence)
            .ok_or(PredictionError::ConfidenceOutOfRange(prediction.confidence))?;

        Ok(Self {
            common_name: prediction.common_name,
            scientific_name: prediction.scientific_name,
            family: prediction.family,
            confidence,
            description: prediction.description,
            image,
        })
    }
}

/// Rounds a `[0, 1]` fraction to a whole percentage, half away from zero.
pub fn to_percentage(fraction: f64) -> Option<u8> {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return None;
    }
    Some((fraction * 100.0).round() as u8)
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    Selected {
        image: SelectedImage,
    },
    Identifying {
        image: SelectedImage,
    },
    Succeeded {
        image: SelectedImage,
        result: ClassificationResult,
    },
    Failed {
        image: SelectedImage,
        message: String,
    },
}

impl OperationState {
    pub fn image(&self) -> Option<&SelectedImage> {
        match self {
            OperationState::Idle => None,
            OperationState::Selected { image }
            | OperationState::Identifying { image }
            | OperationState::Succeeded { image, .. }
            | OperationState::Failed { image, .. } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match self {
            OperationState::Succeeded { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            OperationState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_identifying(&self) -> bool {
        matches!(self, OperationState::Identifying { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Model {
    pub operation: OperationState,
    pub next_image_id: u64,
}

#[derive(Debug)]
pub enum Msg {
    ImageSelected(ImageFile),
    IdentifyRequested,
    IdentifyDone {
        image: ImageId,
        result: Result<Prediction, PredictionError>,
    },
    Teardown,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    CreatePreview { image: ImageId, file: ImageFile },
    ReleasePreview { image: ImageId },
    Identify { image: ImageId, file: ImageFile },
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    let Model {
        operation,
        next_image_id,
    } = model;

    match (operation, msg) {
        (operation, Msg::ImageSelected(file)) => {
            let id = ImageId(next_image_id);
            let mut effects = vec![];
            if let Some(previous) = operation.image() {
                effects.push(Effect::ReleasePreview { image: previous.id });
            }
            effects.push(Effect::CreatePreview {
                image: id,
                file: file.clone(),
            });
            (
                Model {
                    operation: OperationState::Selected {
                        image: SelectedImage { id, file },
                    },
                    next_image_id: next_image_id + 1,
                },
                effects,
            )
        }

        (
            OperationState::Selected { image }
            | OperationState::Succeeded { image, .. }
            | OperationState::Failed { image, .. },
            Msg::IdentifyRequested,
        ) => {
            let effect = Effect::Identify {
                image: image.id,
                file: image.file.clone(),
            };
            (
                Model {
                    operation: OperationState::Identifying { image },
                    next_image_id,
                },
                vec![effect],
            )
        }

        (OperationState::Identifying { image }, Msg::IdentifyDone { image: id, result })
            if id == image.id =>
        {
            let operation = match result.and_then(|p| ClassificationResult::from_prediction(p, id)) {
                Ok(result) => OperationState::Succeeded { image, result },
                Err(_) => OperationState::Failed {
                    image,
                    message: IDENTIFY_FAILED_MESSAGE.to_string(),
                },
            };
            (
                Model {
                    operation,
                    next_image_id,
                },
                vec![],
            )
        }

        (operation, Msg::Teardown) => {
            let effects = operation
                .image()
                .map(|image| vec![Effect::ReleasePreview { image: image.id }])
                .unwrap_or_default();
            (
                Model {
                    operation: OperationState::Idle,
                    next_image_id,
                },
                effects,
            )
        }

        // Identify with nothing selected or already in flight, stale responses
        (operation, _) => (
            Model {
                operation,
                next_image_id,
            },
            vec![],
        ),
    }
}
