use super::fixture::{image, monstera};
use crate::plant_id::core::{
    init, to_percentage, transition, ClassificationResult, Effect, ImageId, Model, Msg,
    OperationState, SelectedImage, IDENTIFY_FAILED_MESSAGE,
};
use crate::prediction_service::error::PredictionError;

fn selected(id: u64, name: &str) -> SelectedImage {
    SelectedImage {
        id: ImageId(id),
        file: image(name),
    }
}

fn model(operation: OperationState) -> Model {
    Model {
        operation,
        next_image_id: 1,
    }
}

fn succeeded() -> OperationState {
    OperationState::Succeeded {
        image: selected(0, "leaf.jpg"),
        result: ClassificationResult::from_prediction(monstera(0.94), ImageId(0)).unwrap(),
    }
}

fn failed() -> OperationState {
    OperationState::Failed {
        image: selected(0, "leaf.jpg"),
        message: IDENTIFY_FAILED_MESSAGE.to_string(),
    }
}

#[test]
fn test_init() {
    let (model, effects) = init();

    assert_eq!(model.operation, OperationState::Idle);
    assert!(effects.is_empty());
}

#[test]
fn test_first_selection_goes_idle_to_selected() {
    let (model, effects) = transition(Model::default(), Msg::ImageSelected(image("leaf.jpg")));

    assert_eq!(model.operation, OperationState::Selected { image: selected(0, "leaf.jpg") });
    assert_eq!(
        effects,
        vec![Effect::CreatePreview {
            image: ImageId(0),
            file: image("leaf.jpg"),
        }]
    );
}

#[test]
fn test_identify_with_nothing_selected_is_a_no_op() {
    let (model, effects) = transition(Model::default(), Msg::IdentifyRequested);

    assert_eq!(model, Model::default());
    assert!(effects.is_empty());
}

#[test]
fn test_identify_from_selected_starts_request() {
    let (model, effects) = transition(
        model(OperationState::Selected { image: selected(0, "leaf.jpg") }),
        Msg::IdentifyRequested,
    );

    assert_eq!(
        model.operation,
        OperationState::Identifying { image: selected(0, "leaf.jpg") }
    );
    assert_eq!(
        effects,
        vec![Effect::Identify {
            image: ImageId(0),
            file: image("leaf.jpg"),
        }]
    );
}

#[test]
fn test_identify_while_in_flight_is_a_no_op() {
    let identifying = model(OperationState::Identifying { image: selected(0, "leaf.jpg") });

    let (model, effects) = transition(identifying.clone(), Msg::IdentifyRequested);

    assert_eq!(model, identifying);
    assert!(effects.is_empty());
}

#[test]
fn test_retry_is_allowed_after_failure_and_success() {
    for operation in [failed(), succeeded()] {
        let (model, effects) = transition(model(operation), Msg::IdentifyRequested);

        assert!(model.operation.is_identifying());
        assert!(model.operation.result().is_none());
        assert!(model.operation.error().is_none());
        assert_eq!(effects.len(), 1);
    }
}

#[test]
fn test_success_rounds_confidence_to_whole_percent() {
    let (model, effects) = transition(
        model(OperationState::Identifying { image: selected(0, "leaf.jpg") }),
        Msg::IdentifyDone {
            image: ImageId(0),
            result: Ok(monstera(0.9367)),
        },
    );

    let result = model.operation.result().unwrap();
    assert_eq!(result.confidence, 94);
    assert_eq!(result.common_name, "Monstera Deliciosa");
    assert_eq!(result.scientific_name, "Monstera deliciosa");
    assert_eq!(result.family, "Araceae");
    assert_eq!(result.image, ImageId(0));
    assert!(effects.is_empty());
}

#[test]
fn test_service_failure_goes_to_failed_without_result() {
    let (model, effects) = transition(
        model(OperationState::Identifying { image: selected(0, "leaf.jpg") }),
        Msg::IdentifyDone {
            image: ImageId(0),
            result: Err(PredictionError::Status(502)),
        },
    );

    assert_eq!(model.operation, failed());
    assert!(model.operation.result().is_none());
    assert_eq!(model.operation.error(), Some(IDENTIFY_FAILED_MESSAGE));
    assert!(effects.is_empty());
}

#[test]
fn test_unparseable_response_goes_to_failed() {
    let error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

    let (model, _) = transition(
        model(OperationState::Identifying { image: selected(0, "leaf.jpg") }),
        Msg::IdentifyDone {
            image: ImageId(0),
            result: Err(PredictionError::Malformed(error)),
        },
    );

    assert_eq!(model.operation, failed());
}

#[test]
fn test_already_scaled_confidence_is_rejected() {
    let (model, _) = transition(
        model(OperationState::Identifying { image: selected(0, "leaf.jpg") }),
        Msg::IdentifyDone {
            image: ImageId(0),
            result: Ok(monstera(94.0)),
        },
    );

    assert_eq!(model.operation, failed());
}

#[test]
fn test_new_selection_clears_result_or_error_and_swaps_preview() {
    for operation in [
        OperationState::Selected { image: selected(0, "leaf.jpg") },
        OperationState::Identifying { image: selected(0, "leaf.jpg") },
        succeeded(),
        failed(),
    ] {
        let (model, effects) =
            transition(model(operation), Msg::ImageSelected(image("flower.png")));

        assert_eq!(
            model.operation,
            OperationState::Selected { image: selected(1, "flower.png") }
        );
        assert_eq!(model.next_image_id, 2);
        assert_eq!(
            effects,
            vec![
                Effect::ReleasePreview { image: ImageId(0) },
                Effect::CreatePreview {
                    image: ImageId(1),
                    file: image("flower.png"),
                },
            ]
        );
    }
}

#[test]
fn test_stale_response_after_reselect_is_ignored() {
    let (model, _) = transition(
        model(OperationState::Identifying { image: selected(0, "leaf.jpg") }),
        Msg::ImageSelected(image("flower.png")),
    );
    let (model, _) = transition(model, Msg::IdentifyRequested);

    let (model, effects) = transition(
        model,
        Msg::IdentifyDone {
            image: ImageId(0),
            result: Ok(monstera(0.94)),
        },
    );

    assert_eq!(
        model.operation,
        OperationState::Identifying { image: selected(1, "flower.png") }
    );
    assert!(effects.is_empty());
}

#[test]
fn test_response_outside_identifying_is_ignored() {
    let selected_model = model(OperationState::Selected { image: selected(0, "leaf.jpg") });

    let (model, effects) = transition(
        selected_model.clone(),
        Msg::IdentifyDone {
            image: ImageId(0),
            result: Ok(monstera(0.94)),
        },
    );

    assert_eq!(model, selected_model);
    assert!(effects.is_empty());
}

#[test]
fn test_teardown_releases_held_preview() {
    let (model, effects) = transition(model(succeeded()), Msg::Teardown);

    assert_eq!(model.operation, OperationState::Idle);
    assert_eq!(effects, vec![Effect::ReleasePreview { image: ImageId(0) }]);

    let (_, effects) = transition(model, Msg::Teardown);
    assert!(effects.is_empty());
}

#[test]
fn test_ids_are_never_reused() {
    let (model, _) = transition(Model::default(), Msg::ImageSelected(image("a.jpg")));
    let (model, _) = transition(model, Msg::Teardown);
    let (model, _) = transition(model, Msg::ImageSelected(image("b.jpg")));

    assert_eq!(model.operation.image().map(|i| i.id), Some(ImageId(1)));
}

#[test]
fn test_to_percentage() {
    assert_eq!(to_percentage(0.9367), Some(94));
    assert_eq!(to_percentage(0.94), Some(94));
    assert_eq!(to_percentage(0.125), Some(13));
    assert_eq!(to_percentage(0.0), Some(0));
    assert_eq!(to_percentage(1.0), Some(100));
    assert_eq!(to_percentage(-0.1), None);
    assert_eq!(to_percentage(1.01), None);
    assert_eq!(to_percentage(f64::NAN), None);
}
