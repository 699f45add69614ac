pub mod feedback_buttons;
pub mod palette;
pub mod plant_result_card;
pub mod upload_zone;
