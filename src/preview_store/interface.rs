use crate::image_file::ImageFile;
use thiserror::Error;

/// Names one display reference. Allocated by the shell model, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u64);

#[derive(Error, Debug)]
pub enum PreviewError {
    /// The bytes could not be decoded into pixels
    #[error("could not decode preview: {0}")]
    Decode(#[from] image::ImageError),
}

/// Owns the display references (preview textures) of selected images.
/// Every reference that is created must be released exactly once.
pub trait PreviewStore {
    fn create(&mut self, image: ImageId, file: &ImageFile) -> Result<(), PreviewError>;

    /// Returns `false` when nothing was held under `image`.
    fn release(&mut self, image: ImageId) -> bool;

    fn texture(&self, image: ImageId) -> Option<egui::TextureHandle>;

    /// Number of references created and not yet released.
    fn live_count(&self) -> usize;
}
