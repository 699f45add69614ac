use crate::image_file::ImageFile;
use crate::preview_store::interface::{ImageId, PreviewError, PreviewStore};
use std::collections::BTreeSet;

/// Tracks display references without decoding anything.
#[derive(Debug, Default)]
pub struct PreviewStoreFake {
    pub live: BTreeSet<ImageId>,
    pub created: Vec<ImageId>,
    pub released: Vec<ImageId>,
}

impl PreviewStoreFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreviewStore for PreviewStoreFake {
    fn create(&mut self, image: ImageId, _file: &ImageFile) -> Result<(), PreviewError> {
        self.created.push(image);
        self.live.insert(image);
        Ok(())
    }

    fn release(&mut self, image: ImageId) -> bool {
        self.released.push(image);
        self.live.remove(&image)
    }

    fn texture(&self, _image: ImageId) -> Option<egui::TextureHandle> {
        None
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }
}
