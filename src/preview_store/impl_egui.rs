use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::preview_store::interface::{ImageId, PreviewError, PreviewStore};
use std::collections::HashMap;
use std::sync::Arc;

const MAX_PREVIEW_SIDE: u32 = 1024;

pub struct PreviewStoreEgui {
    ctx: egui::Context,
    textures: HashMap<ImageId, egui::TextureHandle>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PreviewStoreEgui {
    pub fn new(ctx: egui::Context, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            ctx,
            textures: HashMap::new(),
            logger: logger.with_namespace("preview_store").with_namespace("egui"),
        }
    }
}

pub fn decode_preview(bytes: &[u8]) -> Result<egui::ColorImage, PreviewError> {
    let mut decoded = image::load_from_memory(bytes)?;
    if decoded.width() > MAX_PREVIEW_SIDE || decoded.height() > MAX_PREVIEW_SIDE {
        decoded = decoded.thumbnail(MAX_PREVIEW_SIDE, MAX_PREVIEW_SIDE);
    }
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

impl PreviewStore for PreviewStoreEgui {
    fn create(&mut self, image: ImageId, file: &ImageFile) -> Result<(), PreviewError> {
        let color_image = decode_preview(file.bytes())?;
        let texture = self.ctx.load_texture(
            format!("preview-{}", image.0),
            color_image,
            egui::TextureOptions::LINEAR,
        );

        let _ = self
            .logger
            .info(&format!("Created preview {:?} for {}", image, file.name()));

        if let Some(previous) = self.textures.insert(image, texture) {
            let _ = self
                .logger
                .error(&format!("Preview {:?} was already held; replaced", image));
            drop(previous);
        }
        Ok(())
    }

    fn release(&mut self, image: ImageId) -> bool {
        // Dropping the last handle frees the GPU texture
        let released = self.textures.remove(&image).is_some();
        let _ = self
            .logger
            .info(&format!("Released preview {:?} (held: {})", image, released));
        released
    }

    fn texture(&self, image: ImageId) -> Option<egui::TextureHandle> {
        self.textures.get(&image).cloned()
    }

    fn live_count(&self) -> usize {
        self.textures.len()
    }
}
