use crate::file_picker::interface::FilePicker;
use crate::image_file::FileCandidate;
use rfd::FileDialog;

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "heic", "heif", "avif", "svg",
];

pub struct FilePickerRfd {}

impl FilePickerRfd {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePicker for FilePickerRfd {
    fn pick_image(&self) -> Result<Option<FileCandidate>, Box<dyn std::error::Error + Send + Sync>> {
        let picked = FileDialog::new()
            .set_title("Choose a photo of a plant")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file();

        match picked {
            Some(path) => Ok(Some(FileCandidate::read_from_path(&path)?)),
            None => Ok(None),
        }
    }
}
