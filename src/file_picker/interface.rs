use crate::image_file::FileCandidate;

pub trait FilePicker {
    /// Blocks until the user chooses a file or cancels.
    fn pick_image(&self) -> Result<Option<FileCandidate>, Box<dyn std::error::Error + Send + Sync>>;
}
