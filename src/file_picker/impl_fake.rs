use crate::file_picker::interface::FilePicker;
use crate::image_file::FileCandidate;

/// Hands out the same candidate every time, or nothing to mimic a cancel.
pub struct FilePickerFake {
    candidate: Option<FileCandidate>,
}

impl FilePickerFake {
    pub fn new(candidate: Option<FileCandidate>) -> Self {
        Self { candidate }
    }
}

impl FilePicker for FilePickerFake {
    fn pick_image(&self) -> Result<Option<FileCandidate>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.candidate.clone())
    }
}
