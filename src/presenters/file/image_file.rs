use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ExtendedColorType, ImageError};
use std::path::Path;

/// Encodes through the `image` crate, which picks the format from the file
/// extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageFilePresenter {}

impl FilePresenterPort for ImageFilePresenter {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
    ) -> Result<(), PresentError> {
        let size = buffer.size();

        image::save_buffer(
            filepath,
            buffer.buffer(),
            size.width(),
            size.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|err| match err {
            ImageError::IoError(err) => PresentError::Io(err),
            other => PresentError::Encoding(Box::new(other)),
        })
    }
}

impl ImageFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
