use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
    ) -> Result<(), PresentError> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        let size = buffer.size();

        // P6 is binary RGB: width, height and max colour value, then the raw bytes.
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", size.width(), size.height())?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()?;

        Ok(())
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::image_size::ImageSize;

    #[test]
    fn test_present_writes_binary_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        let data = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
        let buffer = PixelBuffer::from_data(ImageSize::new(2, 2).unwrap(), data.clone()).unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        let header = b"P6\n2 2\n255\n";
        assert_eq!(&written[..header.len()], header);
        assert_eq!(&written[header.len()..], data.as_slice());
    }

    #[test]
    fn test_present_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ppm");
        let buffer = PixelBuffer::from_data(ImageSize::new(1, 1).unwrap(), vec![0, 0, 0]).unwrap();

        let result = PpmFilePresenter::new().present(&buffer, &path);

        assert!(matches!(result, Err(PresentError::Io(_))));
    }
}
