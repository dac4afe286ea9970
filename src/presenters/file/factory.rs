use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::image_file::ImageFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;
use std::path::Path;

/// File presenter chosen from the output path.
#[derive(Debug, Clone, Copy)]
pub enum FilePresenter {
    Ppm(PpmFilePresenter),
    Image(ImageFilePresenter),
}

impl FilePresenterPort for FilePresenter {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
    ) -> Result<(), PresentError> {
        match self {
            Self::Ppm(presenter) => presenter.present(buffer, filepath),
            Self::Image(presenter) => presenter.present(buffer, filepath),
        }
    }
}

/// `.ppm` files are written natively; everything else goes through `image`.
#[must_use]
pub fn file_presenter_factory(filepath: &Path) -> FilePresenter {
    let is_ppm = filepath
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        FilePresenter::Ppm(PpmFilePresenter::new())
    } else {
        FilePresenter::Image(ImageFilePresenter::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppm_extension_selects_native_writer() {
        assert!(matches!(
            file_presenter_factory(Path::new("render.ppm")),
            FilePresenter::Ppm(_)
        ));
        assert!(matches!(
            file_presenter_factory(Path::new("render.PPM")),
            FilePresenter::Ppm(_)
        ));
    }

    #[test]
    fn other_extensions_select_image_encoder() {
        for path in ["out.png", "out.jpg", "out"] {
            assert!(matches!(
                file_presenter_factory(Path::new(path)),
                FilePresenter::Image(_)
            ));
        }
    }
}
