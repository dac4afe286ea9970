use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum PresentError {
    Io(io::Error),
    Encoding(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not write image: {}", err),
            Self::Encoding(err) => write!(f, "could not encode image: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encoding(err) => Some(err.as_ref()),
        }
    }
}

impl From<io::Error> for PresentError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>)
    -> Result<(), PresentError>;
}
