use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ImageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "image size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ImageSizeError {}

/// Pixel dimensions of a render. Both sides are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ImageSizeError> {
        if width == 0 || height == 0 {
            return Err(ImageSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_size_new_valid() {
        let size = ImageSize::new(120, 80).unwrap();

        assert_eq!(size.width(), 120);
        assert_eq!(size.height(), 80);
        assert_eq!(size.pixel_count(), 9600);
    }

    #[test]
    fn test_single_pixel_is_valid() {
        let size = ImageSize::new(1, 1).unwrap();

        assert_eq!(size.pixel_count(), 1);
    }

    #[test]
    fn test_image_size_dimensions_must_be_positive() {
        assert_eq!(
            ImageSize::new(0, 10),
            Err(ImageSizeError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            ImageSize::new(10, 0),
            Err(ImageSizeError::InvalidSize {
                width: 10,
                height: 0
            })
        );
        assert_eq!(
            ImageSize::new(0, 0),
            Err(ImageSizeError::InvalidSize {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn test_image_size_contains_point() {
        let size = ImageSize::new(4, 3).unwrap();

        assert!(size.contains_point(Point { x: 0, y: 0 }));
        assert!(size.contains_point(Point { x: 3, y: 2 }));
        assert!(!size.contains_point(Point { x: 4, y: 0 }));
        assert!(!size.contains_point(Point { x: 0, y: 3 }));
    }

    #[test]
    fn test_pixel_count_does_not_overflow_u32() {
        let size = ImageSize::new(u32::MAX, 2).unwrap();

        assert_eq!(size.pixel_count(), u32::MAX as usize * 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(ImageSize::default().to_string(), "100x100");
    }
}
