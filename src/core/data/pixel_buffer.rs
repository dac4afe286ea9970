use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn image_size_to_buffer_size(size: ImageSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        image_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                image_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "image size {} does not match buffer size {}",
                    image_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB bytes, ready for a presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: ImageSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(size: ImageSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = image_size_to_buffer_size(size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                image_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.size.contains_point(pixel) {
            return None;
        }

        let index =
            (pixel.y as usize * self.size.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> ImageSize {
        ImageSize::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(size(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.size(), size(2, 2));
        assert_eq!(buffer.buffer(), &data);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(size(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                image_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(size(2, 2), vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                image_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (2,0) blue
            1, 2, 3, // (0,1)
            4, 5, 6, // (1,1)
            7, 8, 9, // (2,1)
        ];
        let buffer = PixelBuffer::from_data(size(3, 2), data).unwrap();

        assert_eq!(
            buffer.pixel(Point { x: 2, y: 0 }),
            Some(Colour { r: 0, g: 0, b: 255 })
        );
        assert_eq!(
            buffer.pixel(Point { x: 0, y: 1 }),
            Some(Colour { r: 1, g: 2, b: 3 })
        );
        assert_eq!(
            buffer.pixel(Point { x: 2, y: 1 }),
            Some(Colour { r: 7, g: 8, b: 9 })
        );
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let buffer = PixelBuffer::from_data(size(2, 2), vec![0; 12]).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }), None);
        assert_eq!(buffer.pixel(Point { x: 0, y: 2 }), None);
    }
}
