use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::data::result_grid::ResultGrid;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours every result of the grid into a row-major RGB buffer.
///
/// The grid is read through its own index convention, so the output rows are
/// independent of the order the results were sampled in.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    grid: &ResultGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let size = grid.size();
    let mut buffer: PixelBufferData = Vec::with_capacity(size.pixel_count() * 3);

    for y in 0..size.height() {
        for x in 0..size.width() {
            let Colour { r, g, b } = mapper.map(grid[Point { x, y }]);

            buffer.push(r);
            buffer.push(g);
            buffer.push(b);
        }
    }

    Ok(PixelBuffer::from_data(size, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::escape_result::EscapeResult;
    use crate::core::data::image_size::ImageSize;

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap for StubColourMap {
        fn map(&self, result: EscapeResult) -> Colour {
            match result {
                EscapeResult::Escaped { iterations } => Colour {
                    r: iterations as u8,
                    g: iterations as u8,
                    b: iterations as u8,
                },
                EscapeResult::NonTerminated { .. } => Colour::BLACK,
            }
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_in_row_major_order() {
        // Column-major grid of a 3x2 image: (0,0) (0,1) (1,0) (1,1) (2,0) (2,1).
        let grid = ResultGrid::from_results(
            ImageSize::new(3, 2).unwrap(),
            vec![
                EscapeResult::Escaped { iterations: 1 },
                EscapeResult::Escaped { iterations: 4 },
                EscapeResult::Escaped { iterations: 2 },
                EscapeResult::Escaped { iterations: 5 },
                EscapeResult::Escaped { iterations: 3 },
                EscapeResult::NonTerminated { iterations: 6 },
            ],
        )
        .unwrap();
        let expected_buffer: PixelBufferData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0, 0, 0];

        let results = generate_pixel_buffer(&grid, &StubColourMap {}).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.size(), grid.size());
    }

    #[test]
    fn test_buffer_pixels_match_grid_pixels() {
        let size = ImageSize::new(4, 3).unwrap();
        let results = (0..12)
            .map(|i| EscapeResult::Escaped { iterations: i + 1 })
            .collect();
        let grid = ResultGrid::from_results(size, results).unwrap();
        let mapper = StubColourMap {};

        let buffer = generate_pixel_buffer(&grid, &mapper).unwrap();

        for x in 0..4 {
            for y in 0..3 {
                let pixel = Point { x, y };
                assert_eq!(buffer.pixel(pixel), Some(mapper.map(grid[pixel])));
            }
        }
    }

    #[test]
    fn test_error_displays_pixel_buffer_error() {
        let err = GeneratePixelBufferError::from(PixelBufferError::BoundsMismatch {
            image_size: 12,
            buffer_size: 3,
        });

        assert_eq!(
            format!("{}", err),
            "pixel buffer error: image size 12 does not match buffer size 3"
        );
    }
}
