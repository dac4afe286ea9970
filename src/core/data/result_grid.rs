use crate::core::data::escape_result::EscapeResult;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultGridError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ResultGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "result grid needs {} results but {} were supplied",
                    expected, actual
                )
            }
        }
    }
}

impl Error for ResultGridError {}

/// Dense per-pixel results of one render.
///
/// Results are stored column by column: the result for pixel `(x, y)` lives
/// at index `x * height + y`. Sampling walks `x` in the outer loop and `y` in
/// the inner loop, so the storage order is also the sampling order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGrid {
    size: ImageSize,
    results: Vec<EscapeResult>,
}

impl ResultGrid {
    pub fn from_results(
        size: ImageSize,
        results: Vec<EscapeResult>,
    ) -> Result<Self, ResultGridError> {
        if results.len() != size.pixel_count() {
            return Err(ResultGridError::SizeMismatch {
                expected: size.pixel_count(),
                actual: results.len(),
            });
        }

        Ok(Self { size, results })
    }

    /// Builds a grid from results already produced in index order.
    pub(crate) fn from_ordered_results(size: ImageSize, results: Vec<EscapeResult>) -> Self {
        debug_assert_eq!(results.len(), size.pixel_count());

        Self { size, results }
    }

    #[must_use]
    pub fn index_of(size: ImageSize, pixel: Point) -> usize {
        pixel.x as usize * size.height() as usize + pixel.y as usize
    }

    #[must_use]
    pub fn pixel_at(size: ImageSize, index: usize) -> Point {
        let height = size.height() as usize;

        Point {
            x: (index / height) as u32,
            y: (index % height) as u32,
        }
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn results(&self) -> &[EscapeResult] {
        &self.results
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<EscapeResult> {
        if !self.size.contains_point(pixel) {
            return None;
        }

        self.results
            .get(Self::index_of(self.size, pixel))
            .copied()
    }
}

impl Index<Point> for ResultGrid {
    type Output = EscapeResult;

    fn index(&self, pixel: Point) -> &Self::Output {
        assert!(
            self.size.contains_point(pixel),
            "pixel ({}, {}) outside {} result grid",
            pixel.x,
            pixel.y,
            self.size
        );

        &self.results[Self::index_of(self.size, pixel)]
    }
}
