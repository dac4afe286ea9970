use crate::core::data::escape_result::EscapeResult;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

pub trait FractalAlgorithm {
    fn size(&self) -> ImageSize;

    fn compute(&self, pixel: Point) -> EscapeResult;
}
