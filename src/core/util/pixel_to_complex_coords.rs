use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;

/// Maps a pixel onto the plane region, `x` to the real axis and `y` to the
/// imaginary axis.
///
/// Pixel `0` lands on the region minimum and each step covers
/// `extent / pixels`, so the region maximum itself is never sampled. The
/// expression order is fixed so that coordinates are reproducible bit for
/// bit.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, size: ImageSize, region: PlaneRegion) -> Complex {
    let real = (f64::from(pixel.x) * region.width()) / f64::from(size.width()) + region.x_min();
    let imag = (f64::from(pixel.y) * region.height()) / f64::from(size.height()) + region.y_min();

    Complex { real, imag }
}
