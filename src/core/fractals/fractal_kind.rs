use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia {
        c: Complex,
    },
}

impl FractalKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    /// Splits a plane coordinate into the `(z0, c)` pair the recurrence starts from.
    ///
    /// Mandelbrot starts every pixel at the origin and uses the pixel as `c`;
    /// Julia starts at the pixel and uses the fixed constant as `c`.
    #[must_use]
    pub fn seed(self, point: Complex) -> (Complex, Complex) {
        match self {
            Self::Mandelbrot => (Complex::ZERO, point),
            Self::Julia { c } => (point, c),
        }
    }
}
