use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRegionError {
    NonFinite {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    InvalidSize {
        width: f64,
        height: f64,
    },
    NonFiniteSize {
        width: f64,
        height: f64,
    },
}

impl fmt::Display for PlaneRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "plane region bounds must be finite: x {}..{}, y {}..{}",
                    x_min, x_max, y_min, y_max
                )
            }
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "plane region size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFiniteSize { width, height } => {
                write!(
                    f,
                    "plane region size overflows: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for PlaneRegionError {}

/// Axis-aligned rectangle of the complex plane, `x` real and `y` imaginary.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRegion {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlaneRegion {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, PlaneRegionError> {
        let bounds = [x_min, x_max, y_min, y_max];

        if bounds.iter().any(|bound| !bound.is_finite()) {
            return Err(PlaneRegionError::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        let width = x_max - x_min;
        let height = y_max - y_min;

        if width <= 0.0 || height <= 0.0 {
            return Err(PlaneRegionError::InvalidSize { width, height });
        }

        // Finite bounds far enough apart still overflow the extent.
        if !width.is_finite() || !height.is_finite() {
            return Err(PlaneRegionError::NonFiniteSize { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for PlaneRegion {
    fn default() -> Self {
        Self {
            x_min: -2.0,
            x_max: 2.0,
            y_min: -2.0,
            y_max: 2.0,
        }
    }
}

impl fmt::Display for PlaneRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x {}..{}, y {}..{}",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
