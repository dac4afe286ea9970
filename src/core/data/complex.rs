use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.real, self.imag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Complex::ZERO, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(-0.7, 0.27).to_string(), "(-0.7, 0.27)");
        assert_eq!(Complex::new(2.0, -1.5).to_string(), "(2, -1.5)");
    }
}
