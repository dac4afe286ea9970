use crate::core::fractals::escape_time::errors::EscapeTimeError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 30;

/// `|z|² > 4` is the same test as `|z| > 2` without a square root.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationParams {
    max_iterations: u32,
}

impl IterationParams {
    pub fn new(max_iterations: u32) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for IterationParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_constructor() {
        let params = IterationParams::new(256).unwrap();

        assert_eq!(params.max_iterations(), 256);
    }

    #[test]
    fn test_one_iteration_is_valid() {
        assert!(IterationParams::new(1).is_ok());
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            IterationParams::new(0),
            Err(EscapeTimeError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_default_max_iterations() {
        assert_eq!(IterationParams::default().max_iterations(), DEFAULT_MAX_ITERATIONS);
    }
}
