use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::statistics::Statistics;

/// Rescales escape counts onto `[0, 1]` using the quickest and slowest
/// escapes of the current render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeNormaliser {
    quickest: u32,
    slowest: u32,
}

impl EscapeNormaliser {
    #[must_use]
    pub fn new(statistics: &Statistics) -> Self {
        Self {
            quickest: statistics.quickest_escape(),
            slowest: statistics.slowest_escape(),
        }
    }

    /// `0` at the quickest escape, `1` at the slowest, clamped outside that
    /// range. A single escape count (or none at all) normalises to `0`.
    #[must_use]
    pub fn normalise(&self, iterations: u32) -> f64 {
        if self.slowest <= self.quickest {
            return 0.0;
        }

        let span = f64::from(self.slowest - self.quickest);
        let t = (f64::from(iterations) - f64::from(self.quickest)) / span;

        t.clamp(0.0, 1.0)
    }

    /// Interior points are black; escaped points go through `gradient`.
    pub fn colour(&self, result: EscapeResult, gradient: impl Fn(f64) -> Colour) -> Colour {
        match result {
            EscapeResult::NonTerminated { .. } => Colour::BLACK,
            EscapeResult::Escaped { iterations } => gradient(self.normalise(iterations)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normaliser(escapes: &[u32]) -> EscapeNormaliser {
        let statistics: Statistics = escapes
            .iter()
            .map(|&iterations| EscapeResult::Escaped { iterations })
            .collect();

        EscapeNormaliser::new(&statistics)
    }

    #[test]
    fn test_extremes_map_to_zero_and_one() {
        let normaliser = normaliser(&[2, 9, 5]);

        assert_eq!(normaliser.normalise(2), 0.0);
        assert_eq!(normaliser.normalise(9), 1.0);
    }

    #[test]
    fn test_interior_counts_are_strictly_inside() {
        let normaliser = normaliser(&[2, 9]);

        for iterations in 3..9 {
            let t = normaliser.normalise(iterations);
            assert!(t > 0.0 && t < 1.0, "t = {t} for {iterations}");
        }
        assert_eq!(normaliser.normalise(5), 3.0 / 7.0);
    }

    #[test]
    fn test_out_of_range_counts_are_clamped() {
        let normaliser = normaliser(&[4, 8]);

        assert_eq!(normaliser.normalise(1), 0.0);
        assert_eq!(normaliser.normalise(30), 1.0);
    }

    #[test]
    fn test_single_escape_count_normalises_to_zero() {
        let normaliser = normaliser(&[6, 6, 6]);

        assert_eq!(normaliser.normalise(6), 0.0);
    }

    #[test]
    fn test_no_escapes_uses_zero() {
        let statistics: Statistics = [EscapeResult::NonTerminated { iterations: 30 }]
            .into_iter()
            .collect();
        let normaliser = EscapeNormaliser::new(&statistics);

        assert_eq!(normaliser.normalise(0), 0.0);
        assert_eq!(normaliser.normalise(17), 0.0);
    }

    #[test]
    fn test_non_terminated_is_black_regardless_of_gradient() {
        let normaliser = normaliser(&[2, 9]);

        let colour = normaliser.colour(EscapeResult::NonTerminated { iterations: 9 }, |_| {
            Colour::WHITE
        });

        assert_eq!(colour, Colour::BLACK);
    }

    #[test]
    fn test_escaped_passes_normalised_value_to_gradient() {
        let normaliser = normaliser(&[2, 9]);

        let colour = normaliser.colour(EscapeResult::Escaped { iterations: 9 }, |t| {
            Colour::lerp(Colour::BLACK, Colour::WHITE, t)
        });

        assert_eq!(colour, Colour::WHITE);
    }
}
