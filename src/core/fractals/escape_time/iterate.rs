use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::params::ESCAPE_RADIUS_SQUARED;
use std::ops::ControlFlow;

/// Runs `z <- z² + c` from `z0` for at most `max_iterations` steps.
///
/// Each step squares the components of the value entering it, tests the
/// escape radius against those squares, and only then advances using the
/// same squares. A start point already outside the radius escapes at
/// iteration 1.
#[must_use]
pub fn iterate(z0: Complex, c: Complex, max_iterations: u32) -> EscapeResult {
    let outcome = (1..=max_iterations).try_fold(z0, |z, iteration| {
        let real_squared = z.real * z.real;
        let imag_squared = z.imag * z.imag;

        if real_squared + imag_squared > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(Complex {
                real: real_squared - imag_squared + c.real,
                imag: 2.0 * z.real * z.imag + c.imag,
            })
        }
    });

    match outcome {
        ControlFlow::Break(iterations) => EscapeResult::Escaped { iterations },
        ControlFlow::Continue(_) => EscapeResult::NonTerminated {
            iterations: max_iterations,
        },
    }
}
