use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::result_grid::ResultGrid;

/// Samples the grid in parallel using rayon's work-stealing scheduler.
///
/// The indexed parallel iterator collects in index order, so the grid is
/// identical to the one [`generate_fractal`](super::generate_fractal::generate_fractal)
/// builds.
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> ResultGrid
where
    Alg: FractalAlgorithm + Sync,
{
    let size = algorithm.size();
    let results = (0..size.pixel_count())
        .into_par_iter()
        .map(|index| algorithm.compute(ResultGrid::pixel_at(size, index)))
        .collect();

    ResultGrid::from_ordered_results(size, results)
}
