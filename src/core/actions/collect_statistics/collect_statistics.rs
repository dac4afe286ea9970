use crate::core::data::result_grid::ResultGrid;
use crate::core::data::statistics::Statistics;

/// Single pass over the grid recording the quickest and slowest escapes.
#[must_use]
pub fn collect_statistics(grid: &ResultGrid) -> Statistics {
    grid.results().iter().copied().collect()
}
