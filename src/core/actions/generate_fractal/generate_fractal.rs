use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::result_grid::ResultGrid;

/// Samples every pixel of the algorithm's image in result-grid index order.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> ResultGrid {
    let size = algorithm.size();
    let results = (0..size.pixel_count())
        .map(|index| algorithm.compute(ResultGrid::pixel_at(size, index)))
        .collect();

    ResultGrid::from_ordered_results(size, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::escape_result::EscapeResult;
    use crate::core::data::image_size::ImageSize;
    use crate::core::data::point::Point;

    #[derive(Debug)]
    struct StubAlgorithm {
        size: ImageSize,
    }

    impl FractalAlgorithm for StubAlgorithm {
        fn size(&self) -> ImageSize {
            self.size
        }

        fn compute(&self, pixel: Point) -> EscapeResult {
            EscapeResult::Escaped {
                iterations: pixel.x * 100 + pixel.y + 1,
            }
        }
    }

    #[test]
    fn test_generates_one_result_per_pixel() {
        let algorithm = StubAlgorithm {
            size: ImageSize::new(5, 3).unwrap(),
        };

        let grid = generate_fractal(&algorithm);

        assert_eq!(grid.len(), 15);
        assert_eq!(grid.size(), algorithm.size);
    }

    #[test]
    fn test_results_are_stored_x_outer_y_inner() {
        let algorithm = StubAlgorithm {
            size: ImageSize::new(2, 3).unwrap(),
        };

        let grid = generate_fractal(&algorithm);
        let iterations: Vec<u32> = grid.results().iter().map(|r| r.iterations()).collect();

        assert_eq!(iterations, vec![1, 2, 3, 101, 102, 103]);
    }

    #[test]
    fn test_every_pixel_reads_back_its_own_result() {
        let algorithm = StubAlgorithm {
            size: ImageSize::new(7, 4).unwrap(),
        };

        let grid = generate_fractal(&algorithm);

        for x in 0..7 {
            for y in 0..4 {
                let pixel = Point { x, y };
                assert_eq!(grid[pixel], algorithm.compute(pixel));
            }
        }
    }
}
