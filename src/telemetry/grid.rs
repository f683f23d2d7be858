/// Row-major grid of intensities in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl IntensityGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![0.0; rows * cols],
        }
    }

    /// Builds a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut grid = Self::new(rows, cols);
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                grid.set(row, col, f(row, col));
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Writes a clamped value. Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        self.cells[row * self.cols + col] = value;
    }

    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    pub fn mean(&self) -> f64 {
        self.cells.iter().sum::<f64>() / self.cells.len() as f64
    }

    /// Cell with the highest intensity, first one wins on ties.
    pub fn hottest(&self) -> (usize, usize) {
        let idx = self
            .cells
            .iter()
            .enumerate()
            .fold(0, |best, (i, &v)| if v > self.cells[best] { i } else { best });
        (idx / self.cols, idx % self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_clamped_into_unit_range() {
        let grid = IntensityGrid::from_fn(2, 3, |r, c| (r * 3 + c) as f64 - 1.0);
        assert_eq!(grid.get(0, 0), Some(0.0));
        assert_eq!(grid.get(0, 2), Some(1.0));
        assert_eq!(grid.get(1, 2), Some(1.0));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn hottest_and_stats() {
        let mut grid = IntensityGrid::new(6, 8);
        grid.set(4, 5, 0.9);
        grid.set(1, 1, 0.3);
        assert_eq!(grid.hottest(), (4, 5));
        assert_eq!(grid.max(), 0.9);
        assert!((grid.mean() - 1.2 / 48.0).abs() < 1e-12);
    }
}
