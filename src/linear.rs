use crate::distance::squared_euclidean;
use ordered_float::OrderedFloat;

/// Brute-force nearest neighbor over an unindexed point set.
///
/// Scans every point on each query, so it is O(n) per call. Used as the
/// correctness oracle in tests and as the baseline in benchmarks.
pub struct LinearScan<const D: usize> {
    data: Vec<[f64; D]>,
}

impl<const D: usize> LinearScan<D> {
    #[must_use]
    pub fn new(data: Vec<[f64; D]>) -> Self {
        LinearScan { data }
    }

    /// Returns the closest stored point and its squared distance to `query`,
    /// or `None` if there are no points.
    #[must_use]
    pub fn nearest(&self, query: &[f64; D]) -> Option<([f64; D], f64)> {
        self.data
            .iter()
            .map(|point| (*point, squared_euclidean(point, query)))
            .min_by_key(|(_, distance)| OrderedFloat(*distance))
    }

    #[must_use]
    pub fn num_points(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScan;

    #[test]
    fn empty_scan_has_no_neighbor() {
        let scan: LinearScan<2> = LinearScan::new(Vec::new());
        assert_eq!(scan.nearest(&[0.0, 0.0]), None);
    }

    #[test]
    fn picks_the_minimizer() {
        let scan = LinearScan::new(vec![[0.0, 0.0], [3.0, 3.0], [1.0, 1.0]]);
        let (point, distance) = scan.nearest(&[1.0, 2.0]).unwrap();
        assert_eq!(point, [1.0, 1.0]);
        assert_eq!(distance, 1.0);
    }
}
