pub fn squared_euclidean<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        sum += (x - y).powi(2);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::squared_euclidean;

    #[test]
    fn squared_euclidean_2d() {
        assert_eq!(squared_euclidean(&[0.0, 0.0], &[3.0, 4.0]), 25.0);
        assert_eq!(squared_euclidean(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
    }
}
