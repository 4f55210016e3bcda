/// Arithmetic mean; `None` for an empty slice.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        let mean = average(&[0.5, -0.5, 1.0]).unwrap();
        assert!((mean - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[]), None);
    }
}
