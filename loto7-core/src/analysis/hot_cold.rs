/// Écart de chaque fréquence à la fréquence moyenne (numéros jamais sortis inclus).
pub fn hot_cold_deltas(frequencies: &[u32]) -> Vec<f64> {
    if frequencies.is_empty() {
        return Vec::new();
    }
    let mean = frequencies.iter().map(|&f| f as f64).sum::<f64>() / frequencies.len() as f64;
    frequencies.iter().map(|&f| f as f64 - mean).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_sum_to_zero() {
        let freqs = vec![4, 0, 2, 7, 1, 3];
        let deltas = hot_cold_deltas(&freqs);
        let sum: f64 = deltas.iter().sum();
        assert!(sum.abs() < 1e-9, "Sum = {}", sum);
    }

    #[test]
    fn test_deltas_include_zero_frequencies() {
        let deltas = hot_cold_deltas(&[3, 0, 0]);
        assert!((deltas[0] - 2.0).abs() < 1e-12);
        assert!((deltas[1] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_frequencies_are_neutral() {
        let deltas = hot_cold_deltas(&[5; 37]);
        assert!(deltas.iter().all(|&d| d == 0.0));
    }
}
