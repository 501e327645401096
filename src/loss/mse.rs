pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        if predicted.is_empty() {
            return 0.0;
        }
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// Per-output error signal driving backpropagation: expected - predicted
    pub fn error(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        expected.iter().zip(predicted.iter())
            .map(|(e, p)| e - p)
            .collect()
    }
}
