use crate::layers::Layer;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to a layer: `w_k += lr * g * x_k`, `b += lr * g`.
    pub fn step(&self, layer: &mut Layer, gradients: &[f64], inputs: &[f64]) {
        layer.apply_gradients(gradients, inputs, self.learning_rate);
    }
}
