/// Exponents beyond this are clamped so `exp` stays finite.
const MAX_EXPONENT: f64 = 500.0;

/// Bounds that keep sigmoid outputs strictly inside `(0, 1)`.
const MIN_OUTPUT: f64 = f64::MIN_POSITIVE;
const MAX_OUTPUT: f64 = 1.0 - f64::EPSILON;

/// Default shape parameter of the logistic curve.
pub const DEFAULT_SHAPE: f64 = 0.5;

/// Logistic curve `1 / (1 + e^(-(a - t) / r))`.
///
/// `threshold` shifts the curve along the activation axis and `shape`
/// controls its steepness. The result always lies in the open interval
/// `(0, 1)`; large activations saturate just short of either end.
pub fn sigmoid(activation: f64, threshold: f64, shape: f64) -> f64 {
    let z = ((activation - threshold) / shape).clamp(-MAX_EXPONENT, MAX_EXPONENT);
    (1.0 / (1.0 + (-z).exp())).clamp(MIN_OUTPUT, MAX_OUTPUT)
}

/// Threshold logic unit: fires (1) once the activation reaches the threshold.
pub fn threshold_logic_unit(activation: f64, threshold: f64) -> u8 {
    if activation >= threshold { 1 } else { 0 }
}

/// Sum of `x * w` over (input, weight) pairs.
pub fn dot_product<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    pairs.into_iter().map(|(x, w)| x * w).sum()
}
