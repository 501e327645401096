pub mod activation;

pub use activation::{dot_product, sigmoid, threshold_logic_unit, DEFAULT_SHAPE};
