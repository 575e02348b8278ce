pub mod assistant;
pub mod predictor;
