//! Compute-type classification - the single gate in front of the AMM

mod compute_classifier;

pub use compute_classifier::ComputeClassifier;
