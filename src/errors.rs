//! Typed errors for the evaluation core.
//!
//! The presentation layer validates inputs before calling into the core;
//! these variants are the backstop for preconditions the core cannot recover
//! from. Application plumbing converts them into `anyhow::Error` with `?`.

use thiserror::Error;

/// Precondition violations reported by [`crate::core::evaluate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("weight must be a positive number of kilograms, got {0}")]
    NonPositiveWeight(f64),

    #[error("height must be a positive number of meters, got {0}")]
    NonPositiveHeight(f64),

    #[error("inputs must be finite, got weight {weight_kg} kg and height {height_meters} m")]
    NonFiniteInput { weight_kg: f64, height_meters: f64 },
}
