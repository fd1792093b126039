//! Policy network interface.
//!
//! A policy maps an encoded observation to one score per discrete action.
//! The engine never trains anything; implementations live wherever the
//! weights live (a Python trainer, an ONNX runtime, a lookup table).

use serde::{Deserialize, Serialize};

/// Encoded observation as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Zero-filled tensor of the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Set one element. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.tensor.get_mut(index) {
            *slot = value;
        }
    }
}

/// Policy network: scores for every discrete action.
///
/// The output length should equal the action space size. Scores need not be
/// normalized; callers only compare them.
pub trait PolicyNetwork: Send + Sync {
    fn predict(&self, encoded: &EncodedState) -> Vec<f32>;

    /// Batch prediction. Override when the backend can batch.
    fn predict_batch(&self, encoded: &[EncodedState]) -> Vec<Vec<f32>> {
        encoded.iter().map(|e| self.predict(e)).collect()
    }
}

/// Uniform policy (baseline for testing).
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy {
    action_space_size: usize,
}

impl UniformPolicy {
    pub fn new(action_space_size: usize) -> Self {
        Self { action_space_size }
    }
}

impl PolicyNetwork for UniformPolicy {
    fn predict(&self, _encoded: &EncodedState) -> Vec<f32> {
        if self.action_space_size == 0 {
            return vec![];
        }
        let prob = 1.0 / self.action_space_size as f32;
        vec![prob; self.action_space_size]
    }
}

/// Policy that returns the same scores for every observation.
///
/// Handy for pinning an agent's preferences in tests and demos.
#[derive(Clone, Debug, Default)]
pub struct FixedPolicy {
    scores: Vec<f32>,
}

impl FixedPolicy {
    pub fn new(scores: Vec<f32>) -> Self {
        Self { scores }
    }
}

impl PolicyNetwork for FixedPolicy {
    fn predict(&self, _encoded: &EncodedState) -> Vec<f32> {
        self.scores.clone()
    }
}
