//! Policy network integration.
//!
//! The engine does not train networks. It provides the pieces an external
//! trainer or a `LearnedAi` agent needs to talk to one.
//!
//! ## Overview
//!
//! - **Traits**: `PolicyNetwork`, `ViewEncoder`
//! - **Encoding**: `ObservationEncoder` (25 features from a `TurnView`)
//! - **Actions**: `ActionIndex`, the 13-slot discrete action space
//! - **Baselines**: `UniformPolicy`, `FixedPolicy`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jaipur_engine::nn::{ActionIndex, ObservationEncoder, ViewEncoder};
//!
//! let encoded = ObservationEncoder::new().encode(&view);
//! let scores = network.predict(&encoded);
//! let mask = ActionIndex::legal_mask(&view, &legal);
//! ```

pub mod action_space;
pub mod encoder;
pub mod traits;

pub use action_space::{ActionIndex, ACTION_SPACE_SIZE};
pub use encoder::{ObservationEncoder, ViewEncoder, OBSERVATION_LEN};
pub use traits::{EncodedState, FixedPolicy, PolicyNetwork, UniformPolicy};
