//! Card catalog: the seven Jaipur card kinds and card multisets.
//!
//! ## Key Types
//!
//! - `CardKind`: Diamond, Gold, Silver, Cloth, Spice, Leather, Camel
//! - `CardCounts`: Per-kind counters used for every card pile in the game

pub mod counts;
pub mod kind;

pub use counts::CardCounts;
pub use kind::CardKind;
