//! God favor definitions.
//!
//! A favor is an immutable catalog entry: three tiered costs and magnitudes,
//! the resolution phase it belongs to, a tie-break priority and one
//! [`EffectKind`] out of a closed set. The catalog itself is content and is
//! supplied by `orlog-content`; the core only defines the shape and the
//! per-player choice.
mod definition;
mod kind;
mod tier;

pub use definition::{FavorChoice, FavorDefinition, FavorPhase};
pub use kind::EffectKind;
pub use tier::{InvalidTier, Tier};
