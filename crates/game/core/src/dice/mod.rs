//! Dice and per-player dice pools.
//!
//! A [`DicePool`] owns one [`Die`] per slot. Slots are independently lockable;
//! rolling only redraws unlocked dice. The pool size is fixed for the pool's
//! lifetime and comes from [`crate::GameConfig::dice_per_player`].
mod die;
mod error;
mod pool;

pub use die::Die;
pub use error::DiceError;
pub use pool::DicePool;
