//! Cash module (denomination breakdowns and change-making).
//!
//! Pure domain logic only: no IO, no persistence, no shared mutable state.
//! Every operation takes immutable [`MoneyAmount`]s and returns a new one.

pub mod amount;
pub mod change;
pub mod denomination;

pub use amount::MoneyAmount;
pub use denomination::{
    FIFTY_DINARS, FIFTY_PIASTERS, FIVE_DINARS, FIVE_PIASTERS, ONE_DINAR, ONE_PIASTER,
    TEN_DINARS, TEN_PIASTERS, TWENTY_DINARS, TWENTY_FIVE_PIASTERS, ZERO,
};
