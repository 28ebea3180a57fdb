pub mod amount;

pub use amount::{Amount, AmountError, AmountUnit};
