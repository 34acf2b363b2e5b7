pub mod auction;
pub mod contract;
mod error;
pub mod identity;
pub mod ledger;
pub mod msg;
pub mod state;

#[cfg(test)]
mod multitest;

pub use crate::error::ContractError;
