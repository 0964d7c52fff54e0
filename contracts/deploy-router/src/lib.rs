pub mod contract;
pub mod error;
pub mod events;
pub mod message;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
