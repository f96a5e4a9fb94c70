#![no_std]
mod contract;
mod error;
mod math;
mod msg;
mod storage;

pub use contract::{StakePool, StakePoolClient};
pub use error::ContractError;
pub use msg::SharesResponse;
pub use storage::{Config, Stake};
