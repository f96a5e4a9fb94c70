#![no_std]
mod contract;
mod distribution;
mod error;
mod storage;

pub use contract::{RewardLedger, RewardLedgerClient};
pub use error::ContractError;
pub use storage::{Config, MonthData};
