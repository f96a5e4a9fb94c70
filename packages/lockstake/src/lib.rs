#![no_std]

pub mod ttl;
pub mod utils;

use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Aggregated view over every open (not yet unstaked) position of a staker.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct StakerInfo {
    /// Sum of the principal of all open stakes
    pub total_amount: i128,
    /// Sum of the shares of all open stakes, recomputed from their immutable inputs
    pub total_shares: i128,
}

/// The read-only part of the stake pool the reward ledger depends on.
#[contractclient(name = "StakePoolQueryClient")]
pub trait StakePoolInterface {
    fn query_total_shares(env: Env) -> i128;

    fn query_staker_info(env: Env, staker: Address) -> StakerInfo;
}
