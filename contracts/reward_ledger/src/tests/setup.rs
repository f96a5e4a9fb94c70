use lockstake::utils::MONTH_IN_SECONDS;
use lockstake_pool::{StakePool, StakePoolClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

use crate::contract::{RewardLedger, RewardLedgerClient};

/// One whole token of a Stellar asset (7 decimals)
pub const TOKEN: i128 = 10_000_000;
/// Rewards start accruing this long after the contracts get deployed
pub const CLAIM_START_DELAY: u64 = 300;
pub const GENESIS: u64 = 1_000;
pub const START_TIME: u64 = GENESIS + CLAIM_START_DELAY;

pub fn deploy_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let address = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    (
        token::Client::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

pub fn deploy_stake_pool_contract<'a>(env: &Env, staking_token: &Address) -> StakePoolClient<'a> {
    StakePoolClient::new(
        env,
        &env.register(
            StakePool,
            (staking_token.clone(), 30u64, 3650u64, 1_000u32, 50u32),
        ),
    )
}

pub fn deploy_reward_ledger_contract<'a>(
    env: &Env,
    stake_pool: &Address,
    reward_token: &Address,
    start_time: u64,
) -> RewardLedgerClient<'a> {
    RewardLedgerClient::new(
        env,
        &env.register(
            RewardLedger,
            (stake_pool.clone(), reward_token.clone(), start_time),
        ),
    )
}

pub struct TestSetup<'a> {
    pub admin: Address,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub stake_pool: StakePoolClient<'a>,
    pub rewards: RewardLedgerClient<'a>,
}

/// Staking and reward token are the same asset, rewards start `CLAIM_START_DELAY` after genesis.
pub fn setup<'a>(env: &Env) -> TestSetup<'a> {
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = GENESIS;
    });

    let admin = Address::generate(env);
    let (token, token_admin) = deploy_token_contract(env, &admin);
    let stake_pool = deploy_stake_pool_contract(env, &token.address);
    let rewards =
        deploy_reward_ledger_contract(env, &stake_pool.address, &token.address, START_TIME);

    token_admin.mint(&admin, &(1_000_000 * TOKEN));

    TestSetup {
        admin,
        token,
        token_admin,
        stake_pool,
        rewards,
    }
}

/// Moves the ledger to `months` whole months past the reward start.
pub fn jump_to_month(env: &Env, months: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = START_TIME + months * MONTH_IN_SECONDS;
    });
}

/// Same tolerance as one whole token of rounding across a multi month claim.
pub fn assert_close(actual: i128, expected: i128) {
    assert!(
        (actual - expected).abs() <= TOKEN,
        "expected {} to be within one token of {}",
        actual,
        expected
    );
}
