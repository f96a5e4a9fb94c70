use lockstake::ttl::{PERSISTENT_RENEWAL_THRESHOLD, PERSISTENT_TARGET_TTL};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token accepted as deposit and paid back on unstake
    pub staking_token: Address,
    /// Decimals of the staking token, read once at construction
    pub token_decimals: u32,
    /// Inclusive bounds of the lock duration, in whole days
    pub min_lock_days: u64,
    pub max_lock_days: u64,
    /// Bonus in basis points of the principal for every 365 days of lock
    pub share_bonus_per_year: u32,
    /// Bonus in basis points of the principal for every 1_000_000 whole tokens deposited
    pub share_bonus_per_1m_tokens: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stake {
    /// The amount of staked tokens
    pub amount: i128,
    /// Lock duration chosen when staking
    pub lock_days: u64,
    /// The timestamp when the stake was made
    pub lock_timestamp: u64,
    /// Set once the principal has been withdrawn
    pub unstaked: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    TotalShares,
    Stakes(Address),
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Stake: Config not set");
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );

    config
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}

pub fn get_total_shares(env: &Env) -> i128 {
    let total_shares = env
        .storage()
        .persistent()
        .get(&DataKey::TotalShares)
        .unwrap_or(0i128);
    env.storage()
        .persistent()
        .has(&DataKey::TotalShares)
        .then(|| {
            env.storage().persistent().extend_ttl(
                &DataKey::TotalShares,
                PERSISTENT_RENEWAL_THRESHOLD,
                PERSISTENT_TARGET_TTL,
            )
        });

    total_shares
}

pub fn save_total_shares(env: &Env, total_shares: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalShares, &total_shares);
    env.storage().persistent().extend_ttl(
        &DataKey::TotalShares,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}

/// Full stake history of `staker` in insertion order; empty for unknown addresses.
pub fn get_stakes(env: &Env, staker: &Address) -> Vec<Stake> {
    let key = DataKey::Stakes(staker.clone());
    let stakes = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    env.storage().persistent().has(&key).then(|| {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        )
    });

    stakes
}

pub fn save_stakes(env: &Env, staker: &Address, stakes: &Vec<Stake>) {
    let key = DataKey::Stakes(staker.clone());
    env.storage().persistent().set(&key, stakes);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}
