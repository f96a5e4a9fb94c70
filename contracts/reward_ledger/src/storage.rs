use lockstake::ttl::{PERSISTENT_RENEWAL_THRESHOLD, PERSISTENT_TARGET_TTL};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    // Stake pool whose live shares weight every claim
    pub stake_pool: Address,
    // Token that is being distributed through this contract
    pub reward_token: Address,
    // Month 0 starts accruing here
    pub start_time: u64,
}

/// Bookkeeping of a single reward month.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct MonthData {
    /// Total reward funded for the month; funding only ever adds to it
    pub reward: i128,
    /// Part of `reward` already paid out to stakers
    pub claimed_reward: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Month(u32),
    ClaimedMonths(Address),
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Rewards: Config not set");
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

pub fn get_month(env: &Env, index: u32) -> MonthData {
    let key = DataKey::Month(index);
    let month = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_default();
    env.storage().persistent().has(&key).then(|| {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        )
    });

    month
}

pub fn save_month(env: &Env, index: u32, month: &MonthData) {
    let key = DataKey::Month(index);
    env.storage().persistent().set(&key, month);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}

/// First month index the staker has not been paid for yet.
pub fn get_claimed_months(env: &Env, staker: &Address) -> u32 {
    let key = DataKey::ClaimedMonths(staker.clone());
    let claimed = env.storage().persistent().get(&key).unwrap_or(0u32);
    env.storage().persistent().has(&key).then(|| {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        )
    });

    claimed
}

pub fn save_claimed_months(env: &Env, staker: &Address, claimed: u32) {
    let key = DataKey::ClaimedMonths(staker.clone());
    env.storage().persistent().set(&key, &claimed);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}
