use lockstake::{utils::lock_end, StakerInfo};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use crate::{
    error::ContractError,
    math,
    msg::SharesResponse,
    storage::{
        get_config, get_stakes, get_total_shares, save_config, save_stakes, save_total_shares,
        Config, Stake,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(key = "Description", val = "Lockstake time-locked token staking");

#[contract]
pub struct StakePool;

pub trait StakePoolTrait {
    // Locks `amount` of the staking token for `lock_days` and returns the index of the new stake
    fn stake(env: Env, sender: Address, amount: i128, lock_days: u64)
        -> Result<u32, ContractError>;

    // Releases the principal of a matured stake
    fn unstake(env: Env, sender: Address, stake_index: u32) -> Result<(), ContractError>;

    // QUERIES

    fn calculate_shares(
        env: Env,
        amount: i128,
        lock_days: u64,
    ) -> Result<SharesResponse, ContractError>;

    fn query_config(env: Env) -> Config;

    fn query_total_shares(env: Env) -> i128;

    fn query_stake_count(env: Env, staker: Address) -> u32;

    fn query_stake(env: Env, staker: Address, stake_index: u32) -> Result<Stake, ContractError>;

    fn query_stakes(env: Env, staker: Address) -> Vec<Stake>;

    fn query_staker_info(env: Env, staker: Address) -> StakerInfo;
}

#[contractimpl]
impl StakePoolTrait for StakePool {
    fn stake(
        env: Env,
        sender: Address,
        amount: i128,
        lock_days: u64,
    ) -> Result<u32, ContractError> {
        sender.require_auth();

        let config = get_config(&env);

        if amount <= 0 {
            log!(&env, "Stake: Stake: invalid amount {}", amount);
            return Err(ContractError::InvalidAmount);
        }
        if lock_days < config.min_lock_days || lock_days > config.max_lock_days {
            log!(
                &env,
                "Stake: Stake: invalid lockDays {}, must be between {} and {}",
                lock_days,
                config.min_lock_days,
                config.max_lock_days
            );
            return Err(ContractError::InvalidLockDays);
        }

        let shares = math::calculate_shares(&env, &config, amount, lock_days)?.shares;
        let total_shares = get_total_shares(&env)
            .checked_add(shares)
            .ok_or(ContractError::ContractMathError)?;

        let staking_token_client = token::Client::new(&env, &config.staking_token);
        staking_token_client.transfer(&sender, &env.current_contract_address(), &amount);

        let mut stakes = get_stakes(&env, &sender);
        stakes.push_back(Stake {
            amount,
            lock_days,
            lock_timestamp: env.ledger().timestamp(),
            unstaked: false,
        });
        save_stakes(&env, &sender, &stakes);
        save_total_shares(&env, total_shares);

        env.events().publish(("stake", "user"), &sender);
        env.events().publish(("stake", "amount"), amount);
        env.events().publish(("stake", "lock_days"), lock_days);
        env.events().publish(("stake", "shares"), shares);

        Ok(stakes.len() - 1)
    }

    fn unstake(env: Env, sender: Address, stake_index: u32) -> Result<(), ContractError> {
        sender.require_auth();

        let config = get_config(&env);

        let mut stakes = get_stakes(&env, &sender);
        let Some(mut stake) = stakes.get(stake_index) else {
            log!(&env, "Stake: Unstake: invalid index {}", stake_index);
            return Err(ContractError::InvalidIndex);
        };

        if stake.unstaked {
            log!(&env, "Stake: Unstake: unstaked already");
            return Err(ContractError::UnstakedAlready);
        }

        let unlock_time = lock_end(stake.lock_timestamp, stake.lock_days);
        if env.ledger().timestamp() < unlock_time {
            log!(
                &env,
                "Stake: Unstake: unstaking too early, stake unlocks at {}",
                unlock_time
            );
            return Err(ContractError::TooEarly);
        }

        // shares are never stored; the same inputs give back exactly what was added on stake
        let shares =
            math::calculate_shares(&env, &config, stake.amount, stake.lock_days)?.shares;
        let total_shares = get_total_shares(&env)
            .checked_sub(shares)
            .ok_or(ContractError::ContractMathError)?;

        stake.unstaked = true;
        stakes.set(stake_index, stake.clone());
        save_stakes(&env, &sender, &stakes);
        save_total_shares(&env, total_shares);

        let staking_token_client = token::Client::new(&env, &config.staking_token);
        staking_token_client.transfer(&env.current_contract_address(), &sender, &stake.amount);

        env.events().publish(("unstake", "user"), &sender);
        env.events().publish(("unstake", "index"), stake_index);
        env.events().publish(("unstake", "amount"), stake.amount);

        Ok(())
    }

    // QUERIES

    fn calculate_shares(
        env: Env,
        amount: i128,
        lock_days: u64,
    ) -> Result<SharesResponse, ContractError> {
        math::calculate_shares(&env, &get_config(&env), amount, lock_days)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_total_shares(env: Env) -> i128 {
        get_total_shares(&env)
    }

    fn query_stake_count(env: Env, staker: Address) -> u32 {
        get_stakes(&env, &staker).len()
    }

    fn query_stake(env: Env, staker: Address, stake_index: u32) -> Result<Stake, ContractError> {
        get_stakes(&env, &staker)
            .get(stake_index)
            .ok_or(ContractError::InvalidIndex)
    }

    fn query_stakes(env: Env, staker: Address) -> Vec<Stake> {
        get_stakes(&env, &staker)
    }

    fn query_staker_info(env: Env, staker: Address) -> StakerInfo {
        let config = get_config(&env);

        let mut info = StakerInfo::default();
        for stake in get_stakes(&env, &staker).iter().filter(|s| !s.unstaked) {
            let shares = math::calculate_shares(&env, &config, stake.amount, stake.lock_days)
                .unwrap_or_else(|err| panic_with_error!(&env, err))
                .shares;
            info.total_amount = info
                .total_amount
                .checked_add(stake.amount)
                .unwrap_or_else(|| panic_with_error!(&env, ContractError::ContractMathError));
            info.total_shares = info
                .total_shares
                .checked_add(shares)
                .unwrap_or_else(|| panic_with_error!(&env, ContractError::ContractMathError));
        }

        info
    }
}

#[contractimpl]
impl StakePool {
    pub fn __constructor(
        env: Env,
        staking_token: Address,
        min_lock_days: u64,
        max_lock_days: u64,
        share_bonus_per_year: u32,
        share_bonus_per_1m_tokens: u32,
    ) {
        if min_lock_days == 0 || min_lock_days > max_lock_days {
            log!(
                &env,
                "Stake: Initialize: invalid lock bounds {} - {}",
                min_lock_days,
                max_lock_days
            );
            panic_with_error!(&env, ContractError::InvalidLockBounds);
        }

        let token_decimals = token::Client::new(&env, &staking_token).decimals();

        let config = Config {
            staking_token: staking_token.clone(),
            token_decimals,
            min_lock_days,
            max_lock_days,
            share_bonus_per_year,
            share_bonus_per_1m_tokens,
        };
        save_config(&env, &config);
        save_total_shares(&env, 0);

        env.events()
            .publish(("initialize", "Lockstake staking pool"), &staking_token);
    }
}
