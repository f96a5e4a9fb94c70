use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Vec};

use crate::{
    distribution::{passed_months, pending_claim},
    error::ContractError,
    storage::{
        get_claimed_months, get_config, get_month, save_claimed_months, save_config, save_month,
        Config, MonthData,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Lockstake monthly staking rewards distribution"
);

#[contract]
pub struct RewardLedger;

pub trait RewardLedgerTrait {
    // Adds `month_rewards[i]` to month `passed months + months_offset + i`
    fn fund_rewards(
        env: Env,
        sender: Address,
        month_rewards: Vec<i128>,
        months_offset: u32,
    ) -> Result<(), ContractError>;

    // Pays `staker` for every elapsed month since their last claim, returns the amount paid
    fn claim(env: Env, staker: Address) -> Result<i128, ContractError>;

    // QUERIES

    fn query_config(env: Env) -> Config;

    fn query_passed_months(env: Env) -> u32;

    fn query_month(env: Env, index: u32) -> MonthData;

    fn query_claimed_months(env: Env, staker: Address) -> u32;

    fn query_claimable(env: Env, staker: Address) -> Result<i128, ContractError>;
}

#[contractimpl]
impl RewardLedgerTrait for RewardLedger {
    fn fund_rewards(
        env: Env,
        sender: Address,
        month_rewards: Vec<i128>,
        months_offset: u32,
    ) -> Result<(), ContractError> {
        sender.require_auth();

        let config = get_config(&env);

        let mut total_reward = 0i128;
        for reward in month_rewards.iter() {
            if reward < 0 {
                log!(&env, "Rewards: Fund rewards: negative reward {}", reward);
                return Err(ContractError::InvalidRewardAmount);
            }
            total_reward = total_reward
                .checked_add(reward)
                .ok_or(ContractError::ContractMathError)?;
        }
        if total_reward == 0 {
            log!(&env, "Rewards: Fund rewards: nothing to fund");
            return Err(ContractError::InvalidRewardAmount);
        }

        let first_month = passed_months(&env, &config)
            .checked_add(months_offset)
            .ok_or(ContractError::ContractMathError)?;
        for (offset, reward) in month_rewards.iter().enumerate() {
            if reward == 0 {
                continue;
            }
            let index = first_month
                .checked_add(offset as u32)
                .ok_or(ContractError::ContractMathError)?;
            let mut month = get_month(&env, index);
            month.reward = month
                .reward
                .checked_add(reward)
                .ok_or(ContractError::ContractMathError)?;
            save_month(&env, index, &month);
        }

        let reward_token_client = token::Client::new(&env, &config.reward_token);
        reward_token_client.transfer(&sender, &env.current_contract_address(), &total_reward);

        env.events().publish(("fund_rewards", "sender"), &sender);
        env.events()
            .publish(("fund_rewards", "first_month"), first_month);
        env.events().publish(("fund_rewards", "amount"), total_reward);

        Ok(())
    }

    fn claim(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = get_config(&env);

        let claim = pending_claim(&env, &config, &staker)?;
        for (offset, month) in claim.months.iter().enumerate() {
            // unfunded months stay unfunded once elapsed
            if month.reward > 0 {
                save_month(&env, claim.from + offset as u32, &month);
            }
        }
        save_claimed_months(&env, &staker, claim.to);

        let reward_token_client = token::Client::new(&env, &config.reward_token);
        reward_token_client.transfer(&env.current_contract_address(), &staker, &claim.payout);

        env.events().publish(("claim", "user"), &staker);
        env.events().publish(("claim", "claimed_months"), claim.to);
        env.events().publish(("claim", "amount"), claim.payout);

        Ok(claim.payout)
    }

    // QUERIES

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_passed_months(env: Env) -> u32 {
        passed_months(&env, &get_config(&env))
    }

    fn query_month(env: Env, index: u32) -> MonthData {
        get_month(&env, index)
    }

    fn query_claimed_months(env: Env, staker: Address) -> u32 {
        get_claimed_months(&env, &staker)
    }

    fn query_claimable(env: Env, staker: Address) -> Result<i128, ContractError> {
        match pending_claim(&env, &get_config(&env), &staker) {
            Ok(claim) => Ok(claim.payout),
            Err(ContractError::NothingToClaim) => Ok(0),
            Err(err) => Err(err),
        }
    }
}

#[contractimpl]
impl RewardLedger {
    pub fn __constructor(env: Env, stake_pool: Address, reward_token: Address, start_time: u64) {
        let config = Config {
            stake_pool: stake_pool.clone(),
            reward_token: reward_token.clone(),
            start_time,
        };
        save_config(&env, &config);

        env.events().publish(
            ("initialize", "Lockstake rewards distribution"),
            (stake_pool, reward_token, start_time),
        );
    }
}
