use lockstake::{utils::months_between, StakePoolQueryClient};
use soroban_sdk::{log, Address, Env, Vec, U256};

use crate::{
    error::ContractError,
    storage::{get_claimed_months, get_month, Config, MonthData},
};

/// Months fully elapsed since `start_time`; the month in progress is not counted.
pub fn passed_months(env: &Env, config: &Config) -> u32 {
    let passed = months_between(config.start_time, env.ledger().timestamp());
    u32::try_from(passed).unwrap_or(u32::MAX)
}

/// Reward owed for a month to a staker holding `staker_shares` out of `total_shares` right now.
///
/// reward * staker_shares / total_shares, capped by what is still unpaid for the month.
pub fn month_payout(
    env: &Env,
    month: &MonthData,
    staker_shares: i128,
    total_shares: i128,
) -> Result<i128, ContractError> {
    let remaining_reward = month
        .reward
        .checked_sub(month.claimed_reward)
        .ok_or(ContractError::ContractMathError)?;
    if remaining_reward <= 0 || staker_shares <= 0 || total_shares <= 0 {
        return Ok(0);
    }

    let payout = U256::from_u128(env, month.reward as u128)
        .mul(&U256::from_u128(env, staker_shares as u128))
        .div(&U256::from_u128(env, total_shares as u128));

    let payout = payout
        .to_u128()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or(ContractError::ContractMathError)?;

    Ok(payout.min(remaining_reward))
}

pub struct PendingClaim {
    /// First month being paid
    pub from: u32,
    /// New high-water mark once paid
    pub to: u32,
    pub payout: i128,
    /// Updated bookkeeping of months `from..to`, in order
    pub months: Vec<MonthData>,
}

/// Works out what `staker` would receive for every elapsed month not paid to them yet.
pub fn pending_claim(
    env: &Env,
    config: &Config,
    staker: &Address,
) -> Result<PendingClaim, ContractError> {
    let from = get_claimed_months(env, staker);
    let to = passed_months(env, config);
    if from >= to {
        log!(
            env,
            "Rewards: Claim: nothing to claim, paid through month {}",
            from
        );
        return Err(ContractError::NothingToClaim);
    }

    let stake_pool = StakePoolQueryClient::new(env, &config.stake_pool);
    let staker_shares = stake_pool.query_staker_info(staker).total_shares;
    if staker_shares <= 0 {
        log!(env, "Rewards: Claim: nothing to claim, no open stakes");
        return Err(ContractError::NothingToClaim);
    }
    let total_shares = stake_pool.query_total_shares();

    let mut payout = 0i128;
    let mut months = Vec::new(env);
    for index in from..to {
        let mut month = get_month(env, index);
        let month_reward = month_payout(env, &month, staker_shares, total_shares)?;

        month.claimed_reward = month
            .claimed_reward
            .checked_add(month_reward)
            .ok_or(ContractError::ContractMathError)?;
        payout = payout
            .checked_add(month_reward)
            .ok_or(ContractError::ContractMathError)?;

        months.push_back(month);
    }

    if payout == 0 {
        log!(
            env,
            "Rewards: Claim: nothing to claim, months {} to {} are paid out",
            from,
            to
        );
        return Err(ContractError::NothingToClaim);
    }

    Ok(PendingClaim {
        from,
        to,
        payout,
        months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(reward: i128, claimed_reward: i128) -> MonthData {
        MonthData {
            reward,
            claimed_reward,
        }
    }

    #[test]
    fn payout_is_share_of_month_reward() {
        let env = Env::default();

        assert_eq!(month_payout(&env, &month(1_000, 0), 1, 3), Ok(333));
        assert_eq!(month_payout(&env, &month(1_000, 0), 1, 2), Ok(500));
        assert_eq!(month_payout(&env, &month(1_000, 0), 7, 7), Ok(1_000));
    }

    #[test]
    fn earlier_claims_do_not_change_the_share() {
        let env = Env::default();

        // first claimer with 1 of 3 shares took 333
        assert_eq!(month_payout(&env, &month(1_000, 333), 1, 3), Ok(333));
        // rounding dust stays in the ledger
        assert_eq!(month_payout(&env, &month(1_000, 666), 1, 3), Ok(333));
    }

    #[test]
    fn payout_is_capped_by_unpaid_reward() {
        let env = Env::default();

        // a staker who left after claiming shrank total shares below what was paid against
        assert_eq!(month_payout(&env, &month(1_000, 900), 10, 20), Ok(100));
        assert_eq!(month_payout(&env, &month(1_000, 1_000), 1, 3), Ok(0));
    }

    #[test]
    fn tiny_stake_gets_a_tiny_payout() {
        let env = Env::default();
        let shares = 1_000_000_000;

        // half the month is unpaid, the newcomer still only earns its own weight
        assert_eq!(
            month_payout(&env, &month(1_000_000, 500_000), 1, shares + 1),
            Ok(0)
        );
        assert_eq!(
            month_payout(&env, &month(1_000_000, 500_000), shares, shares + 1),
            Ok(500_000)
        );
    }

    #[test]
    fn no_reward_or_no_shares_pays_nothing() {
        let env = Env::default();

        assert_eq!(month_payout(&env, &MonthData::default(), 5, 10), Ok(0));
        assert_eq!(month_payout(&env, &month(1_000, 0), 0, 10), Ok(0));
        assert_eq!(month_payout(&env, &month(1_000, 0), 5, 0), Ok(0));
    }

    #[test]
    fn wide_intermediate_does_not_overflow() {
        let env = Env::default();
        let reward = 10i128.pow(30);
        let shares = 10i128.pow(30);

        assert_eq!(
            month_payout(&env, &month(reward, 0), shares, 4 * shares),
            Ok(reward / 4)
        );
    }
}
