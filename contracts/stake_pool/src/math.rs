use lockstake::utils::{BPS_DENOMINATOR, DAYS_IN_YEAR};
use soroban_sdk::{Env, U256};

use crate::{error::ContractError, msg::SharesResponse, storage::Config};

/// Size bonus is scaled per this many whole tokens
const SIZE_BONUS_TOKENS: u128 = 1_000_000;

/// Computes the shares of a deposit of `amount` locked for `lock_days`.
///
/// * **Equation**
///
/// long_term_bonus = amount * share_bonus_per_year * lock_days / (365 * 10_000)
///
/// size_bonus = amount * share_bonus_per_1m_tokens * amount / (1_000_000 * 10**decimals * 10_000)
///
/// shares = amount + long_term_bonus + size_bonus
///
/// Products are evaluated in 256 bits and each bonus is floored exactly once.
pub fn calculate_shares(
    env: &Env,
    config: &Config,
    amount: i128,
    lock_days: u64,
) -> Result<SharesResponse, ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    let amount = U256::from_u128(env, amount as u128);

    let long_term_bonus = amount
        .mul(&U256::from_u32(env, config.share_bonus_per_year))
        .mul(&U256::from_u128(env, lock_days as u128))
        .div(&U256::from_u128(
            env,
            (DAYS_IN_YEAR * BPS_DENOMINATOR) as u128,
        ));

    let size_bonus_units = U256::from_u128(env, SIZE_BONUS_TOKENS)
        .mul(&U256::from_u32(env, 10).pow(config.token_decimals))
        .mul(&U256::from_u128(env, BPS_DENOMINATOR as u128));
    let size_bonus = amount
        .mul(&U256::from_u32(env, config.share_bonus_per_1m_tokens))
        .mul(&amount)
        .div(&size_bonus_units);

    let shares = amount.add(&long_term_bonus).add(&size_bonus);

    Ok(SharesResponse {
        shares: to_i128(&shares)?,
        long_term_bonus: to_i128(&long_term_bonus)?,
    })
}

fn to_i128(value: &U256) -> Result<i128, ContractError> {
    value
        .to_u128()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or(ContractError::ContractMathError)
}
