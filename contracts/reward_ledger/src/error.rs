use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NothingToClaim = 1,
    InvalidRewardAmount = 2,
    ContractMathError = 3,
}
