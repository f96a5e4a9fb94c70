use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidLockDays = 1,
    InvalidIndex = 2,
    TooEarly = 3,
    UnstakedAlready = 4,
    InvalidAmount = 5,
    InvalidLockBounds = 6,
    ContractMathError = 7,
}
