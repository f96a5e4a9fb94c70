use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesResponse {
    /// Principal plus the long term bonus plus the size bonus
    pub shares: i128,
    /// Part of `shares` earned by the lock duration alone
    pub long_term_bonus: i128,
}
