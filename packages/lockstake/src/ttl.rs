pub const DAY_IN_LEDGERS: u32 = 17280;

// Stakes and reward months must outlive long locks, so every persistent entry is bumped to
// 30 days of ledger units whenever it is read or written.
pub const PERSISTENT_TARGET_TTL: u32 = 30 * DAY_IN_LEDGERS;
// Entries with less than 29 days of ledger units left get extended
pub const PERSISTENT_RENEWAL_THRESHOLD: u32 = PERSISTENT_TARGET_TTL - DAY_IN_LEDGERS;
