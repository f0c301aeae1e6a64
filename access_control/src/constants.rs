// admin ownership transfer can be applied once this delay has passed since commit
pub const ADMIN_ACTIONS_DELAY: u64 = 3 * 86400;
