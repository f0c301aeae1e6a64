use soroban_sdk::{contracttype, Address, Vec};

// One instruction of an execution path.
// `amount_in == 0` takes the whole output of the preceding step as input.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapStep {
    pub pool_address: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: u128,
    pub amount_out_min: u128,
    // venue specific selector, forwarded to the router as is
    pub fee_tier: u32,
    // 1-based index into the router registry
    pub swap_type: u32,
}

// Call convention spoken by a registered router.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RouterKind {
    Sync = 1,
    Horizon = 2,
    Echo = 3,
    LeetSwap = 4,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouterConfig {
    pub kind: RouterKind,
    pub address: Address,
}

// Encoded as a map with keys in sorted order, `user_amount` is the last entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionReport {
    pub token_out: Address,
    // realized output of every step, in execution order
    pub amounts_out: Vec<u128>,
    pub total_output: u128,
    pub fee_amount: u128,
    // output credited to the user after the fee
    pub user_amount: u128,
}
