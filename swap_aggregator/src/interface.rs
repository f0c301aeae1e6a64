use crate::types::{ExecutionReport, SwapStep};
use soroban_sdk::{Address, BytesN, Env, Vec};

pub trait AdminInterface {
    // Set protocol fee in 1 / 10_000 units. Must fit into 24 bits
    fn set_fee_percentage(e: Env, admin: Address, fee_percentage: u32);

    // Set protocol fee recipient
    fn set_fee_address(e: Env, admin: Address, fee_address: Address);

    // Approve every registered router to spend `tokens` of the aggregator without limit
    fn grant_max_approvals(e: Env, admin: Address, tokens: Vec<Address>);

    // Reset every (token, router) allowance of the aggregator to zero
    fn revoke_approvals(e: Env, admin: Address, tokens: Vec<Address>);

    // Set address allowed to stop swaps in an emergency
    fn set_pause_admin(e: Env, admin: Address, pause_admin: Address);

    // Get pause admin address
    fn get_pause_admin(e: Env) -> Option<Address>;

    // Stop swap execution
    fn kill_swaps(e: Env, admin: Address);

    // Resume swap execution
    fn unkill_swaps(e: Env, admin: Address);

    // Is swap execution stopped
    fn get_is_killed_swaps(e: Env) -> bool;
}

pub trait SwapAggregatorInterface {
    // Execute `steps` atomically and credit the output, net of the protocol fee,
    // to `user`. Fails unless at least `min_total_amount_out` is credited.
    // `native_value` is native currency attached to the call.
    fn execute_swaps(
        e: Env,
        user: Address,
        steps: Vec<SwapStep>,
        min_total_amount_out: u128,
        native_value: Option<u128>,
    ) -> ExecutionReport;
}

pub trait UpgradeableContract {
    // Get contract version
    fn version() -> u32;

    // Upgrade contract with new wasm code
    fn upgrade(e: Env, admin: Address, new_wasm_hash: BytesN<32>);
}
