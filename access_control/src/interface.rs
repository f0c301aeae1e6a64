use soroban_sdk::{Address, Env};

pub trait TransferableContract {
    // Commit ownership transfer. Can be applied after ADMIN_ACTIONS_DELAY
    fn commit_transfer_ownership(e: Env, admin: Address, new_admin: Address);

    // Apply committed transfer ownership
    fn apply_transfer_ownership(e: Env, admin: Address);

    // Revert committed ownership transfer
    fn revert_transfer_ownership(e: Env, admin: Address);

    // Get address ownership is being transferred to
    fn get_future_address(e: Env) -> Address;
}
