use crate::allowance;
use crate::errors::Error;
use crate::events::{ConfigurationEvents, Events, ExecutionEvents};
use crate::executor::{execute_path, to_token_amount};
use crate::fee::{validate_fee_percentage, FeeAccountant};
use crate::interface::{AdminInterface, SwapAggregatorInterface, UpgradeableContract};
use crate::storage::{
    get_fee_address, get_fee_percentage, get_is_killed_swaps, get_native_token, get_routers,
    router_for_swap_type, set_fee_address, set_fee_percentage, set_is_killed_swaps,
    set_native_token, set_routers,
};
use crate::types::{ExecutionReport, RouterConfig, SwapStep};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::{require_admin, require_pause_admin_or_owner};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env, Vec};

#[contract]
pub struct SwapAggregator;

#[contractimpl]
impl SwapAggregator {
    // __constructor
    // Initializes the aggregator.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - admin: The address allowed to configure the contract.
    //   - fee_address: The address receiving the protocol fee.
    //   - fee_percentage: The protocol fee in 1 / 10_000 units, below 2^24.
    //   - native_token: The asset contract of the network native currency.
    //   - routers: The router registry. Swap type N addresses the N-th entry.
    pub fn __constructor(
        e: Env,
        admin: Address,
        fee_address: Address,
        fee_percentage: u32,
        native_token: Address,
        routers: Vec<RouterConfig>,
    ) {
        validate_fee_percentage(&e, fee_percentage);
        if routers.is_empty() {
            panic_with_error!(&e, Error::RouterRegistryEmpty);
        }

        AccessControl::new(&e).set_role_address(&Role::Admin, &admin);
        set_fee_address(&e, &fee_address);
        set_fee_percentage(&e, &fee_percentage);
        set_native_token(&e, &native_token);
        set_routers(&e, &routers);
    }

    pub fn get_fee_percentage(e: Env) -> u32 {
        get_fee_percentage(&e)
    }

    pub fn get_fee_address(e: Env) -> Address {
        get_fee_address(&e)
    }

    pub fn get_native_token(e: Env) -> Address {
        get_native_token(&e)
    }

    pub fn get_routers(e: Env) -> Vec<RouterConfig> {
        get_routers(&e)
    }

    // get_router
    // Returns the registry entry handling `swap_type`.
    pub fn get_router(e: Env, swap_type: u32) -> RouterConfig {
        router_for_swap_type(&e, &get_routers(&e), swap_type)
    }
}

#[contractimpl]
impl AdminInterface for SwapAggregator {
    // set_fee_percentage
    // Updates the protocol fee.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - admin: The admin address.
    //   - fee_percentage: The new fee in 1 / 10_000 units. Values of 2^24 and above are rejected.
    fn set_fee_percentage(e: Env, admin: Address, fee_percentage: u32) {
        admin.require_auth();
        require_admin(&e, &admin);
        validate_fee_percentage(&e, fee_percentage);

        set_fee_percentage(&e, &fee_percentage);
        Events::new(&e).set_fee_percentage(fee_percentage);
    }

    // set_fee_address
    // Updates the protocol fee recipient.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - admin: The admin address.
    //   - fee_address: The new fee recipient.
    fn set_fee_address(e: Env, admin: Address, fee_address: Address) {
        admin.require_auth();
        require_admin(&e, &admin);

        set_fee_address(&e, &fee_address);
        Events::new(&e).set_fee_address(fee_address);
    }

    // grant_max_approvals
    // Approves every registered router to spend each of `tokens` held by the aggregator
    // without limit. Either every allowance is set or none is.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - admin: The admin address.
    //   - tokens: The tokens to approve.
    fn grant_max_approvals(e: Env, admin: Address, tokens: Vec<Address>) {
        admin.require_auth();
        require_admin(&e, &admin);

        let routers = allowance::grant_max_approvals(&e, &tokens);
        Events::new(&e).grant_max_approvals(tokens, routers);
    }

    // revoke_approvals
    // Resets every (token, router) allowance of the aggregator to zero.
    // Either every allowance is reset or none is.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - admin: The admin address.
    //   - tokens: The tokens to revoke.
    fn revoke_approvals(e: Env, admin: Address, tokens: Vec<Address>) {
        admin.require_auth();
        require_admin(&e, &admin);

        let routers = allowance::revoke_approvals(&e, &tokens);
        Events::new(&e).revoke_approvals(tokens, routers);
    }

    fn set_pause_admin(e: Env, admin: Address, pause_admin: Address) {
        admin.require_auth();
        require_admin(&e, &admin);

        AccessControl::new(&e).set_role_address(&Role::PauseAdmin, &pause_admin);
        AccessControlEvents::new(&e).set_privileged_addr(Role::PauseAdmin, pause_admin);
    }

    fn get_pause_admin(e: Env) -> Option<Address> {
        AccessControl::new(&e).get_role_safe(&Role::PauseAdmin)
    }

    fn kill_swaps(e: Env, admin: Address) {
        admin.require_auth();
        require_pause_admin_or_owner(&e, &admin);

        set_is_killed_swaps(&e, &true);
        Events::new(&e).kill_swaps();
    }

    fn unkill_swaps(e: Env, admin: Address) {
        admin.require_auth();
        require_pause_admin_or_owner(&e, &admin);

        set_is_killed_swaps(&e, &false);
        Events::new(&e).unkill_swaps();
    }

    fn get_is_killed_swaps(e: Env) -> bool {
        get_is_killed_swaps(&e)
    }
}

#[contractimpl]
impl SwapAggregatorInterface for SwapAggregator {
    // execute_swaps
    // Executes an ordered list of swap steps across the registered routers.
    //
    // A step with `amount_in` set pulls that amount from the user, or spends attached
    // native value when its input is the native token. A step with `amount_in == 0`
    // swaps the whole output of the previous step. Outputs in the token produced by the
    // last step are summed, charged the protocol fee and transferred to the user.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - user: The user executing the swaps (must be authorized).
    //   - steps: The ordered swap steps.
    //   - min_total_amount_out: The minimum output credited to the user after fee deduction.
    //   - native_value: Native currency attached to the call.
    //
    // Returns:
    //   - The execution report. Its last field is the amount credited to the user.
    fn execute_swaps(
        e: Env,
        user: Address,
        steps: Vec<SwapStep>,
        min_total_amount_out: u128,
        native_value: Option<u128>,
    ) -> ExecutionReport {
        user.require_auth();
        if get_is_killed_swaps(&e) {
            panic_with_error!(&e, Error::SwapsKilled);
        }

        let outcome = execute_path(&e, &user, &steps, native_value.unwrap_or(0));

        let fee_accountant = FeeAccountant::load(&e);
        let (credited_output, fee_amount) = fee_accountant.apply_fee(&e, outcome.total_output);
        if credited_output < min_total_amount_out {
            panic_with_error!(&e, Error::InsufficientOutput);
        }

        fee_accountant.collect(&e, &outcome.token_out, fee_amount);
        if credited_output > 0 {
            SorobanTokenClient::new(&e, &outcome.token_out).transfer(
                &e.current_contract_address(),
                &user,
                &to_token_amount(&e, credited_output),
            );
        }

        Events::new(&e).paths_executed(
            user,
            outcome.token_out.clone(),
            outcome.amounts_out.clone(),
            outcome.total_output,
            fee_amount,
            credited_output,
        );

        ExecutionReport {
            token_out: outcome.token_out,
            amounts_out: outcome.amounts_out,
            total_output: outcome.total_output,
            fee_amount,
            user_amount: credited_output,
        }
    }
}

#[contractimpl]
impl UpgradeableContract for SwapAggregator {
    fn version() -> u32 {
        100
    }

    fn upgrade(e: Env, admin: Address, new_wasm_hash: BytesN<32>) {
        admin.require_auth();
        require_admin(&e, &admin);
        e.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}

#[contractimpl]
impl TransferableContract for SwapAggregator {
    fn commit_transfer_ownership(e: Env, admin: Address, new_admin: Address) {
        admin.require_auth();
        require_admin(&e, &admin);

        AccessControl::new(&e).commit_transfer_ownership(&Role::Admin, &new_admin);
        AccessControlEvents::new(&e).commit_transfer_ownership(Role::Admin, new_admin);
    }

    fn apply_transfer_ownership(e: Env, admin: Address) {
        admin.require_auth();
        require_admin(&e, &admin);

        let new_admin = AccessControl::new(&e).apply_transfer_ownership(&Role::Admin);
        AccessControlEvents::new(&e).apply_transfer_ownership(Role::Admin, new_admin);
    }

    fn revert_transfer_ownership(e: Env, admin: Address) {
        admin.require_auth();
        require_admin(&e, &admin);

        AccessControl::new(&e).revert_transfer_ownership(&Role::Admin);
        AccessControlEvents::new(&e).revert_transfer_ownership(Role::Admin);
    }

    fn get_future_address(e: Env) -> Address {
        AccessControl::new(&e).get_future_address(&Role::Admin)
    }
}
