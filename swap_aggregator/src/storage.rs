use crate::errors::Error;
use crate::types::RouterConfig;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};
use utils::{
    generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    FeePercentage, // protocol fee in 1 / FEE_DENOMINATOR units
    FeeAddress,    // recipient of the protocol fee
    NativeToken,   // asset contract of the network native currency
    Routers,       // router registry, fixed at construction
    IsKilledSwaps,
}

generate_instance_storage_getter_and_setter!(fee_percentage, DataKey::FeePercentage, u32);
generate_instance_storage_getter_and_setter!(fee_address, DataKey::FeeAddress, Address);
generate_instance_storage_getter_and_setter!(native_token, DataKey::NativeToken, Address);
generate_instance_storage_getter_and_setter!(routers, DataKey::Routers, Vec<RouterConfig>);
generate_instance_storage_getter_and_setter_with_default!(
    is_killed_swaps,
    DataKey::IsKilledSwaps,
    bool,
    false
);

// Resolve `swap_type` against the registry. Swap types are 1-based.
pub(crate) fn router_for_swap_type(
    e: &Env,
    routers: &Vec<RouterConfig>,
    swap_type: u32,
) -> RouterConfig {
    if swap_type == 0 {
        panic_with_error!(e, Error::SwapTypeUnsupported);
    }
    match routers.get(swap_type - 1) {
        Some(router) => router,
        None => panic_with_error!(e, Error::SwapTypeUnsupported),
    }
}
