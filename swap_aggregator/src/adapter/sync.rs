//! Sync router adapter.
//!
//! The Sync router swaps along explicit pool hops. Every step becomes a single
//! path with a single hop through `pool_address`, delivering to this contract.
//! The fee tier is a property of the pool itself and is not forwarded.

use crate::adapter::deadline;
use crate::types::SwapStep;
use soroban_sdk::{contractclient, contracttype, vec, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyncSwapStep {
    pub pool: Address,
    pub token_in: Address,
    pub to: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyncSwapPath {
    pub steps: Vec<SyncSwapStep>,
    pub token_in: Address,
    pub amount_in: u128,
}

#[contractclient(name = "SyncRouterClient")]
pub trait SyncRouter {
    // Swap along every path, pulling `amount_in` of each path from `sender`.
    // Returns the output amount of the last path.
    fn swap(
        e: Env,
        sender: Address,
        paths: Vec<SyncSwapPath>,
        amount_out_min: u128,
        deadline: u64,
    ) -> u128;
}

pub(crate) fn invoke(e: &Env, router: &Address, step: &SwapStep, amount_in: u128) {
    let this = e.current_contract_address();
    let path = SyncSwapPath {
        steps: vec![
            e,
            SyncSwapStep {
                pool: step.pool_address.clone(),
                token_in: step.token_in.clone(),
                to: this.clone(),
            },
        ],
        token_in: step.token_in.clone(),
        amount_in,
    };
    SyncRouterClient::new(e, router).swap(
        &this,
        &vec![e, path],
        &step.amount_out_min,
        &deadline(e),
    );
}
