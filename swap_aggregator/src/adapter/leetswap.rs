use crate::adapter::deadline;
use crate::types::SwapStep;
use soroban_sdk::{contractclient, contracttype, vec, Address, Env, Vec};

// Hop through an explicit pair.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeetRoute {
    pub pair: Address,
    pub from: Address,
    pub to: Address,
}

#[contractclient(name = "LeetSwapRouterClient")]
pub trait LeetSwapRouter {
    fn swap_exact_tokens_for_tokens(
        e: Env,
        sender: Address,
        amount_in: u128,
        amount_out_min: u128,
        routes: Vec<LeetRoute>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;
}

pub(crate) fn invoke(e: &Env, router: &Address, step: &SwapStep, amount_in: u128) {
    let this = e.current_contract_address();
    let route = LeetRoute {
        pair: step.pool_address.clone(),
        from: step.token_in.clone(),
        to: step.token_out.clone(),
    };
    LeetSwapRouterClient::new(e, router).swap_exact_tokens_for_tokens(
        &this,
        &amount_in,
        &step.amount_out_min,
        &vec![e, route],
        &this,
        &deadline(e),
    );
}
