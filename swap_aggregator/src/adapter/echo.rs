use crate::adapter::deadline;
use crate::types::SwapStep;
use soroban_sdk::{contractclient, vec, Address, Env, Vec};

// Constant product router addressed by token path; the pair is looked up by the router.
#[contractclient(name = "EchoRouterClient")]
pub trait EchoRouter {
    fn swap_exact_tokens_for_tokens(
        e: Env,
        sender: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;
}

pub(crate) fn invoke(e: &Env, router: &Address, step: &SwapStep, amount_in: u128) {
    let this = e.current_contract_address();
    EchoRouterClient::new(e, router).swap_exact_tokens_for_tokens(
        &this,
        &amount_in,
        &step.amount_out_min,
        &vec![e, step.token_in.clone(), step.token_out.clone()],
        &this,
        &deadline(e),
    );
}
