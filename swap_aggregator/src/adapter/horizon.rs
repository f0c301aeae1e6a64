//! Horizon router adapter.
//!
//! Concentrated liquidity router: the pool is identified by the token pair and
//! the fee tier, so `fee_tier` is forwarded and `pool_address` is not.

use crate::adapter::deadline;
use crate::types::SwapStep;
use soroban_sdk::{contractclient, contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub recipient: Address,
    pub deadline: u64,
    pub amount_in: u128,
    pub amount_out_minimum: u128,
    // zero means no price limit
    pub sqrt_price_limit_x96: u128,
}

#[contractclient(name = "HorizonRouterClient")]
pub trait HorizonRouter {
    fn exact_input_single(e: Env, sender: Address, params: ExactInputSingleParams) -> u128;
}

pub(crate) fn invoke(e: &Env, router: &Address, step: &SwapStep, amount_in: u128) {
    let this = e.current_contract_address();
    let params = ExactInputSingleParams {
        token_in: step.token_in.clone(),
        token_out: step.token_out.clone(),
        fee: step.fee_tier,
        recipient: this.clone(),
        deadline: deadline(e),
        amount_in,
        amount_out_minimum: step.amount_out_min,
        sqrt_price_limit_x96: 0,
    };
    HorizonRouterClient::new(e, router).exact_input_single(&this, &params);
}
