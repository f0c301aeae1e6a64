pub mod echo;
pub mod horizon;
pub mod leetswap;
pub mod sync;

use crate::errors::Error;
use crate::types::{RouterConfig, RouterKind, SwapStep};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{panic_with_error, Env};

// Dispatches a step with its resolved input to the router registered for its swap type
// and returns the output realized by this contract.
//
// Routers pull the input through the allowance granted to them and deliver the output
// to this contract. Whatever the router reports is ignored: the realized output is the
// balance delta of `token_out`, which is then checked against the step minimum.
pub(crate) fn execute(e: &Env, router: &RouterConfig, step: &SwapStep, amount_in: u128) -> u128 {
    let this = e.current_contract_address();
    let token_out = SorobanTokenClient::new(e, &step.token_out);
    let balance_before = token_out.balance(&this);

    match router.kind {
        RouterKind::Sync => sync::invoke(e, &router.address, step, amount_in),
        RouterKind::Horizon => horizon::invoke(e, &router.address, step, amount_in),
        RouterKind::Echo => echo::invoke(e, &router.address, step, amount_in),
        RouterKind::LeetSwap => leetswap::invoke(e, &router.address, step, amount_in),
    }

    let balance_after = token_out.balance(&this);
    let amount_out = if balance_after > balance_before {
        (balance_after - balance_before) as u128
    } else {
        0
    };

    if amount_out < step.amount_out_min {
        panic_with_error!(e, Error::SlippageExceeded);
    }
    amount_out
}

// Routers receive the current ledger time as deadline: the step is executed right now or never.
pub(crate) fn deadline(e: &Env) -> u64 {
    e.ledger().timestamp()
}
