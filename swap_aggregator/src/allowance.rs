use crate::errors::Error;
use crate::storage::get_routers;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

// Largest allowance a token accepts; routers never run out of it.
pub(crate) const MAX_ALLOWANCE: i128 = i128::MAX;

pub(crate) fn router_addresses(e: &Env) -> Vec<Address> {
    let mut result = Vec::new(e);
    for router in get_routers(e).iter() {
        result.push_back(router.address);
    }
    result
}

// Approve every registered router to spend `tokens` held by this contract without limit.
// The approval lives until the last ledger the network lets a new entry live to.
pub(crate) fn grant_max_approvals(e: &Env, tokens: &Vec<Address>) -> Vec<Address> {
    let expiration_ledger = e.ledger().sequence() + e.storage().max_ttl() - 1;
    set_allowances(e, tokens, MAX_ALLOWANCE, expiration_ledger)
}

// Drive every (token, router) allowance of this contract back to zero.
pub(crate) fn revoke_approvals(e: &Env, tokens: &Vec<Address>) -> Vec<Address> {
    set_allowances(e, tokens, 0, e.ledger().sequence())
}

// One approve call per (token, router) pair. Any rejected call aborts the whole
// invocation so no mix of old and new allowances is ever persisted.
fn set_allowances(
    e: &Env,
    tokens: &Vec<Address>,
    amount: i128,
    expiration_ledger: u32,
) -> Vec<Address> {
    let this = e.current_contract_address();
    let routers = router_addresses(e);
    for token in tokens.iter() {
        let token_client = SorobanTokenClient::new(e, &token);
        for router in routers.iter() {
            match token_client.try_approve(&this, &router, &amount, &expiration_ledger) {
                Ok(Ok(_)) => {}
                _ => panic_with_error!(e, Error::AllowanceOperationFailed),
            }
        }
    }
    routers
}
