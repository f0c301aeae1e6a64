use crate::adapter;
use crate::constants::MAX_STEPS;
use crate::errors::Error;
use crate::events::{Events, ExecutionEvents};
use crate::storage::{get_native_token, get_routers, router_for_swap_type};
use crate::types::{RouterConfig, SwapStep};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{panic_with_error, Address, Env, Vec};
use utils::math_errors::MathError;

// Where the input of a step comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Funding {
    // pulled from the caller
    Caller,
    // spent from the native value attached to the call
    NativeValue,
    // output of the preceding step, already held by this contract
    Carried,
}

// Mutable state of a single execution.
pub(crate) struct ExecutionContext {
    // output of the most recently completed step
    pub(crate) carried_amount: u128,
    // output credited to the caller in the terminal token
    pub(crate) total_output: u128,
    // native value attached to the call and not spent yet
    pub(crate) native_value_supplied: u128,
    native_token: Address,
    native_funded: bool,
}

impl ExecutionContext {
    pub(crate) fn new(native_token: Address, native_value: u128) -> Self {
        ExecutionContext {
            carried_amount: 0,
            total_output: 0,
            native_value_supplied: native_value,
            native_token,
            native_funded: native_value > 0,
        }
    }

    // Native steps only exist when native value was attached to the call.
    // Otherwise the native asset is handled as any other token.
    pub(crate) fn is_native_step(&self, step: &SwapStep) -> bool {
        self.native_funded && step.token_in == self.native_token
    }

    pub(crate) fn resolve_amount_in(&self, step: &SwapStep, index: u32) -> (u128, Funding) {
        if step.amount_in > 0 {
            if self.is_native_step(step) {
                return (step.amount_in, Funding::NativeValue);
            }
            return (step.amount_in, Funding::Caller);
        }
        if index == 0 {
            // first step spends whatever native value is attached
            return (self.native_value_supplied, Funding::NativeValue);
        }
        (self.carried_amount, Funding::Carried)
    }

    pub(crate) fn consume_native_value(&mut self, e: &Env, amount: u128) {
        if amount > self.native_value_supplied {
            panic_with_error!(e, Error::InsufficientNativeValue);
        }
        self.native_value_supplied -= amount;
    }

    pub(crate) fn credit(&mut self, e: &Env, amount: u128) {
        self.total_output = match self.total_output.checked_add(amount) {
            Some(v) => v,
            None => panic_with_error!(e, MathError::NumberOverflow),
        };
    }
}

// Token interfaces count in i128.
pub(crate) fn to_token_amount(e: &Env, amount: u128) -> i128 {
    match i128::try_from(amount) {
        Ok(v) => v,
        Err(_) => panic_with_error!(e, MathError::NumberOverflow),
    }
}

pub(crate) struct PathOutcome {
    pub(crate) token_out: Address,
    pub(crate) amounts_out: Vec<u128>,
    pub(crate) total_output: u128,
}

// Check the whole path before touching any balance.
pub(crate) fn validate_path(
    e: &Env,
    steps: &Vec<SwapStep>,
    routers: &Vec<RouterConfig>,
    ctx: &ExecutionContext,
) {
    if steps.is_empty() {
        panic_with_error!(e, Error::PathIsEmpty);
    }
    if steps.len() > MAX_STEPS {
        panic_with_error!(e, Error::TooManySteps);
    }
    to_token_amount(e, ctx.native_value_supplied);

    let mut previous: Option<SwapStep> = None;
    for step in steps.iter() {
        if step.token_in == step.token_out {
            panic_with_error!(e, Error::CannotSwapSameToken);
        }
        router_for_swap_type(e, routers, step.swap_type);
        to_token_amount(e, step.amount_in);

        if step.amount_in == 0 {
            match &previous {
                Some(prev) => {
                    if prev.token_out != step.token_in {
                        panic_with_error!(e, Error::ChainedTokenMismatch);
                    }
                }
                None => {
                    if !ctx.is_native_step(&step) {
                        panic_with_error!(e, Error::ChainedAmountWithoutPredecessor);
                    }
                }
            }
        }
        previous = Some(step);
    }
}

// Execute every step in order, threading outputs between them.
//
// The terminal token is the output token of the last step. A step output that the next
// step does not consume is the end of a path: it is credited to the caller when it is in
// the terminal token and sent back to the caller otherwise. Unspent native value is
// refunded. The credited total is left on this contract for fee processing.
pub(crate) fn execute_path(
    e: &Env,
    user: &Address,
    steps: &Vec<SwapStep>,
    native_value: u128,
) -> PathOutcome {
    let this = e.current_contract_address();
    let routers = get_routers(e);
    let mut ctx = ExecutionContext::new(get_native_token(e), native_value);
    validate_path(e, steps, &routers, &ctx);

    let token_out = match steps.last() {
        Some(step) => step.token_out,
        None => panic_with_error!(e, Error::PathIsEmpty),
    };

    if native_value > 0 {
        SorobanTokenClient::new(e, &ctx.native_token).transfer(
            user,
            &this,
            &to_token_amount(e, native_value),
        );
    }

    let events = Events::new(e);
    let mut amounts_out = Vec::new(e);
    for index in 0..steps.len() {
        let step = steps.get_unchecked(index);
        let (amount_in, funding) = ctx.resolve_amount_in(&step, index);
        match funding {
            Funding::Caller => SorobanTokenClient::new(e, &step.token_in).transfer(
                user,
                &this,
                &to_token_amount(e, amount_in),
            ),
            Funding::NativeValue => ctx.consume_native_value(e, amount_in),
            Funding::Carried => {}
        }

        let router = router_for_swap_type(e, &routers, step.swap_type);
        let amount_out = adapter::execute(e, &router, &step, amount_in);
        ctx.carried_amount = amount_out;
        amounts_out.push_back(amount_out);
        events.swap_step(
            user.clone(),
            step.swap_type,
            step.token_in.clone(),
            step.token_out.clone(),
            amount_in,
            amount_out,
        );

        let consumed_by_next = match steps.get(index + 1) {
            Some(next) => next.amount_in == 0,
            None => false,
        };
        if consumed_by_next {
            continue;
        }
        if step.token_out == token_out {
            ctx.credit(e, amount_out);
        } else if amount_out > 0 {
            SorobanTokenClient::new(e, &step.token_out).transfer(
                &this,
                user,
                &to_token_amount(e, amount_out),
            );
        }
    }

    if ctx.native_value_supplied > 0 {
        SorobanTokenClient::new(e, &ctx.native_token).transfer(
            &this,
            user,
            &to_token_amount(e, ctx.native_value_supplied),
        );
    }

    PathOutcome {
        token_out,
        amounts_out,
        total_output: ctx.total_output,
    }
}
