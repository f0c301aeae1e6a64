use crate::constants::{FEE_DENOMINATOR, FEE_PERCENTAGE_LIMIT};
use crate::errors::Error;
use crate::executor::to_token_amount;
use crate::storage::{get_fee_address, get_fee_percentage};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{panic_with_error, Address, Env, U256};
use utils::math_errors::MathError;

pub(crate) fn validate_fee_percentage(e: &Env, fee_percentage: u32) {
    if fee_percentage >= FEE_PERCENTAGE_LIMIT {
        panic_with_error!(e, Error::FeeOutOfRange);
    }
}

// Protocol fee charged on the gross output of an execution.
pub(crate) struct FeeAccountant {
    pub(crate) fee_percentage: u32,
    pub(crate) fee_recipient: Address,
}

impl FeeAccountant {
    pub(crate) fn load(e: &Env) -> Self {
        FeeAccountant {
            fee_percentage: get_fee_percentage(e),
            fee_recipient: get_fee_address(e),
        }
    }

    // Split `gross_output` into (net_output, fee_amount).
    // fee_amount = gross_output * fee_percentage / FEE_DENOMINATOR, rounded down.
    pub(crate) fn apply_fee(&self, e: &Env, gross_output: u128) -> (u128, u128) {
        let fee_amount = match U256::from_u128(e, gross_output)
            .mul(&U256::from_u32(e, self.fee_percentage))
            .div(&U256::from_u32(e, FEE_DENOMINATOR))
            .to_u128()
        {
            Some(v) => v,
            None => panic_with_error!(e, MathError::NumberOverflow),
        };

        // percentages above the denominator are representable in configuration
        // but can never be charged
        if fee_amount > gross_output {
            panic_with_error!(e, Error::FeeOutOfRange);
        }
        (gross_output - fee_amount, fee_amount)
    }

    // Transfer the fee held by this contract to the fee recipient.
    pub(crate) fn collect(&self, e: &Env, token: &Address, fee_amount: u128) {
        if fee_amount == 0 {
            return;
        }
        SorobanTokenClient::new(e, token).transfer(
            &e.current_contract_address(),
            &self.fee_recipient,
            &to_token_amount(e, fee_amount),
        );
    }
}
