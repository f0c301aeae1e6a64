use soroban_sdk::{Address, Env, Symbol, Vec};

#[derive(Clone)]
pub(crate) struct Events(Env);

impl Events {
    #[inline(always)]
    pub(crate) fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

// Execution events. `paths_executed` always carries the credited output
// as its last data element.
pub(crate) trait ExecutionEvents {
    fn swap_step(
        &self,
        user: Address,
        swap_type: u32,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        out_amount: u128,
    );

    fn paths_executed(
        &self,
        user: Address,
        token_out: Address,
        amounts_out: Vec<u128>,
        total_output: u128,
        fee_amount: u128,
        credited_output: u128,
    );
}

pub(crate) trait ConfigurationEvents {
    fn set_fee_percentage(&self, fee_percentage: u32);

    fn set_fee_address(&self, fee_address: Address);

    fn grant_max_approvals(&self, tokens: Vec<Address>, routers: Vec<Address>);

    fn revoke_approvals(&self, tokens: Vec<Address>, routers: Vec<Address>);

    fn kill_swaps(&self);

    fn unkill_swaps(&self);
}

impl ExecutionEvents for Events {
    fn swap_step(
        &self,
        user: Address,
        swap_type: u32,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        out_amount: u128,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "swap_step"), user, swap_type),
            (token_in, token_out, in_amount, out_amount),
        );
    }

    fn paths_executed(
        &self,
        user: Address,
        token_out: Address,
        amounts_out: Vec<u128>,
        total_output: u128,
        fee_amount: u128,
        credited_output: u128,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "paths_executed"), user),
            (
                token_out,
                amounts_out,
                total_output,
                fee_amount,
                credited_output,
            ),
        );
    }
}

impl ConfigurationEvents for Events {
    fn set_fee_percentage(&self, fee_percentage: u32) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_fee_percentage"),),
            (fee_percentage,),
        );
    }

    fn set_fee_address(&self, fee_address: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_fee_address"),),
            (fee_address,),
        );
    }

    fn grant_max_approvals(&self, tokens: Vec<Address>, routers: Vec<Address>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "grant_max_approvals"),),
            (tokens, routers),
        );
    }

    fn revoke_approvals(&self, tokens: Vec<Address>, routers: Vec<Address>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "revoke_approvals"),),
            (tokens, routers),
        );
    }

    fn kill_swaps(&self) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "kill_swaps"),), ());
    }

    fn unkill_swaps(&self) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "unkill_swaps"),), ());
    }
}
