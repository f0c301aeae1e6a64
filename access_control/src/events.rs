use crate::role::{Role, SymbolRepresentation};
use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    pub fn commit_transfer_ownership(&self, role: Role, new_address: Address) {
        self.env().events().publish(
            (
                Symbol::new(self.env(), "commit_transfer_ownership"),
                role.as_symbol(self.env()),
            ),
            (new_address,),
        )
    }

    pub fn apply_transfer_ownership(&self, role: Role, new_owner: Address) {
        self.env().events().publish(
            (
                Symbol::new(self.env(), "apply_transfer_ownership"),
                role.as_symbol(self.env()),
            ),
            (new_owner,),
        )
    }

    pub fn revert_transfer_ownership(&self, role: Role) {
        self.env().events().publish(
            (
                Symbol::new(self.env(), "revert_transfer_ownership"),
                role.as_symbol(self.env()),
            ),
            (),
        )
    }

    pub fn set_privileged_addr(&self, role: Role, address: Address) {
        self.env().events().publish(
            (
                Symbol::new(self.env(), "set_privileged_addr"),
                role.as_symbol(self.env()),
            ),
            (address,),
        )
    }
}
