use soroban_sdk::{Env, Symbol};

#[derive(Clone)]
pub enum Role {
    // owner: configures fees, router allowances, privileged roles and upgrades
    Admin,
    // may stop swap execution in an emergency
    PauseAdmin,
}

impl Role {
    pub(crate) fn is_transfer_delayed(&self) -> bool {
        match self {
            Role::Admin => true,
            Role::PauseAdmin => false,
        }
    }
}

pub trait SymbolRepresentation {
    fn as_symbol(&self, e: &Env) -> Symbol;
}

impl SymbolRepresentation for Role {
    fn as_symbol(&self, e: &Env) -> Symbol {
        match self {
            Role::Admin => Symbol::new(e, "Admin"),
            Role::PauseAdmin => Symbol::new(e, "PauseAdmin"),
        }
    }
}
