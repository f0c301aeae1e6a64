use crate::errors::AccessControlError;
use crate::role::Role;
use crate::storage::StorageTrait;
use soroban_sdk::{panic_with_error, Address, Env};
use utils::bump::bump_instance;

#[derive(Clone)]
pub struct AccessControl(pub(crate) Env);

impl AccessControl {
    pub fn new(env: &Env) -> AccessControl {
        AccessControl(env.clone())
    }
}

pub trait AccessControlTrait {
    fn get_role_safe(&self, role: &Role) -> Option<Address>;
    fn set_role_address(&self, role: &Role, address: &Address);
    fn address_has_role(&self, address: &Address, role: &Role) -> bool;
    fn assert_address_has_role(&self, address: &Address, role: &Role);
}

impl AccessControlTrait for AccessControl {
    fn get_role_safe(&self, role: &Role) -> Option<Address> {
        bump_instance(&self.0);
        self.0.storage().instance().get(&self.get_key(role))
    }

    fn set_role_address(&self, role: &Role, address: &Address) {
        // delayed roles may only be set directly the first time,
        // replacing them goes through the ownership transfer flow
        if role.is_transfer_delayed() && self.get_role_safe(role).is_some() {
            panic_with_error!(&self.0, AccessControlError::BadRoleUsage);
        }

        bump_instance(&self.0);
        self.0.storage().instance().set(&self.get_key(role), address);
    }

    fn address_has_role(&self, address: &Address, role: &Role) -> bool {
        match self.get_role_safe(role) {
            Some(role_address) => address == &role_address,
            None => false,
        }
    }

    fn assert_address_has_role(&self, address: &Address, role: &Role) {
        if !self.address_has_role(address, role) {
            panic_with_error!(&self.0, AccessControlError::Unauthorized);
        }
    }
}
