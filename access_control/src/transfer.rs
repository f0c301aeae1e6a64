use crate::access::AccessControl;
use crate::constants::ADMIN_ACTIONS_DELAY;
use crate::errors::AccessControlError;
use crate::role::Role;
use crate::storage::{DataKey, StorageTrait};
use soroban_sdk::{panic_with_error, Address};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;

pub trait TransferOwnershipTrait {
    fn get_transfer_ownership_deadline(&self, role: &Role) -> u64;
    fn put_transfer_ownership_deadline(&self, role: &Role, value: u64);
    fn get_future_address(&self, role: &Role) -> Address;
    fn commit_transfer_ownership(&self, role: &Role, future_address: &Address);
    fn apply_transfer_ownership(&self, role: &Role) -> Address;
    fn revert_transfer_ownership(&self, role: &Role);
}

impl AccessControl {
    fn delayed_keys(&self, role: &Role) -> (DataKey, DataKey) {
        match (self.get_future_key(role), self.get_future_deadline_key(role)) {
            (Some(future_key), Some(deadline_key)) => (future_key, deadline_key),
            _ => panic_with_error!(&self.0, AccessControlError::BadRoleUsage),
        }
    }
}

impl TransferOwnershipTrait for AccessControl {
    fn get_transfer_ownership_deadline(&self, role: &Role) -> u64 {
        let (_, deadline_key) = self.delayed_keys(role);
        bump_instance(&self.0);
        self.0.storage().instance().get(&deadline_key).unwrap_or(0)
    }

    fn put_transfer_ownership_deadline(&self, role: &Role, value: u64) {
        let (_, deadline_key) = self.delayed_keys(role);
        bump_instance(&self.0);
        self.0.storage().instance().set(&deadline_key, &value);
    }

    fn get_future_address(&self, role: &Role) -> Address {
        let (future_key, _) = self.delayed_keys(role);
        match self.0.storage().instance().get(&future_key) {
            Some(v) => v,
            None => panic_with_error!(&self.0, AccessControlError::NoActionActive),
        }
    }

    fn commit_transfer_ownership(&self, role: &Role, future_address: &Address) {
        let (future_key, _) = self.delayed_keys(role);
        if self.get_transfer_ownership_deadline(role) != 0 {
            panic_with_error!(&self.0, AccessControlError::AnotherActionActive);
        }

        let deadline = self.0.ledger().timestamp() + ADMIN_ACTIONS_DELAY;
        self.put_transfer_ownership_deadline(role, deadline);

        bump_instance(&self.0);
        self.0.storage().instance().set(&future_key, future_address);
    }

    fn apply_transfer_ownership(&self, role: &Role) -> Address {
        let (future_key, _) = self.delayed_keys(role);
        let deadline = self.get_transfer_ownership_deadline(role);
        if deadline == 0 {
            panic_with_error!(&self.0, AccessControlError::NoActionActive);
        }
        if self.0.ledger().timestamp() < deadline {
            panic_with_error!(&self.0, AccessControlError::ActionNotReadyYet);
        }

        self.put_transfer_ownership_deadline(role, 0);
        let future_address: Address = match self.0.storage().instance().get(&future_key) {
            Some(v) => v,
            None => panic_with_error!(&self.0, StorageError::ValueNotInitialized),
        };
        self.0.storage().instance().remove(&future_key);

        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .set(&self.get_key(role), &future_address);

        future_address
    }

    fn revert_transfer_ownership(&self, role: &Role) {
        let (future_key, _) = self.delayed_keys(role);
        if self.get_transfer_ownership_deadline(role) == 0 {
            panic_with_error!(&self.0, AccessControlError::NoActionActive);
        }
        self.put_transfer_ownership_deadline(role, 0);
        self.0.storage().instance().remove(&future_key);
    }
}
