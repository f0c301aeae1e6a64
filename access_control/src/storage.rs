use crate::access::AccessControl;
use crate::role::Role;
use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub(crate) enum DataKey {
    Admin,
    PauseAdmin,
    FutureAdmin,
    TransferOwnershipDeadline,
}

pub(crate) trait StorageTrait {
    fn get_key(&self, role: &Role) -> DataKey;
    fn get_future_key(&self, role: &Role) -> Option<DataKey>;
    fn get_future_deadline_key(&self, role: &Role) -> Option<DataKey>;
}

impl StorageTrait for AccessControl {
    fn get_key(&self, role: &Role) -> DataKey {
        match role {
            Role::Admin => DataKey::Admin,
            Role::PauseAdmin => DataKey::PauseAdmin,
        }
    }

    fn get_future_key(&self, role: &Role) -> Option<DataKey> {
        match role {
            Role::Admin => Some(DataKey::FutureAdmin),
            Role::PauseAdmin => None,
        }
    }

    fn get_future_deadline_key(&self, role: &Role) -> Option<DataKey> {
        match role {
            Role::Admin => Some(DataKey::TransferOwnershipDeadline),
            Role::PauseAdmin => None,
        }
    }
}
