// Instance storage accessors. Every access extends the instance TTL so that
// configuration written once at construction stays alive while it is used.
// The generated functions take `&Env` and are named `get_<attr>` / `set_<attr>`.

#[doc(hidden)]
pub use paste;

#[macro_export]
macro_rules! generate_instance_storage_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        $crate::storage::paste::paste! {
            pub fn [<set_ $attr_name>](e: &soroban_sdk::Env, $attr_name: &$data_type) {
                $crate::bump::bump_instance(e);
                e.storage().instance().set(&$key, $attr_name)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        $crate::storage::paste::paste! {
            pub fn [<get_ $attr_name>](e: &soroban_sdk::Env) -> $data_type {
                $crate::bump::bump_instance(e);
                match e.storage().instance().get(&$key) {
                    Some(value) => value,
                    None => soroban_sdk::panic_with_error!(
                        e,
                        $crate::storage_errors::StorageError::ValueNotInitialized
                    ),
                }
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        $crate::storage::paste::paste! {
            pub fn [<get_ $attr_name>](e: &soroban_sdk::Env) -> $data_type {
                $crate::bump::bump_instance(e);
                e.storage().instance().get(&$key).unwrap_or($default)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        $crate::generate_instance_storage_getter!($attr_name, $key, $data_type);
        $crate::generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        $crate::generate_instance_storage_getter_with_default!(
            $attr_name, $key, $data_type, $default
        );
        $crate::generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}
