#![cfg(test)]

use crate::testutils::Setup;
use access_control::constants::ADMIN_ACTIONS_DELAY;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, BytesN, Error, IntoVal, Symbol};
use utils::test_utils::jump;

#[test]
fn test_admin_set_fee() {
    let setup = Setup::default();
    setup.contract.set_fee_percentage(&setup.admin, &200);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_third_party_user_set_fee() {
    let setup = Setup::default();
    setup
        .contract
        .set_fee_percentage(&Address::generate(&setup.env), &200);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_third_party_user_set_fee_address() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.contract.set_fee_address(&user, &user);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_third_party_user_grant_max_approvals() {
    let setup = Setup::default();
    setup.contract.grant_max_approvals(
        &Address::generate(&setup.env),
        &vec![&setup.env, setup.token_a.address.clone()],
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_third_party_user_revoke_approvals() {
    let setup = Setup::default();
    setup.contract.revoke_approvals(
        &Address::generate(&setup.env),
        &vec![&setup.env, setup.token_a.address.clone()],
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_third_party_user_set_pause_admin() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.contract.set_pause_admin(&user, &user);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_third_party_user_kill_swaps() {
    let setup = Setup::default();
    setup.contract.kill_swaps(&Address::generate(&setup.env));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_third_party_user_upgrade() {
    let setup = Setup::default();
    setup.contract.upgrade(
        &Address::generate(&setup.env),
        &BytesN::from_array(&setup.env, &[0u8; 32]),
    );
}

#[test]
fn test_pause_admin_kill_swaps() {
    let setup = Setup::default();
    let pause_admin = Address::generate(&setup.env);

    setup.contract.set_pause_admin(&setup.admin, &pause_admin);
    assert_eq!(
        vec![&setup.env, setup.env.events().all().last().unwrap()],
        vec![
            &setup.env,
            (
                setup.contract.address.clone(),
                (
                    Symbol::new(&setup.env, "set_privileged_addr"),
                    Symbol::new(&setup.env, "PauseAdmin"),
                )
                    .into_val(&setup.env),
                (pause_admin.clone(),).into_val(&setup.env),
            ),
        ]
    );
    assert_eq!(setup.contract.get_pause_admin(), Some(pause_admin.clone()));

    setup.contract.kill_swaps(&pause_admin);
    assert_eq!(setup.contract.get_is_killed_swaps(), true);
}

#[test]
fn test_pause_admin_unkill_swaps() {
    let setup = Setup::default();
    let pause_admin = Address::generate(&setup.env);

    setup.contract.set_pause_admin(&setup.admin, &pause_admin);
    setup.contract.kill_swaps(&pause_admin);
    setup.contract.unkill_swaps(&pause_admin);
    assert_eq!(setup.contract.get_is_killed_swaps(), false);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_third_party_user_unkill_swaps() {
    let setup = Setup::default();
    setup.contract.kill_swaps(&setup.admin);
    setup.contract.unkill_swaps(&Address::generate(&setup.env));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_pause_admin_set_fee() {
    let setup = Setup::default();
    let pause_admin = Address::generate(&setup.env);

    setup.contract.set_pause_admin(&setup.admin, &pause_admin);
    setup.contract.set_fee_percentage(&pause_admin, &200);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let new_admin = Address::generate(&setup.env);

    setup
        .contract
        .commit_transfer_ownership(&setup.admin, &new_admin);
    assert_eq!(
        vec![&setup.env, setup.env.events().all().last().unwrap()],
        vec![
            &setup.env,
            (
                setup.contract.address.clone(),
                (
                    Symbol::new(&setup.env, "commit_transfer_ownership"),
                    Symbol::new(&setup.env, "Admin"),
                )
                    .into_val(&setup.env),
                (new_admin.clone(),).into_val(&setup.env),
            ),
        ]
    );
    assert_eq!(setup.contract.get_future_address(), new_admin);

    // new admin has no power until transfer is applied
    assert!(setup
        .contract
        .try_set_fee_percentage(&new_admin, &200)
        .is_err());

    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    setup.contract.apply_transfer_ownership(&setup.admin);

    setup.contract.set_fee_percentage(&new_admin, &200);
    assert_eq!(setup.contract.get_fee_percentage(), 200);
    assert!(setup
        .contract
        .try_set_fee_percentage(&setup.admin, &300)
        .is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #2906)")]
fn test_transfer_ownership_twice() {
    let setup = Setup::default();
    let new_admin = Address::generate(&setup.env);

    setup
        .contract
        .commit_transfer_ownership(&setup.admin, &new_admin);
    setup
        .contract
        .commit_transfer_ownership(&setup.admin, &new_admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #2908)")]
fn test_transfer_ownership_too_early() {
    let setup = Setup::default();
    let new_admin = Address::generate(&setup.env);

    setup
        .contract
        .commit_transfer_ownership(&setup.admin, &new_admin);
    jump(&setup.env, ADMIN_ACTIONS_DELAY - 1);
    setup.contract.apply_transfer_ownership(&setup.admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_apply_transfer_ownership_not_committed() {
    let setup = Setup::default();
    setup.contract.apply_transfer_ownership(&setup.admin);
}

#[test]
fn test_revert_transfer_ownership() {
    let setup = Setup::default();
    let new_admin = Address::generate(&setup.env);

    setup
        .contract
        .commit_transfer_ownership(&setup.admin, &new_admin);
    setup.contract.revert_transfer_ownership(&setup.admin);
    assert_eq!(
        setup.contract.try_get_future_address().unwrap_err(),
        Ok(Error::from_contract_error(2907))
    );

    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    assert!(setup
        .contract
        .try_apply_transfer_ownership(&setup.admin)
        .is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_revert_transfer_ownership_not_committed() {
    let setup = Setup::default();
    setup.contract.revert_transfer_ownership(&setup.admin);
}
