#![cfg(test)]
extern crate std;

use crate::testutils::{create_contract, faulty_token, lying_router, Setup, TestConfig};
use crate::{RouterConfig, RouterKind};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, Error, IntoVal, Map, Symbol, TryFromVal, Val, Vec};

#[test]
fn test_getters() {
    let setup = Setup::default();

    assert_eq!(setup.contract.get_fee_percentage(), 5);
    assert_eq!(setup.contract.get_fee_address(), setup.fee_destination);
    assert_eq!(setup.contract.get_native_token(), setup.token_a.address);
    assert_eq!(setup.contract.get_routers(), setup.routers);
    assert_eq!(
        setup.contract.get_router(&2),
        RouterConfig {
            kind: RouterKind::Horizon,
            address: setup.routers.get(1).unwrap().address,
        }
    );
    assert_eq!(setup.contract.get_is_killed_swaps(), false);
    assert_eq!(setup.contract.get_pause_admin(), None);
    assert_eq!(setup.contract.version(), 100);
}

#[test]
#[should_panic(expected = "Error(Contract, #2901)")]
fn test_get_router_zero_swap_type() {
    let setup = Setup::default();
    setup.contract.get_router(&0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2902)")]
fn test_init_empty_router_registry() {
    let setup = Setup::default();
    create_contract(
        &setup.env,
        &setup.admin,
        &setup.fee_destination,
        5,
        &setup.token_a.address,
        &Vec::new(&setup.env),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2904)")]
fn test_init_fee_out_of_range() {
    let setup = Setup::default();
    create_contract(
        &setup.env,
        &setup.admin,
        &setup.fee_destination,
        1 << 24,
        &setup.token_a.address,
        &setup.routers,
    );
}

#[test]
fn test_set_fee_percentage() {
    let setup = Setup::default();

    setup.contract.set_fee_percentage(&setup.admin, &30);
    assert_eq!(setup.contract.get_fee_percentage(), 30);

    // largest value fitting into 24 bits
    setup.contract.set_fee_percentage(&setup.admin, &((1 << 24) - 1));
    assert_eq!(setup.contract.get_fee_percentage(), (1 << 24) - 1);

    setup.contract.set_fee_percentage(&setup.admin, &0);
    assert_eq!(setup.contract.get_fee_percentage(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2904)")]
fn test_set_fee_percentage_out_of_range() {
    let setup = Setup::default();
    setup.contract.set_fee_percentage(&setup.admin, &(1 << 24));
}

#[test]
fn test_set_fee_address() {
    let setup = Setup::default();
    let new_destination = Address::generate(&setup.env);

    setup
        .contract
        .set_fee_address(&setup.admin, &new_destination);
    assert_eq!(setup.contract.get_fee_address(), new_destination);

    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&setup.token_a.address, &setup.token_b.address, 1_0000000, 1),
        ],
        &0,
        &None,
    );
    assert_eq!(setup.token_b.balance(&new_destination), 7500);
    assert_eq!(setup.token_b.balance(&setup.fee_destination), 0);
}

#[test]
fn test_grant_max_approvals() {
    let setup = Setup::default();

    for router in setup.routers.iter() {
        assert_eq!(
            setup
                .token_a
                .allowance(&setup.contract.address, &router.address),
            i128::MAX
        );
        assert_eq!(
            setup
                .token_b
                .allowance(&setup.contract.address, &router.address),
            i128::MAX
        );
    }

    // granting again leaves everything as is
    setup.contract.grant_max_approvals(
        &setup.admin,
        &vec![&setup.env, setup.token_a.address.clone()],
    );
    for router in setup.routers.iter() {
        assert_eq!(
            setup
                .token_a
                .allowance(&setup.contract.address, &router.address),
            i128::MAX
        );
    }
}

#[test]
fn test_revoke_approvals() {
    let setup = Setup::default();

    setup.contract.revoke_approvals(
        &setup.admin,
        &vec![&setup.env, setup.token_a.address.clone()],
    );
    for router in setup.routers.iter() {
        assert_eq!(
            setup
                .token_a
                .allowance(&setup.contract.address, &router.address),
            0
        );
        assert_eq!(
            setup
                .token_b
                .allowance(&setup.contract.address, &router.address),
            i128::MAX
        );
    }

    // revoking twice is fine
    setup.contract.revoke_approvals(
        &setup.admin,
        &vec![&setup.env, setup.token_a.address.clone()],
    );

    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    assert!(setup
        .contract
        .try_execute_swaps(
            &setup.user,
            &vec![
                &setup.env,
                setup.step(&setup.token_a.address, &setup.token_b.address, 1_0000000, 1),
            ],
            &0,
            &None,
        )
        .is_err());
}

#[test]
fn test_grant_max_approvals_rejected_by_token() {
    let setup = Setup::setup(&TestConfig::default());
    let faulty = setup.env.register(faulty_token::FaultyToken, ());

    let result = setup.contract.try_grant_max_approvals(
        &setup.admin,
        &vec![&setup.env, setup.token_a.address.clone(), faulty],
    );
    assert_eq!(result.unwrap_err(), Ok(Error::from_contract_error(2905)));

    // allowances granted before the failure are rolled back
    for router in setup.routers.iter() {
        assert_eq!(
            setup
                .token_a
                .allowance(&setup.contract.address, &router.address),
            0
        );
    }
}

#[test]
#[should_panic(expected = "Error(Contract, #2905)")]
fn test_revoke_approvals_rejected_by_token() {
    let setup = Setup::default();
    let faulty = setup.env.register(faulty_token::FaultyToken, ());
    setup
        .contract
        .revoke_approvals(&setup.admin, &vec![&setup.env, faulty]);
}

#[test]
fn test_missing_allowance() {
    let setup = Setup::setup(&TestConfig::default());

    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    assert!(setup
        .contract
        .try_execute_swaps(
            &setup.user,
            &vec![
                &setup.env,
                setup.step(&setup.token_a.address, &setup.token_b.address, 1_0000000, 3),
            ],
            &0,
            &None,
        )
        .is_err());
    assert_eq!(setup.token_a.balance(&setup.user), 1_0000000);
}

#[test]
fn test_execute_swaps_every_router() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();

    // native value funds the first step, every other step is chained
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    let report = setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&a, &b, 1_0000000, 1),
            setup.step(&b, &a, 0, 2),
            setup.step(&a, &b, 0, 3),
            setup.step(&b, &a, 0, 4),
        ],
        &0,
        &Some(1_0000000),
    );
    assert_eq!(report.token_out, a);
    assert_eq!(
        report.amounts_out,
        vec![&setup.env, 1_5000000, 2_2500000, 3_3750000, 5_0625000]
    );
    assert_eq!(report.total_output, 5_0625000);
    assert_eq!(report.fee_amount, 25312);
    assert_eq!(report.user_amount, 5_0599688);
    assert_eq!(setup.token_a.balance(&setup.user), 5_0599688);
    assert_eq!(setup.token_a.balance(&setup.fee_destination), 25312);

    // spend half of the output through a path funded by the caller
    let report = setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&a, &b, 2_5299844, 1),
            setup.step(&b, &a, 0, 2),
            setup.step(&a, &b, 0, 3),
        ],
        &8_5344280,
        &None,
    );
    assert_eq!(report.token_out, b);
    assert_eq!(
        report.amounts_out,
        vec![&setup.env, 3_7949766, 5_6924649, 8_5386973]
    );
    assert_eq!(report.fee_amount, 42693);
    assert_eq!(report.user_amount, 8_5344280);
    assert_eq!(setup.token_a.balance(&setup.user), 2_5299844);
    assert_eq!(setup.token_b.balance(&setup.user), 8_5344280);
    assert_eq!(setup.token_b.balance(&setup.fee_destination), 42693);

    // nothing stays on the aggregator
    assert_eq!(setup.token_a.balance(&setup.contract.address), 0);
    assert_eq!(setup.token_b.balance(&setup.contract.address), 0);
}

#[test]
fn test_native_value_without_explicit_amount() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();

    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    let report = setup.contract.execute_swaps(
        &setup.user,
        &vec![&setup.env, setup.step(&a, &b, 0, 2)],
        &0,
        &Some(1_0000000),
    );
    assert_eq!(report.amounts_out, vec![&setup.env, 1_5000000]);
    assert_eq!(setup.token_a.balance(&setup.user), 0);
    assert_eq!(setup.token_b.balance(&setup.user), 1_4992500);
}

#[test]
fn test_unspent_native_value_refunded() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();

    setup.token_a_admin_client.mint(&setup.user, &3_0000000);
    setup.contract.execute_swaps(
        &setup.user,
        &vec![&setup.env, setup.step(&a, &b, 1_0000000, 3)],
        &1_4992500,
        &Some(3_0000000),
    );
    assert_eq!(setup.token_a.balance(&setup.user), 2_0000000);
    assert_eq!(setup.token_b.balance(&setup.user), 1_4992500);
    assert_eq!(setup.token_a.balance(&setup.contract.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2008)")]
fn test_insufficient_native_value() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();

    setup.token_a_admin_client.mint(&setup.user, &3_0000000);
    setup.contract.execute_swaps(
        &setup.user,
        &vec![&setup.env, setup.step(&a, &b, 2_0000000, 1)],
        &0,
        &Some(1_0000000),
    );
}

#[test]
fn test_multiple_paths() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();

    setup.token_a_admin_client.mint(&setup.user, &3_0000000);
    let report = setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&a, &b, 1_0000000, 1),
            setup.step(&a, &b, 2_0000000, 4),
        ],
        &0,
        &None,
    );
    assert_eq!(report.amounts_out, vec![&setup.env, 1_5000000, 3_0000000]);
    assert_eq!(report.total_output, 4_5000000);
    assert_eq!(report.fee_amount, 22500);
    assert_eq!(report.user_amount, 4_4977500);
    assert_eq!(setup.token_a.balance(&setup.user), 0);
    assert_eq!(setup.token_b.balance(&setup.user), 4_4977500);
}

#[test]
fn test_dangling_output_returned() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();

    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    setup.token_b_admin_client.mint(&setup.user, &2_0000000);
    let report = setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&a, &b, 1_0000000, 2),
            setup.step(&b, &a, 2_0000000, 3),
        ],
        &0,
        &None,
    );
    // only the output in the terminal token is charged and credited
    assert_eq!(report.token_out, a);
    assert_eq!(report.total_output, 3_0000000);
    assert_eq!(report.fee_amount, 15000);
    assert_eq!(setup.token_a.balance(&setup.user), 2_9985000);
    assert_eq!(setup.token_b.balance(&setup.user), 1_5000000);
    assert_eq!(setup.token_b.balance(&setup.contract.address), 0);
}

#[test]
fn test_step_slippage() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);

    let mut step = setup.step(&a, &b, 1_0000000, 1);
    step.amount_out_min = 1_5000001;
    let result =
        setup
            .contract
            .try_execute_swaps(&setup.user, &vec![&setup.env, step.clone()], &0, &None);
    assert_eq!(result.unwrap_err(), Ok(Error::from_contract_error(2006)));

    step.amount_out_min = 1_5000000;
    let report = setup
        .contract
        .execute_swaps(&setup.user, &vec![&setup.env, step], &0, &None);
    assert_eq!(report.amounts_out, vec![&setup.env, 1_5000000]);
}

#[test]
fn test_insufficient_output() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    let steps = vec![&setup.env, setup.step(&a, &b, 1_0000000, 1)];

    // gross output covers the minimum, output after fee does not
    let result = setup
        .contract
        .try_execute_swaps(&setup.user, &steps, &1_5000000, &None);
    assert_eq!(result.unwrap_err(), Ok(Error::from_contract_error(2007)));
    assert_eq!(setup.token_a.balance(&setup.user), 1_0000000);

    let report = setup
        .contract
        .execute_swaps(&setup.user, &steps, &1_4992500, &None);
    assert_eq!(report.user_amount, 1_4992500);
}

#[test]
fn test_router_reported_amount_ignored() {
    let setup = Setup::default();
    let routers = vec![
        &setup.env,
        RouterConfig {
            kind: RouterKind::Echo,
            address: setup.env.register(lying_router::LyingRouter, ()),
        },
    ];
    let contract = create_contract(
        &setup.env,
        &setup.admin,
        &setup.fee_destination,
        5,
        &setup.token_a.address,
        &routers,
    );
    contract.grant_max_approvals(
        &setup.admin,
        &vec![&setup.env, setup.token_a.address.clone()],
    );

    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    let mut step = setup.step(&setup.token_a.address, &setup.token_b.address, 1_0000000, 1);
    step.amount_out_min = 1;
    let result = contract.try_execute_swaps(&setup.user, &vec![&setup.env, step], &0, &None);
    assert_eq!(result.unwrap_err(), Ok(Error::from_contract_error(2006)));
}

#[test]
#[should_panic(expected = "Error(Contract, #2901)")]
fn test_unsupported_swap_type() {
    let setup = Setup::default();
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&setup.token_a.address, &setup.token_b.address, 1_0000000, 5),
        ],
        &0,
        &None,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #307)")]
fn test_empty_path() {
    let setup = Setup::default();
    setup
        .contract
        .execute_swaps(&setup.user, &Vec::new(&setup.env), &0, &None);
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn test_too_many_steps() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();

    let mut steps = vec![&setup.env, setup.step(&a, &b, 1_0000000, 1)];
    for i in 0..16 {
        if i % 2 == 0 {
            steps.push_back(setup.step(&b, &a, 0, 1));
        } else {
            steps.push_back(setup.step(&a, &b, 0, 1));
        }
    }
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    setup.contract.execute_swaps(&setup.user, &steps, &0, &None);
}

#[test]
#[should_panic(expected = "Error(Contract, #309)")]
fn test_chained_first_step() {
    let setup = Setup::default();
    setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&setup.token_a.address, &setup.token_b.address, 0, 1),
        ],
        &0,
        &None,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #309)")]
fn test_chained_first_step_not_native() {
    let setup = Setup::default();
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&setup.token_b.address, &setup.token_a.address, 0, 1),
        ],
        &0,
        &Some(1_0000000),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #310)")]
fn test_chained_token_mismatch() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();

    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&a, &b, 1_0000000, 1),
            setup.step(&a, &b, 0, 2),
        ],
        &0,
        &None,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #311)")]
fn test_swap_same_token() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();

    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    setup.contract.execute_swaps(
        &setup.user,
        &vec![&setup.env, setup.step(&a, &a, 1_0000000, 1)],
        &0,
        &None,
    );
}

#[test]
fn test_zero_fee() {
    let setup = Setup::new_with_config(&TestConfig {
        fee_percentage: 0,
        ..TestConfig::default()
    });
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);

    let report = setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&setup.token_a.address, &setup.token_b.address, 1_0000000, 4),
        ],
        &1_5000000,
        &None,
    );
    assert_eq!(report.fee_amount, 0);
    assert_eq!(report.user_amount, 1_5000000);
    assert_eq!(setup.token_b.balance(&setup.fee_destination), 0);
}

#[test]
fn test_full_fee() {
    let setup = Setup::new_with_config(&TestConfig {
        fee_percentage: 10_000,
        ..TestConfig::default()
    });
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);

    let report = setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&setup.token_a.address, &setup.token_b.address, 1_0000000, 1),
        ],
        &0,
        &None,
    );
    assert_eq!(report.fee_amount, 1_5000000);
    assert_eq!(report.user_amount, 0);
    assert_eq!(setup.token_b.balance(&setup.user), 0);
    assert_eq!(setup.token_b.balance(&setup.fee_destination), 1_5000000);
}

#[test]
#[should_panic(expected = "Error(Contract, #2904)")]
fn test_fee_above_output() {
    let setup = Setup::new_with_config(&TestConfig {
        fee_percentage: 10_001,
        ..TestConfig::default()
    });
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&setup.token_a.address, &setup.token_b.address, 1_0000000, 1),
        ],
        &0,
        &None,
    );
}

#[test]
fn test_fee_rounded_down() {
    let setup = Setup::new_with_config(&TestConfig {
        fee_percentage: 30,
        rate_num: 1,
        rate_den: 1,
    });
    setup.token_a_admin_client.mint(&setup.user, &333);

    let report = setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&setup.token_a.address, &setup.token_b.address, 333, 1),
        ],
        &0,
        &None,
    );
    // 333 * 30 / 10_000 = 0.999
    assert_eq!(report.fee_amount, 0);
    assert_eq!(report.user_amount, 333);
}

#[test]
fn test_paths_executed_event() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();

    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&a, &b, 1_0000000, 1),
            setup.step(&b, &a, 0, 3),
        ],
        &0,
        &None,
    );
    assert_eq!(
        vec![&setup.env, setup.env.events().all().last().unwrap()],
        vec![
            &setup.env,
            (
                setup.contract.address.clone(),
                (
                    Symbol::new(&setup.env, "paths_executed"),
                    setup.user.clone()
                )
                    .into_val(&setup.env),
                (
                    a,
                    vec![&setup.env, 1_5000000u128, 2_2500000u128],
                    2_2500000u128,
                    11250u128,
                    2_2488750u128,
                )
                    .into_val(&setup.env),
            ),
        ]
    );
}

#[test]
fn test_report_encoding_ends_with_user_amount() {
    let setup = Setup::default();
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);

    let report = setup.contract.execute_swaps(
        &setup.user,
        &vec![
            &setup.env,
            setup.step(&setup.token_a.address, &setup.token_b.address, 1_0000000, 1),
        ],
        &0,
        &None,
    );
    let encoded: Val = report.into_val(&setup.env);
    let entries = Map::<Symbol, Val>::try_from_val(&setup.env, &encoded).unwrap();
    assert_eq!(
        entries.keys().last().unwrap(),
        Symbol::new(&setup.env, "user_amount")
    );
    assert_eq!(
        u128::try_from_val(&setup.env, &entries.values().last().unwrap()).unwrap(),
        1_4992500
    );
}

#[test]
fn test_amount_above_token_range() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    let too_large = i128::MAX as u128 + 1;

    let result = setup.contract.try_execute_swaps(
        &setup.user,
        &vec![&setup.env, setup.step(&a, &b, too_large, 1)],
        &0,
        &None,
    );
    assert_eq!(result.unwrap_err(), Ok(Error::from_contract_error(510)));

    let result = setup.contract.try_execute_swaps(
        &setup.user,
        &vec![&setup.env, setup.step(&a, &b, 0, 1)],
        &0,
        &Some(too_large),
    );
    assert_eq!(result.unwrap_err(), Ok(Error::from_contract_error(510)));
    assert_eq!(setup.token_a.balance(&setup.user), 1_0000000);
}

#[test]
fn test_kill_swaps() {
    let setup = Setup::default();
    let a = setup.token_a.address.clone();
    let b = setup.token_b.address.clone();
    setup.token_a_admin_client.mint(&setup.user, &1_0000000);
    let steps = vec![&setup.env, setup.step(&a, &b, 1_0000000, 1)];

    setup.contract.kill_swaps(&setup.admin);
    assert_eq!(setup.contract.get_is_killed_swaps(), true);
    assert_eq!(
        setup
            .contract
            .try_execute_swaps(&setup.user, &steps, &0, &None)
            .unwrap_err(),
        Ok(Error::from_contract_error(2903))
    );

    setup.contract.unkill_swaps(&setup.admin);
    assert_eq!(setup.contract.get_is_killed_swaps(), false);
    setup
        .contract
        .execute_swaps(&setup.user, &steps, &0, &None);
    assert_eq!(setup.token_b.balance(&setup.user), 1_4992500);
}
