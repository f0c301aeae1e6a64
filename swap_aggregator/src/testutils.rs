#![cfg(test)]
extern crate std;
use crate::{RouterConfig, RouterKind, SwapAggregatorClient, SwapStep};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{vec, Address, Env, Vec};

// Two token pool paying out `amount_in * rate_num / rate_den` of the other token.
// Input is expected to be transferred to the pool before `swap` is called.
pub mod venue_pool {
    use soroban_sdk::token::TokenClient as SorobanTokenClient;
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[derive(Clone)]
    #[contracttype]
    enum DataKey {
        TokenA,
        TokenB,
        RateNum,
        RateDen,
    }

    #[contract]
    pub struct VenuePool;

    #[contractimpl]
    impl VenuePool {
        pub fn __constructor(
            e: Env,
            token_a: Address,
            token_b: Address,
            rate_num: u128,
            rate_den: u128,
        ) {
            e.storage().instance().set(&DataKey::TokenA, &token_a);
            e.storage().instance().set(&DataKey::TokenB, &token_b);
            e.storage().instance().set(&DataKey::RateNum, &rate_num);
            e.storage().instance().set(&DataKey::RateDen, &rate_den);
        }

        pub fn swap(e: Env, token_in: Address, amount_in: u128, to: Address) -> u128 {
            let token_a: Address = e.storage().instance().get(&DataKey::TokenA).unwrap();
            let token_b: Address = e.storage().instance().get(&DataKey::TokenB).unwrap();
            let rate_num: u128 = e.storage().instance().get(&DataKey::RateNum).unwrap();
            let rate_den: u128 = e.storage().instance().get(&DataKey::RateDen).unwrap();

            let token_out = if token_in == token_a {
                token_b
            } else if token_in == token_b {
                token_a
            } else {
                panic!("unknown token")
            };
            let amount_out = amount_in * rate_num / rate_den;
            SorobanTokenClient::new(&e, &token_out).transfer(
                &e.current_contract_address(),
                &to,
                &(amount_out as i128),
            );
            amount_out
        }
    }
}

// Moves the router input from `sender` into `pool` with the allowance granted to the router.
fn pull_into_pool(e: &Env, token: &Address, sender: &Address, pool: &Address, amount: u128) {
    SorobanTokenClient::new(e, token).transfer_from(
        &e.current_contract_address(),
        sender,
        pool,
        &(amount as i128),
    );
}

pub mod sync_router {
    use crate::{SyncRouter, SyncSwapPath};
    use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

    #[contract]
    pub struct MockSyncRouter;

    #[contractimpl]
    impl SyncRouter for MockSyncRouter {
        fn swap(
            e: Env,
            sender: Address,
            paths: Vec<SyncSwapPath>,
            _amount_out_min: u128,
            _deadline: u64,
        ) -> u128 {
            sender.require_auth();
            let mut amount_out = 0;
            for path in paths.iter() {
                let mut amount = path.amount_in;
                let mut first = true;
                for hop in path.steps.iter() {
                    if first {
                        super::pull_into_pool(&e, &path.token_in, &sender, &hop.pool, amount);
                        first = false;
                    }
                    amount = super::venue_pool::VenuePoolClient::new(&e, &hop.pool).swap(
                        &hop.token_in,
                        &amount,
                        &hop.to,
                    );
                }
                amount_out = amount;
            }
            amount_out
        }
    }
}

pub mod horizon_router {
    use crate::{ExactInputSingleParams, HorizonRouter};
    use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};

    #[contract]
    pub struct MockHorizonRouter;

    #[contractimpl]
    impl MockHorizonRouter {
        pub fn __constructor(e: Env, pool: Address) {
            e.storage().instance().set(&symbol_short!("pool"), &pool);
        }
    }

    #[contractimpl]
    impl HorizonRouter for MockHorizonRouter {
        fn exact_input_single(e: Env, sender: Address, params: ExactInputSingleParams) -> u128 {
            sender.require_auth();
            let pool: Address = e.storage().instance().get(&symbol_short!("pool")).unwrap();
            super::pull_into_pool(&e, &params.token_in, &sender, &pool, params.amount_in);
            super::venue_pool::VenuePoolClient::new(&e, &pool).swap(
                &params.token_in,
                &params.amount_in,
                &params.recipient,
            )
        }
    }
}

pub mod echo_router {
    use crate::EchoRouter;
    use soroban_sdk::{contract, contractimpl, symbol_short, vec, Address, Env, Vec};

    #[contract]
    pub struct MockEchoRouter;

    #[contractimpl]
    impl MockEchoRouter {
        pub fn __constructor(e: Env, pool: Address) {
            e.storage().instance().set(&symbol_short!("pool"), &pool);
        }
    }

    #[contractimpl]
    impl EchoRouter for MockEchoRouter {
        fn swap_exact_tokens_for_tokens(
            e: Env,
            sender: Address,
            amount_in: u128,
            _amount_out_min: u128,
            path: Vec<Address>,
            to: Address,
            _deadline: u64,
        ) -> Vec<u128> {
            sender.require_auth();
            let pool: Address = e.storage().instance().get(&symbol_short!("pool")).unwrap();
            let token_in = path.get(0).unwrap();
            super::pull_into_pool(&e, &token_in, &sender, &pool, amount_in);
            let amount_out = super::venue_pool::VenuePoolClient::new(&e, &pool).swap(
                &token_in,
                &amount_in,
                &to,
            );
            vec![&e, amount_in, amount_out]
        }
    }
}

pub mod leetswap_router {
    use crate::{LeetRoute, LeetSwapRouter};
    use soroban_sdk::{contract, contractimpl, vec, Address, Env, Vec};

    #[contract]
    pub struct MockLeetSwapRouter;

    #[contractimpl]
    impl LeetSwapRouter for MockLeetSwapRouter {
        fn swap_exact_tokens_for_tokens(
            e: Env,
            sender: Address,
            amount_in: u128,
            _amount_out_min: u128,
            routes: Vec<LeetRoute>,
            to: Address,
            _deadline: u64,
        ) -> Vec<u128> {
            sender.require_auth();
            let route = routes.get(0).unwrap();
            super::pull_into_pool(&e, &route.from, &sender, &route.pair, amount_in);
            let amount_out = super::venue_pool::VenuePoolClient::new(&e, &route.pair).swap(
                &route.from,
                &amount_in,
                &to,
            );
            vec![&e, amount_in, amount_out]
        }
    }
}

// Router reporting a large output without delivering anything.
pub mod lying_router {
    use crate::EchoRouter;
    use soroban_sdk::{contract, contractimpl, vec, Address, Env, Vec};

    #[contract]
    pub struct LyingRouter;

    #[contractimpl]
    impl EchoRouter for LyingRouter {
        fn swap_exact_tokens_for_tokens(
            e: Env,
            _sender: Address,
            amount_in: u128,
            _amount_out_min: u128,
            _path: Vec<Address>,
            _to: Address,
            _deadline: u64,
        ) -> Vec<u128> {
            vec![&e, amount_in, u128::MAX]
        }
    }
}

// Token rejecting every approval.
pub mod faulty_token {
    use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env};

    #[contracterror]
    #[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
    #[repr(u32)]
    pub enum FaultyTokenError {
        ApproveRejected = 1,
    }

    #[contract]
    pub struct FaultyToken;

    #[contractimpl]
    impl FaultyToken {
        pub fn approve(
            e: Env,
            _from: Address,
            _spender: Address,
            _amount: i128,
            _expiration_ledger: u32,
        ) {
            panic_with_error!(&e, FaultyTokenError::ApproveRejected);
        }

        pub fn allowance(_e: Env, _from: Address, _spender: Address) -> i128 {
            0
        }
    }
}

pub(crate) struct TestConfig {
    pub(crate) fee_percentage: u32,
    // pool price of token_a in token_b and vice versa, as numerator / denominator
    pub(crate) rate_num: u128,
    pub(crate) rate_den: u128,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            fee_percentage: 5, // 0.05%
            rate_num: 3,
            rate_den: 2,
        }
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) admin: Address,
    pub(crate) user: Address,
    pub(crate) fee_destination: Address,
    pub(crate) contract: SwapAggregatorClient<'a>,
    pub(crate) pool: Address,
    pub(crate) routers: Vec<RouterConfig>,
    // registered as the native token of the aggregator
    pub(crate) token_a: SorobanTokenClient<'a>,
    pub(crate) token_a_admin_client: SorobanTokenAdminClient<'a>,
    pub(crate) token_b: SorobanTokenClient<'a>,
    pub(crate) token_b_admin_client: SorobanTokenAdminClient<'a>,
}

impl Default for Setup<'_> {
    // Create setup from default config
    fn default() -> Self {
        let default_config = TestConfig::default();
        Self::new_with_config(&default_config)
    }
}

impl Setup<'_> {
    pub(crate) fn new_with_config(config: &TestConfig) -> Self {
        let setup = Self::setup(config);
        setup.contract.grant_max_approvals(
            &setup.admin,
            &vec![
                &setup.env,
                setup.token_a.address.clone(),
                setup.token_b.address.clone(),
            ],
        );
        setup
    }

    // Contract deployed with every router registered and no allowance granted yet.
    pub(crate) fn setup(config: &TestConfig) -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let user = Address::generate(&e);
        let fee_destination = Address::generate(&e);

        let token_a = create_token_contract(&e, &admin);
        let token_b = create_token_contract(&e, &admin);

        let token_a_admin_client = get_token_admin_client(&e, &token_a.address.clone());
        let token_b_admin_client = get_token_admin_client(&e, &token_b.address.clone());

        let pool = e.register(
            venue_pool::VenuePool,
            (
                token_a.address.clone(),
                token_b.address.clone(),
                config.rate_num,
                config.rate_den,
            ),
        );
        token_a_admin_client.mint(&pool, &1_000_000_000_0000000);
        token_b_admin_client.mint(&pool, &1_000_000_000_0000000);

        let routers = vec![
            &e,
            RouterConfig {
                kind: RouterKind::Sync,
                address: e.register(sync_router::MockSyncRouter, ()),
            },
            RouterConfig {
                kind: RouterKind::Horizon,
                address: e.register(horizon_router::MockHorizonRouter, (pool.clone(),)),
            },
            RouterConfig {
                kind: RouterKind::Echo,
                address: e.register(echo_router::MockEchoRouter, (pool.clone(),)),
            },
            RouterConfig {
                kind: RouterKind::LeetSwap,
                address: e.register(leetswap_router::MockLeetSwapRouter, ()),
            },
        ];

        let contract = create_contract(
            &e,
            &admin,
            &fee_destination,
            config.fee_percentage,
            &token_a.address,
            &routers,
        );

        Self {
            env: e,
            admin,
            user,
            fee_destination,
            contract,
            pool,
            routers,
            token_a,
            token_a_admin_client,
            token_b,
            token_b_admin_client,
        }
    }

    pub(crate) fn step(
        &self,
        token_in: &Address,
        token_out: &Address,
        amount_in: u128,
        swap_type: u32,
    ) -> SwapStep {
        SwapStep {
            pool_address: self.pool.clone(),
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            amount_in,
            amount_out_min: 0,
            fee_tier: 3000,
            swap_type,
        }
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub(crate) fn get_token_admin_client<'a>(
    e: &Env,
    address: &Address,
) -> SorobanTokenAdminClient<'a> {
    SorobanTokenAdminClient::new(e, address)
}

pub fn create_contract<'a>(
    e: &Env,
    admin: &Address,
    fee_destination: &Address,
    fee_percentage: u32,
    native_token: &Address,
    routers: &Vec<RouterConfig>,
) -> SwapAggregatorClient<'a> {
    let contract = SwapAggregatorClient::new(
        e,
        &e.register(
            crate::SwapAggregator,
            (
                admin,
                fee_destination,
                fee_percentage,
                native_token,
                routers.clone(),
            ),
        ),
    );
    contract
}
