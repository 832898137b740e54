#![cfg(test)]

extern crate std;

use soroban_sdk::{testutils::Address as _, token, vec, Address, Env, Vec};

use crate::{DepositConnector, DepositConnectorClient, SwapHop};


mod events;

use mock_router::{MockRouter, MockRouterClient};
use mock_vault::{MockDelayVault, MockDelayVaultClient};

/// One whole token at 7 decimals.
pub const UNIT: i128 = 10_000_000;
pub const POOL_FEE: u32 = 3000;
pub const ROUTER_LIQUIDITY: i128 = 100_000 * UNIT;
pub const WALLET: i128 = 1_000_000 * UNIT;

fn create_token<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac = e.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(e, &sac.address()),
        token::StellarAssetClient::new(e, &sac.address()),
    )
}

pub struct ConnectorTest<'a> {
    pub env: Env,
    pub owner: Address,
    pub user: Address,
    pub base: token::Client<'a>,
    pub settlement: token::Client<'a>,
    pub router: MockRouterClient<'a>,
    pub vault: MockDelayVaultClient<'a>,
    pub connector: DepositConnectorClient<'a>,
}

impl<'a> ConnectorTest<'a> {
    /// Connector wired to a router that swaps base into settlement at 1:2.
    pub fn setup(fee_bps: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let user = Address::generate(&env);
        let admin = Address::generate(&env);

        let (base, base_admin) = create_token(&env, &admin);
        let (settlement, settlement_admin) = create_token(&env, &admin);

        let router_id = env.register(MockRouter, (2_i128, 1_i128));
        let vault_id = env.register(MockDelayVault, (settlement.address.clone(),));
        let connector_id = env.register(
            DepositConnector,
            (
                owner.clone(),
                base.address.clone(),
                settlement.address.clone(),
                router_id.clone(),
                vault_id.clone(),
                POOL_FEE,
                fee_bps,
            ),
        );

        settlement_admin.mint(&router_id, &ROUTER_LIQUIDITY);
        for wallet in [&owner, &user] {
            base_admin.mint(wallet, &WALLET);
            settlement_admin.mint(wallet, &WALLET);
        }

        ConnectorTest {
            router: MockRouterClient::new(&env, &router_id),
            vault: MockDelayVaultClient::new(&env, &vault_id),
            connector: DepositConnectorClient::new(&env, &connector_id),
            env,
            owner,
            user,
            base,
            settlement,
        }
    }

    pub fn approve(&self, from: &Address, token: &token::Client, amount: i128) {
        let expiration = self.env.ledger().sequence() + 1_000;
        token.approve(from, &self.connector.address, &amount, &expiration);
    }

    /// Single hop from base straight into settlement.
    pub fn route(&self) -> Vec<SwapHop> {
        vec![
            &self.env,
            SwapHop {
                token: self.settlement.address.clone(),
                fee: POOL_FEE,
            },
        ]
    }

    pub fn no_route(&self) -> Vec<SwapHop> {
        Vec::new(&self.env)
    }
}
