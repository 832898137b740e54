use soroban_sdk::{contractclient, contracttype, Address, Env, Vec};

/// One leg of a swap route: the token it ends in and the pool fee tier used.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapHop {
    pub token: Address,
    pub fee: u32,
}

/// Multi-hop exchange router.
///
/// Pulls `amount_in` of `token_in` from `sender` (which must have approved the
/// router), walks `hops` in order and pays the final token to `recipient`.
/// Fails when the output would be below `amount_out_min`.
#[contractclient(name = "ExchangeRouterClient")]
pub trait ExchangeRouter {
    fn swap_multi_hop(
        e: Env,
        sender: Address,
        token_in: Address,
        amount_in: i128,
        hops: Vec<SwapHop>,
        amount_out_min: i128,
        recipient: Address,
    ) -> i128;
}
