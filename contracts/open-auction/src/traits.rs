use settlement_core::{AuctionConfig, AuctionError, AuctionState, Bid};
use soroban_sdk::{Address, Env, Vec};

/// Interface for the open-bid auction contract.
pub trait OpenAuctionTrait {
    /// Fixes the token and fee policy of this auction.
    fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        auction_fee: i128,
        bidding_fee: i128,
    ) -> Result<(), AuctionError>;

    /// Opens the auction; `seller` pays the entry fee out of `payment`.
    fn initiate(env: Env, seller: Address, payment: i128) -> Result<(), AuctionError>;

    /// Deposits `payment` as the bidder's one and only bid.
    fn place_bid(env: Env, bidder: Address, payment: i128) -> Result<(), AuctionError>;

    fn transition_to_state(
        env: Env,
        caller: Address,
        target: AuctionState,
    ) -> Result<(), AuctionError>;

    fn calculate_winning_bid(env: Env, caller: Address) -> Result<Address, AuctionError>;

    fn refund_losing_bid(env: Env, bidder: Address) -> Result<i128, AuctionError>;

    fn collect_payout(env: Env, seller: Address) -> Result<i128, AuctionError>;

    fn cancel(env: Env, seller: Address) -> Result<(), AuctionError>;

    fn get_refund_from_cancelled_auction(env: Env, bidder: Address) -> Result<i128, AuctionError>;

    /// Sweeps the fees retained by a closed or cancelled auction to the admin.
    fn collect_fees(env: Env, admin: Address) -> Result<i128, AuctionError>;

    fn get_config(env: Env) -> Result<AuctionConfig, AuctionError>;

    fn get_state(env: Env) -> AuctionState;

    fn get_seller(env: Env) -> Option<Address>;

    fn get_total_fees(env: Env) -> i128;

    fn get_custody(env: Env) -> i128;

    fn get_bid(env: Env, bidder: Address) -> Option<Bid>;

    fn get_bidders(env: Env) -> Vec<Address>;

    fn get_winner(env: Env) -> Option<Address>;

    fn get_winning_amount(env: Env) -> Option<i128>;

    fn is_paid_out(env: Env) -> bool;
}
