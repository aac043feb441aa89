use settlement_core::{AuctionConfig, AuctionError, AuctionState, Bid};
use soroban_sdk::{Address, Env, Vec};

/// Interface for the sealed-bid auction contract. Bids only arrive
/// from sealed bid escrows while the auction is revealing.
pub trait SealedAuctionTrait {
    fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        auction_fee: i128,
        bidding_fee: i128,
    ) -> Result<(), AuctionError>;

    fn initiate(env: Env, seller: Address, payment: i128) -> Result<(), AuctionError>;

    /// Invoked by an escrow revealing itself on behalf of `bidder`. The
    /// escrow has already moved `amount` of `token` to this contract.
    fn reveal_bid(
        env: Env,
        escrow: Address,
        bidder: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), AuctionError>;

    /// Seller or admin relays the reveal of `source`, an escrow designated
    /// to this auction. The disclosure must belong to `bidder` and come to
    /// `amount` once the bidding fee is taken.
    fn record_bid(
        env: Env,
        caller: Address,
        amount: i128,
        bidder: Address,
        source: Address,
    ) -> Result<(), AuctionError>;

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
