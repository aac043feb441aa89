use crate::traits::OpenAuctionTrait;
use settlement_core::{
    distribution, event, AuctionConfig, AuctionEngine, AuctionError, AuctionState, Bid, Ledger,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct OpenAuctionContract;

#[contractimpl]
impl OpenAuctionTrait for OpenAuctionContract {
    fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        auction_fee: i128,
        bidding_fee: i128,
    ) -> Result<(), AuctionError> {
        admin.require_auth();
        AuctionEngine::initialize(&env, admin, token, auction_fee, bidding_fee)
    }

    fn initiate(env: Env, seller: Address, payment: i128) -> Result<(), AuctionError> {
        seller.require_auth(); // Caller becomes the seller
        AuctionEngine::initiate(&env, &seller, payment)
    }

    /// Places a visible bid. The first bid opens the bidding phase.
    fn place_bid(env: Env, bidder: Address, payment: i128) -> Result<(), AuctionError> {
        bidder.require_auth();

        let config = Ledger::config(&env)?;

        let state = Ledger::state(&env);
        if !state.accepts_bids() {
            return match state {
                AuctionState::Created => Err(AuctionError::NotInitiated),
                _ => Err(AuctionError::BiddingClosed),
            };
        }

        // Reject before any value moves
        AuctionEngine::check_new_bid(&env, &config, &bidder, payment)?;

        distribution::transfer_to_contract(&env, &config.token, &bidder, &payment);

        let bid = AuctionEngine::record_bid(&env, &config, &bidder, payment, None)?;

        if state == AuctionState::Initiated {
            AuctionEngine::move_to(&env, state, AuctionState::AcceptingBids);
        }

        event::bid_placed(&env, &bidder, bid.net_amount);

        Ok(())
    }

    fn transition_to_state(
        env: Env,
        caller: Address,
        target: AuctionState,
    ) -> Result<(), AuctionError> {
        caller.require_auth();
        AuctionEngine::transition_to_state(&env, &caller, target)
    }

    fn calculate_winning_bid(env: Env, caller: Address) -> Result<Address, AuctionError> {
        caller.require_auth();
        AuctionEngine::calculate_winning_bid(&env, &caller).map(|outcome| outcome.winner)
    }

    fn refund_losing_bid(env: Env, bidder: Address) -> Result<i128, AuctionError> {
        bidder.require_auth();
        AuctionEngine::refund_losing_bid(&env, &bidder)
    }

    fn collect_payout(env: Env, seller: Address) -> Result<i128, AuctionError> {
        seller.require_auth();
        AuctionEngine::collect_payout(&env, &seller)
    }

    fn cancel(env: Env, seller: Address) -> Result<(), AuctionError> {
        seller.require_auth(); // Only seller can cancel
        AuctionEngine::cancel(&env, &seller)
    }

    fn get_refund_from_cancelled_auction(env: Env, bidder: Address) -> Result<i128, AuctionError> {
        bidder.require_auth();
        AuctionEngine::refund_cancelled_bid(&env, &bidder)
    }

    fn collect_fees(env: Env, admin: Address) -> Result<i128, AuctionError> {
        admin.require_auth();
        AuctionEngine::collect_fees(&env, &admin)
    }

    fn get_config(env: Env) -> Result<AuctionConfig, AuctionError> {
        Ledger::config(&env)
    }

    fn get_state(env: Env) -> AuctionState {
        Ledger::state(&env)
    }

    fn get_seller(env: Env) -> Option<Address> {
        Ledger::seller(&env)
    }

    fn get_total_fees(env: Env) -> i128 {
        Ledger::total_fees(&env)
    }

    fn get_custody(env: Env) -> i128 {
        Ledger::custody(&env)
    }

    fn get_bid(env: Env, bidder: Address) -> Option<Bid> {
        Ledger::bid(&env, &bidder)
    }

    fn get_bidders(env: Env) -> Vec<Address> {
        Ledger::bidders(&env)
    }

    fn get_winner(env: Env) -> Option<Address> {
        Ledger::outcome(&env).map(|outcome| outcome.winner)
    }

    fn get_winning_amount(env: Env) -> Option<i128> {
        Ledger::outcome(&env).map(|outcome| outcome.amount)
    }

    fn is_paid_out(env: Env) -> bool {
        Ledger::is_paid_out(&env)
    }
}
