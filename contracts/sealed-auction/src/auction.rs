use crate::traits::SealedAuctionTrait;
use settlement_core::{
    event, AuctionConfig, AuctionEngine, AuctionError, AuctionState, Bid, FeePolicy, Ledger,
    SealedBidClient,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

#[contract]
pub struct SealedAuctionContract;

fn ensure_revealing(env: &Env) -> Result<(), AuctionError> {
    if Ledger::state(env) != AuctionState::Revealing {
        return Err(AuctionError::AuctionNotRevealing);
    }
    Ok(())
}

// Escrowed funds must already sit in this contract when the bid is recorded
fn accept_revealed(
    env: &Env,
    config: &AuctionConfig,
    bidder: &Address,
    amount: i128,
    escrow: &Address,
) -> Result<(), AuctionError> {
    AuctionEngine::ensure_funded(env, config, amount)?;

    let bid = AuctionEngine::record_bid(env, config, bidder, amount, Some(escrow.clone()))?;
    event::bid_revealed(env, bidder, bid.net_amount);

    Ok(())
}

#[contractimpl]
impl SealedAuctionTrait for SealedAuctionContract {
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
        seller.require_auth();
        AuctionEngine::initiate(&env, &seller, payment)
    }

    fn reveal_bid(
        env: Env,
        escrow: Address,
        bidder: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), AuctionError> {
        escrow.require_auth();
        bidder.require_auth(); // Signed as part of the owner's escrow reveal

        let config = Ledger::config(&env)?;
        ensure_revealing(&env)?;

        if token != config.token {
            return Err(AuctionError::DisclosureMismatch);
        }
        AuctionEngine::check_new_bid(&env, &config, &bidder, amount)?;

        accept_revealed(&env, &config, &bidder, amount, &escrow)
    }

    fn record_bid(
        env: Env,
        caller: Address,
        amount: i128,
        bidder: Address,
        source: Address,
    ) -> Result<(), AuctionError> {
        caller.require_auth();

        let config = Ledger::config(&env)?;
        AuctionEngine::ensure_operator(&env, &config, &caller)?;
        ensure_revealing(&env)?;

        if Ledger::has_bid(&env, &bidder) {
            return Err(AuctionError::DuplicateBidder);
        }

        let disclosure = match SealedBidClient::new(&env, &source).try_surrender() {
            Ok(Ok(disclosure)) => disclosure,
            Err(Ok(error)) => return Err(error),
            _ => return Err(AuctionError::RevealRejected),
        };

        // `amount` is relayed net of the bidding fee
        let net = FeePolicy::from(&config).net_bid(disclosure.amount)?;
        if disclosure.owner != bidder || disclosure.token != config.token || net != amount {
            log!(&env, "disclosure of {} does not match", source.clone());
            return Err(AuctionError::DisclosureMismatch);
        }

        accept_revealed(&env, &config, &bidder, disclosure.amount, &source)
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
        let outcome = AuctionEngine::calculate_winning_bid(&env, &caller)?;
        Ok(outcome.winner)
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
        seller.require_auth();
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
