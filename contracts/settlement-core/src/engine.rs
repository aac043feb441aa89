use soroban_sdk::{log, Address, Env};

use crate::{
    distribution,
    errors::AuctionError,
    event,
    fees::FeePolicy,
    ledger::{Ledger, SettlementLock},
    types::*,
};

/// Settlement state machine shared by the open-bid and sealed-bid auctions.
/// Bid intake differs between the two; everything else lives here.
pub struct AuctionEngine;

impl AuctionEngine {
    pub fn initialize(
        env: &Env,
        admin: Address,
        token: Address,
        auction_fee: i128,
        bidding_fee: i128,
    ) -> Result<(), AuctionError> {
        if Ledger::has_config(env) {
            return Err(AuctionError::AlreadyInitialized);
        }

        FeePolicy::new(auction_fee, bidding_fee)?;

        Ledger::save_config(
            env,
            &AuctionConfig {
                admin,
                token,
                auction_fee,
                bidding_fee,
            },
        );
        Ledger::save_state(env, AuctionState::Created);

        log!(env, "auction fees {} / {}", auction_fee, bidding_fee);
        Ok(())
    }

    /// Created -> Initiated. The caller becomes the seller and pays the entry fee.
    pub fn initiate(env: &Env, seller: &Address, payment: i128) -> Result<(), AuctionError> {
        let config = Ledger::config(env)?;

        if Ledger::state(env) != AuctionState::Created {
            return Err(AuctionError::AlreadyInitiated);
        }

        let policy = FeePolicy::from(&config);
        policy.check_entry(payment)?;

        // Only the fee itself is taken into custody
        let fee = policy.required_entry();
        distribution::transfer_to_contract(env, &config.token, seller, &fee);
        Ledger::credit(env, fee)?;
        Ledger::add_fee(env, fee)?;
        Ledger::save_seller(env, seller);

        Self::move_to(env, AuctionState::Created, AuctionState::Initiated);
        event::auction_initiated(env, seller, fee);

        Ok(())
    }

    /// Validates a bid before any value moves. Returns its net amount.
    pub fn check_new_bid(
        env: &Env,
        config: &AuctionConfig,
        bidder: &Address,
        gross: i128,
    ) -> Result<i128, AuctionError> {
        let net = FeePolicy::from(config).net_bid(gross)?;

        if Ledger::has_bid(env, bidder) {
            return Err(AuctionError::DuplicateBidder);
        }

        Ok(net)
    }

    /// Records a bid whose gross amount is already held by the auction.
    pub fn record_bid(
        env: &Env,
        config: &AuctionConfig,
        bidder: &Address,
        gross: i128,
        source: Option<Address>,
    ) -> Result<Bid, AuctionError> {
        let net = Self::check_new_bid(env, config, bidder, gross)?;

        let bid = Bid {
            bidder: bidder.clone(),
            gross_amount: gross,
            net_amount: net,
            settled: false,
            source,
        };

        Ledger::insert_bid(env, &bid);
        Ledger::credit(env, gross)?;
        Ledger::add_fee(env, config.bidding_fee)?;

        log!(env, "bid recorded for {}: gross {} net {}", bidder.clone(), gross, net);
        Ok(bid)
    }

    /// The auction must already hold `amount` beyond what it custodies.
    pub fn ensure_funded(
        env: &Env,
        config: &AuctionConfig,
        amount: i128,
    ) -> Result<(), AuctionError> {
        let owed = Ledger::custody(env)
            .checked_add(amount)
            .ok_or(AuctionError::Overflow)?;

        if distribution::contract_balance(env, &config.token) < owed {
            return Err(AuctionError::UnfundedReveal);
        }
        Ok(())
    }

    pub fn transition_to_state(
        env: &Env,
        caller: &Address,
        target: AuctionState,
    ) -> Result<(), AuctionError> {
        let config = Ledger::config(env)?;
        Self::ensure_operator(env, &config, caller)?;

        let state = Ledger::state(env);
        if !state.can_transition_to(target) {
            return Err(AuctionError::InvalidTransition);
        }

        Self::move_to(env, state, target);
        Ok(())
    }

    /// Picks the bid with the greatest net amount. On a tie the bid recorded
    /// first wins. The winning bid is reserved for the seller's payout.
    pub fn calculate_winning_bid(env: &Env, caller: &Address) -> Result<Outcome, AuctionError> {
        let config = Ledger::config(env)?;
        Self::ensure_operator(env, &config, caller)?;

        if Ledger::outcome(env).is_some() {
            return Err(AuctionError::AlreadyCalculated);
        }

        let state = Ledger::state(env);
        if !state.is_bidding_closed() {
            return Err(AuctionError::BiddingNotClosed);
        }

        let mut best: Option<Bid> = None;
        for bidder in Ledger::bidders(env).iter() {
            let Some(bid) = Ledger::bid(env, &bidder) else {
                continue;
            };

            let replace = match &best {
                Some(current) => bid.net_amount > current.net_amount,
                None => true,
            };
            if replace {
                best = Some(bid);
            }
        }

        let mut winning = best.ok_or(AuctionError::NoBids)?;
        winning.settled = true;
        Ledger::save_bid(env, &winning);

        let outcome = Outcome {
            winner: winning.bidder,
            amount: winning.net_amount,
        };
        Ledger::save_outcome(env, &outcome);

        if state != AuctionState::Closed {
            Self::move_to(env, state, AuctionState::Closed);
        }
        event::winner_revealed(env, &outcome.winner, outcome.amount);

        Ok(outcome)
    }

    /// Returns the net amount of a losing bid once the winner is known.
    pub fn refund_losing_bid(env: &Env, bidder: &Address) -> Result<i128, AuctionError> {
        let config = Ledger::config(env)?;

        if Ledger::state(env) != AuctionState::Closed {
            return Err(AuctionError::AuctionNotClosed);
        }

        let outcome = Ledger::outcome(env).ok_or(AuctionError::NoWinner)?;

        let mut bid = match Ledger::bid(env, bidder) {
            Some(bid) if !bid.settled && bid.bidder != outcome.winner => bid,
            _ => return Err(AuctionError::NotALoser),
        };

        let _lock = SettlementLock::acquire(env)?;

        bid.settled = true;
        Ledger::save_bid(env, &bid);
        Ledger::debit(env, bid.net_amount)?;

        distribution::transfer_from_contract(env, &config.token, bidder, &bid.net_amount);

        log!(env, "refunded {} to {}", bid.net_amount, bidder.clone());
        event::refunded(env, bidder, bid.net_amount);

        Ok(bid.net_amount)
    }

    /// Pays the winning net amount to the seller, once.
    pub fn collect_payout(env: &Env, caller: &Address) -> Result<i128, AuctionError> {
        let config = Ledger::config(env)?;
        let seller = Self::ensure_seller(env, caller)?;

        let outcome = Ledger::outcome(env).ok_or(AuctionError::NoWinner)?;

        if Ledger::is_paid_out(env) {
            return Err(AuctionError::AlreadyPaidOut);
        }

        let _lock = SettlementLock::acquire(env)?;

        Ledger::mark_paid_out(env);
        Ledger::debit(env, outcome.amount)?;

        distribution::transfer_from_contract(env, &config.token, &seller, &outcome.amount);

        log!(env, "paid out {} to seller", outcome.amount);
        event::paid_out(env, &seller, outcome.amount);

        Ok(outcome.amount)
    }

    /// Moves the auction to Cancelled. Bidders then claim their own refunds.
    pub fn cancel(env: &Env, caller: &Address) -> Result<(), AuctionError> {
        Ledger::config(env)?;
        let seller = Self::ensure_seller(env, caller)?;

        let state = Ledger::state(env);
        if !state.can_cancel() {
            return Err(AuctionError::InvalidTransition);
        }

        Self::move_to(env, state, AuctionState::Cancelled);
        event::cancelled(env, &seller);

        Ok(())
    }

    /// Returns the full gross deposit, fee included. The seller's entry fee
    /// stays with the auction.
    pub fn refund_cancelled_bid(env: &Env, bidder: &Address) -> Result<i128, AuctionError> {
        let config = Ledger::config(env)?;

        if Ledger::state(env) != AuctionState::Cancelled {
            return Err(AuctionError::AuctionNotCancelled);
        }

        let mut bid = Ledger::bid(env, bidder).ok_or(AuctionError::NotABidder)?;
        if bid.settled {
            return Err(AuctionError::AlreadySettled);
        }

        let _lock = SettlementLock::acquire(env)?;

        bid.settled = true;
        Ledger::save_bid(env, &bid);
        Ledger::return_fee(env, config.bidding_fee)?;
        Ledger::debit(env, bid.gross_amount)?;

        distribution::transfer_from_contract(env, &config.token, bidder, &bid.gross_amount);

        log!(env, "cancellation refund {} to {}", bid.gross_amount, bidder.clone());
        event::refunded(env, bidder, bid.gross_amount);

        Ok(bid.gross_amount)
    }

    /// Sweeps retained fees to the admin once the auction is over. A closed
    /// auction keeps every fee; a cancelled one only keeps the entry fee.
    pub fn collect_fees(env: &Env, caller: &Address) -> Result<i128, AuctionError> {
        let config = Ledger::config(env)?;

        if *caller != config.admin {
            return Err(AuctionError::Unauthorized);
        }

        if Ledger::fees_collected(env) {
            return Err(AuctionError::FeesAlreadyCollected);
        }

        let state = Ledger::state(env);
        if !state.is_terminal() {
            return Err(AuctionError::AuctionNotTerminal);
        }

        let amount = match state {
            AuctionState::Cancelled => config.auction_fee,
            _ => Ledger::total_fees(env),
        };

        let _lock = SettlementLock::acquire(env)?;

        Ledger::mark_fees_collected(env);
        Ledger::debit(env, amount)?;

        distribution::transfer_from_contract(env, &config.token, &config.admin, &amount);

        event::fees_collected(env, &config.admin, amount);

        Ok(amount)
    }

    pub fn ensure_seller(env: &Env, caller: &Address) -> Result<Address, AuctionError> {
        let seller = Ledger::seller(env).ok_or(AuctionError::NotInitiated)?;
        if seller != *caller {
            return Err(AuctionError::Unauthorized);
        }
        Ok(seller)
    }

    /// Seller or admin.
    pub fn ensure_operator(
        env: &Env,
        config: &AuctionConfig,
        caller: &Address,
    ) -> Result<(), AuctionError> {
        if *caller == config.admin {
            return Ok(());
        }
        Self::ensure_seller(env, caller).map(|_| ())
    }

    pub fn move_to(env: &Env, from: AuctionState, to: AuctionState) {
        Ledger::save_state(env, to);
        log!(env, "auction state {} -> {}", from, to);
        event::state_changed(env, from, to);
    }
}
