use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{errors::AuctionError, types::*};

/// Enum representing keys used to store auction data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,         // AuctionConfig fixed at initialization
    State,          // Current AuctionState
    Seller,         // Account that initiated the auction
    TotalFees,      // Fees retained by the auction
    Custody,        // Value the auction currently holds for anyone
    Bid(Address),   // Bid recorded for a bidder
    Bidders,        // Bidders in the order their bids were recorded
    Outcome,        // Winner and winning amount once calculated
    PaidOut,        // Seller collected the winning amount
    FeesCollected,  // Admin swept the retained fees
    SettlementLock, // Held while a settlement transfers value out
}

/// Per-auction balances and settlement flags.
pub struct Ledger;

impl Ledger {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn config(env: &Env) -> Result<AuctionConfig, AuctionError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(AuctionError::NotInitialized)
    }

    pub fn save_config(env: &Env, config: &AuctionConfig) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn state(env: &Env) -> AuctionState {
        env.storage()
            .instance()
            .get(&DataKey::State)
            .unwrap_or(AuctionState::Created)
    }

    pub fn save_state(env: &Env, state: AuctionState) {
        env.storage().instance().set(&DataKey::State, &state);
    }

    pub fn seller(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Seller)
    }

    pub fn save_seller(env: &Env, seller: &Address) {
        env.storage().instance().set(&DataKey::Seller, seller);
    }

    pub fn total_fees(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalFees)
            .unwrap_or(0)
    }

    pub fn add_fee(env: &Env, fee: i128) -> Result<i128, AuctionError> {
        let total = Self::total_fees(env)
            .checked_add(fee)
            .ok_or(AuctionError::Overflow)?;
        env.storage().instance().set(&DataKey::TotalFees, &total);
        Ok(total)
    }

    pub fn return_fee(env: &Env, fee: i128) -> Result<i128, AuctionError> {
        let total = Self::total_fees(env)
            .checked_sub(fee)
            .filter(|total| *total >= 0)
            .ok_or(AuctionError::Overflow)?;
        env.storage().instance().set(&DataKey::TotalFees, &total);
        Ok(total)
    }

    pub fn custody(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Custody)
            .unwrap_or(0)
    }

    pub fn credit(env: &Env, amount: i128) -> Result<(), AuctionError> {
        let custody = Self::custody(env)
            .checked_add(amount)
            .ok_or(AuctionError::Overflow)?;
        env.storage().instance().set(&DataKey::Custody, &custody);
        Ok(())
    }

    pub fn debit(env: &Env, amount: i128) -> Result<(), AuctionError> {
        let custody = Self::custody(env)
            .checked_sub(amount)
            .filter(|custody| *custody >= 0)
            .ok_or(AuctionError::Overflow)?;
        env.storage().instance().set(&DataKey::Custody, &custody);
        Ok(())
    }

    pub fn bid(env: &Env, bidder: &Address) -> Option<Bid> {
        env.storage()
            .persistent()
            .get(&DataKey::Bid(bidder.clone()))
    }

    pub fn has_bid(env: &Env, bidder: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Bid(bidder.clone()))
    }

    /// Stores a new bid and appends the bidder to the recording order.
    pub fn insert_bid(env: &Env, bid: &Bid) {
        env.storage()
            .persistent()
            .set(&DataKey::Bid(bid.bidder.clone()), bid);

        let mut bidders = Self::bidders(env);
        bidders.push_back(bid.bidder.clone());
        env.storage().persistent().set(&DataKey::Bidders, &bidders);
    }

    pub fn save_bid(env: &Env, bid: &Bid) {
        env.storage()
            .persistent()
            .set(&DataKey::Bid(bid.bidder.clone()), bid);
    }

    pub fn bidders(env: &Env) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Bidders)
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn outcome(env: &Env) -> Option<Outcome> {
        env.storage().instance().get(&DataKey::Outcome)
    }

    pub fn save_outcome(env: &Env, outcome: &Outcome) {
        env.storage().instance().set(&DataKey::Outcome, outcome);
    }

    pub fn is_paid_out(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::PaidOut)
            .unwrap_or(false)
    }

    pub fn mark_paid_out(env: &Env) {
        env.storage().instance().set(&DataKey::PaidOut, &true);
    }

    pub fn fees_collected(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::FeesCollected)
            .unwrap_or(false)
    }

    pub fn mark_fees_collected(env: &Env) {
        env.storage().instance().set(&DataKey::FeesCollected, &true);
    }
}

/// Guard held across "mark settled, then transfer". Released when dropped,
/// whichever way the settlement returns.
pub struct SettlementLock<'a> {
    env: &'a Env,
}

impl<'a> SettlementLock<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, AuctionError> {
        if env.storage().instance().has(&DataKey::SettlementLock) {
            return Err(AuctionError::SettlementInProgress);
        }

        env.storage()
            .instance()
            .set(&DataKey::SettlementLock, &true);

        Ok(Self { env })
    }

    pub fn is_held(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::SettlementLock)
    }
}

impl Drop for SettlementLock<'_> {
    fn drop(&mut self) {
        self.env
            .storage()
            .instance()
            .remove(&DataKey::SettlementLock);
    }
}
